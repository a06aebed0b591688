/// Optional monthly spending ceiling
///
/// Unset until the user issues /budget. Only used for advisory warnings,
/// never blocks an add.
#[derive(Debug, Clone, Copy, Default)]
pub struct Budget {
    limit: Option<f64>,
}

impl Budget {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn set(&mut self, amount: f64) {
        self.limit = Some(amount);
    }

    pub fn get(&self) -> Option<f64> {
        self.limit
    }

    pub fn is_set(&self) -> bool {
        self.limit.is_some()
    }
}

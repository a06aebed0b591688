use std::collections::HashSet;

pub const UNCATEGORIZED: &str = "UNCATEGORIZED";

/// The categories every context starts with
pub const DEFAULT_CATEGORIES: [&str; 7] = [
    "FOOD",
    "TRANSPORT",
    "HEALTH",
    "ENTERTAINMENT",
    "UTILITIES",
    "GIFTS",
    UNCATEGORIZED,
];

/// Built-in categories plus the custom ones added at runtime
///
/// All membership checks uppercase the probe, so category matching is
/// case-insensitive everywhere.
#[derive(Debug, Clone, Default)]
pub struct CategorySet {
    custom: HashSet<String>,
}

impl CategorySet {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn is_valid(&self, input: &str) -> bool {
        let name = input.to_uppercase();
        DEFAULT_CATEGORIES.contains(&name.as_str()) || self.custom.contains(&name)
    }

    /// Registers a custom category, returns false when it already existed
    pub fn add_custom(&mut self, name: &str) -> bool {
        let name = name.to_uppercase();
        if self.is_valid(&name) {
            return false;
        }
        self.custom.insert(name);
        true
    }

    pub fn has_custom(&self) -> bool {
        !self.custom.is_empty()
    }

    pub fn clear_custom(&mut self) {
        self.custom.clear();
    }

    pub fn default_categories_string() -> String {
        join_sorted(DEFAULT_CATEGORIES.iter().map(|c| c.to_string()))
    }

    pub fn custom_categories_string(&self) -> String {
        join_sorted(self.custom.iter().cloned())
    }
}

fn join_sorted(categories: impl Iterator<Item = String>) -> String {
    let mut sorted: Vec<String> = categories.collect();
    sorted.sort();
    sorted.join(", ")
}

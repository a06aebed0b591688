use std::slice::Iter;

use crate::models::Expense;

/// An insertion-ordered list of expenses
///
/// Holds one of the two logical sequences (regular or recurring). The
/// order of insertion is the default listing order; sorting commands build
/// a derived view and never touch this sequence.
///
/// It provides methods for:
/// - Adding new expenses to the list
/// - Clearing the list
/// - Counting and iterating over expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseList {
    entries: Vec<Expense>,
}

impl ExpenseList {
    pub fn new() -> Self {
        ExpenseList {
            entries: Vec::new(),
        }
    }

    /// Appends an ```expense``` at the end of the list
    pub fn insert(&mut self, expense: Expense) {
        self.entries.push(expense);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, index: usize) -> Option<&Expense> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> Iter<'_, Expense> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

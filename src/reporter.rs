//! Read-only aggregation over one expense list
//!
//! Every operation is total on an empty list: sums come back as zero, the
//! highest-category lookup degrades to a sentinel message, nothing panics
//! for emptiness.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::Datelike;

use crate::list::ExpenseList;
use crate::messages;
use crate::models::Expense;
use crate::parser::sort::{SortDirection, SortField};

pub struct ExpenseReporter<'a> {
    expenses: &'a ExpenseList,
}

impl<'a> ExpenseReporter<'a> {
    pub fn new(expenses: &'a ExpenseList) -> Self {
        ExpenseReporter { expenses }
    }

    pub fn total(&self) -> f64 {
        // fold from 0.0: the Sum identity for floats is -0.0, which would
        // display as $-0.00 on an empty list
        self.expenses
            .iter()
            .fold(0.0, |total, e| total + e.amount)
    }

    /// Summed amounts per category, covering only categories present
    ///
    /// A BTreeMap so iteration order is lexicographic, which makes every
    /// listing built from it deterministic.
    pub fn total_by_category(&self) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();
        for expense in self.expenses.iter() {
            *totals.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
        }
        totals
    }

    /// Sum restricted to expenses dated in the given year and month
    pub fn total_by_month(&self, year: i32, month: u32) -> f64 {
        self.expenses
            .iter()
            .filter(|e| e.date.year() == year && e.date.month() == month)
            .fold(0.0, |total, e| total + e.amount)
    }

    pub fn average(&self) -> f64 {
        if self.expenses.is_empty() {
            return 0.0;
        }
        self.total() / self.expenses.len() as f64
    }

    /// The category with the highest summed amount
    ///
    /// Ties resolve to the lexicographically first category among the
    /// maxima. Empty totals come back as a sentinel message.
    pub fn highest_category(totals: &BTreeMap<String, f64>) -> String {
        let mut highest: Option<(&str, f64)> = None;
        for (category, total) in totals.iter() {
            match highest {
                Some((_, amount)) if *total <= amount => (),
                _ => highest = Some((category, *total)),
            }
        }
        match highest {
            Some((category, total)) => format!("{} (${:.2})", category, total),
            None => messages::EMPTY_LIST.to_string(),
        }
    }

    /// Multi-line listing of all expenses in current store order
    pub fn list_expenses(&self) -> String {
        if self.expenses.is_empty() {
            return messages::EMPTY_LIST.to_string();
        }
        format_expenses(self.expenses.iter())
    }

    /// One line per category total plus a trailing grand-total line
    pub fn list_all_category_totals(totals: &BTreeMap<String, f64>) -> String {
        let mut out = String::new();
        for (category, total) in totals.iter() {
            out.push_str(&format!("{}: ${:.2}\n", category, total));
        }
        let grand_total = totals.values().fold(0.0, |total, amount| total + amount);
        out.push_str(&format!("{}: ${:.2}", messages::GRAND_TOTAL, grand_total));
        out
    }

    pub fn list_single_category_total(totals: &BTreeMap<String, f64>, category: &str) -> String {
        let category = category.to_uppercase();
        match totals.get(&category) {
            Some(total) => format!("{}: ${:.2}", category, total),
            None => messages::CATEGORY_NOT_FOUND.to_string(),
        }
    }

    /// Expenses of one category, in insertion order
    ///
    /// A blank category is a bug in the caller, not bad user input.
    pub fn expenses_by_category(&self, category: &str) -> Vec<&Expense> {
        assert!(
            !category.trim().is_empty(),
            "expenses_by_category called with a blank category"
        );
        let category = category.to_uppercase();
        self.expenses
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// A derived, newly ordered view of the list
    ///
    /// The sort is stable in both directions, so equal keys keep their
    /// insertion order. The backing list is never reordered.
    pub fn sorted(&self, field: SortField, direction: SortDirection) -> Vec<&Expense> {
        let compare = |a: &&Expense, b: &&Expense| match field {
            SortField::Name => a.description.cmp(&b.description),
            SortField::Amount => a.amount.partial_cmp(&b.amount).unwrap_or(Ordering::Equal),
            SortField::Category => a.category.cmp(&b.category),
            SortField::Date => a.date.cmp(&b.date),
        };
        let mut view: Vec<&Expense> = self.expenses.iter().collect();
        match direction {
            SortDirection::Ascending => view.sort_by(compare),
            SortDirection::Descending => view.sort_by(|a, b| compare(b, a)),
        }
        view
    }
}

/// Numbered multi-line listing
pub fn format_expenses<'e>(expenses: impl Iterator<Item = &'e Expense>) -> String {
    let mut out = String::new();
    for (position, expense) in expenses.enumerate() {
        if position > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}. {}", position + 1, expense));
    }
    out
}

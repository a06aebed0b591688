use chrono::NaiveDate;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Date format used everywhere, input and output
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// A single recorded expenditure
///
/// Immutable once created. The category is stored uppercased, the date is
/// a plain calendar date with no time component.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(description: &str, amount: f64, category: &str, date: NaiveDate) -> Expense {
        Expense {
            description: description.to_string(),
            amount,
            category: category.to_uppercase(),
            date,
        }
    }
}

impl Display for Expense {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | ${:.2} | {} | {}",
            self.description,
            self.amount,
            self.category,
            self.date.format(DATE_FORMAT)
        )
    }
}

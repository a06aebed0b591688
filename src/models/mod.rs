pub mod budget;
pub mod category;
pub mod expense;

pub use budget::Budget;
pub use category::CategorySet;
pub use expense::Expense;

/// Which of the two logical expense lists a command operates on
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ExpenseKind {
    Regular,
    Recurring,
}

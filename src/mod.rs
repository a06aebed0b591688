mod app;
pub mod commands;
mod error;
mod list;
mod messages;
pub mod models;
pub mod parser;
pub mod reporter;

pub use app::{execute_line, run_application, AppContext};
pub use error::CommandError;
pub use list::ExpenseList;

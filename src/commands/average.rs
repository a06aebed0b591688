use crate::app::AppContext;
use crate::error::CommandError;
use crate::models::ExpenseKind;
use crate::reporter::ExpenseReporter;

/// Average command
///
/// Mean regular expense, 0 if the list is empty.
pub fn execute(context: &AppContext) -> Result<String, CommandError> {
    let reporter = ExpenseReporter::new(context.list(ExpenseKind::Regular));
    Ok(format!("Average expense: ${:.2}", reporter.average()))
}

use crate::app::AppContext;
use crate::error::CommandError;
use crate::models::ExpenseKind;
use crate::reporter::ExpenseReporter;

/// Total command
///
/// Sum of all regular expenses, 0 if the list is empty.
pub fn execute(context: &AppContext) -> Result<String, CommandError> {
    let reporter = ExpenseReporter::new(context.list(ExpenseKind::Regular));
    Ok(format!("Total expenses: ${:.2}", reporter.total()))
}

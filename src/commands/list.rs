use crate::app::AppContext;
use crate::error::CommandError;
use crate::models::ExpenseKind;
use crate::reporter::ExpenseReporter;

/// List command
///
/// Prints the selected list in insertion order.
pub fn execute(context: &AppContext, kind: ExpenseKind) -> Result<String, CommandError> {
    let reporter = ExpenseReporter::new(context.list(kind));
    Ok(reporter.list_expenses())
}

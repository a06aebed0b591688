use crate::app::AppContext;
use crate::error::CommandError;
use crate::models::ExpenseKind;
use crate::reporter::{format_expenses, ExpenseReporter};
use crate::parser::sort;

/// List-sort command
///
/// Prints a sorted view of the selected list. The stored order is left
/// untouched; a later /list shows the original sequence.
pub fn execute(
    context: &AppContext,
    arguments: &str,
    kind: ExpenseKind,
) -> Result<String, CommandError> {
    let command = match kind {
        ExpenseKind::Regular => "list-sort",
        ExpenseKind::Recurring => "list-sort-recurring",
    };
    let parsed = sort::parse(command, arguments)?;

    let reporter = ExpenseReporter::new(context.list(kind));
    let view = reporter.sorted(parsed.field, parsed.direction);
    if view.is_empty() {
        return Ok(reporter.list_expenses());
    }
    Ok(format_expenses(view.into_iter()))
}

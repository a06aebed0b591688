use crate::app::AppContext;
use crate::error::CommandError;
use crate::messages;
use crate::models::ExpenseKind;
use crate::parser::utils;
use crate::reporter::ExpenseReporter;

/// Summary command
///
/// Without an argument, prints the highest spending category, every
/// category total and the grand total over the regular list. With a
/// category argument, prints that category's total only.
pub fn execute(context: &AppContext, arguments: &str) -> Result<String, CommandError> {
    let reporter = ExpenseReporter::new(context.list(ExpenseKind::Regular));
    let totals = reporter.total_by_category();

    if utils::is_blank(arguments) {
        let mut out = format!(
            "{}: {}\n",
            messages::HIGHEST_SPEND,
            ExpenseReporter::highest_category(&totals)
        );
        out.push_str(&ExpenseReporter::list_all_category_totals(&totals));
        return Ok(out);
    }

    let tokens: Vec<&str> = arguments.split_whitespace().collect();
    if tokens.len() != 1 {
        return Err(CommandError::FormatError("summary"));
    }
    Ok(ExpenseReporter::list_single_category_total(
        &totals, tokens[0],
    ))
}

use chrono::Utc;
use colored::Colorize;

use crate::app::AppContext;
use crate::error::CommandError;
use crate::models::{category, Expense, ExpenseKind};
use crate::parser::add;

/// Add command
///
/// Records an expense in the regular or the recurring list. A missing
/// category defaults to UNCATEGORIZED, a missing date to today. When a
/// budget is set, prints an advisory warning after the insert; the warning
/// is never part of the returned message.
pub fn execute(
    context: &mut AppContext,
    arguments: &str,
    kind: ExpenseKind,
) -> Result<String, CommandError> {
    let command = match kind {
        ExpenseKind::Regular => "add",
        ExpenseKind::Recurring => "add-recurring",
    };
    let parsed = add::parse(command, arguments)?;

    let category = parsed
        .category
        .unwrap_or_else(|| category::UNCATEGORIZED.to_string());
    let today = Utc::now().naive_utc().date();
    let date = parsed.date.unwrap_or(today);
    let expense = Expense::new(&parsed.description, parsed.amount, &category, date);

    let message = match kind {
        ExpenseKind::Regular => format!("Added expense: {}", expense),
        ExpenseKind::Recurring => format!("Added recurring expense: {}", expense),
    };
    context.list_mut(kind).insert(expense);

    if let Some(warning) = crate::commands::budget::warning(context, today) {
        println!("{}", warning.yellow());
    }

    Ok(message)
}

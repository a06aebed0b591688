use chrono::{Datelike, NaiveDate};

use crate::app::AppContext;
use crate::error::CommandError;
use crate::models::ExpenseKind;
use crate::parser::utils;
use crate::reporter::ExpenseReporter;

/// Fraction of the budget at which the advisory warning starts
const WARNING_THRESHOLD: f64 = 0.9;

/// Budget command
///
/// Sets the monthly spending ceiling for the process lifetime.
pub fn execute(context: &mut AppContext, arguments: &str) -> Result<String, CommandError> {
    if utils::is_blank(arguments) {
        return Err(CommandError::EmptyInput("budget"));
    }
    let tokens: Vec<&str> = arguments.split_whitespace().collect();
    if tokens.len() != 1 {
        return Err(CommandError::FormatError("budget"));
    }
    if !utils::is_valid_amount(tokens[0]) {
        return Err(CommandError::InvalidAmount);
    }
    let amount = tokens[0].parse::<f64>().unwrap();
    context.budget.set(amount);
    Ok(format!("Monthly budget set to ${:.2}", amount))
}

/// Advisory warning against the current month's regular total
///
/// None when no budget is set or the total is comfortably below it.
pub fn warning(context: &AppContext, today: NaiveDate) -> Option<String> {
    let budget = context.budget.get()?;
    let reporter = ExpenseReporter::new(context.list(ExpenseKind::Regular));
    let total = reporter.total_by_month(today.year(), today.month());

    if total >= budget {
        Some(format!(
            "Warning: you have exceeded your monthly budget of ${:.2} by ${:.2}",
            budget,
            total - budget
        ))
    } else if total >= budget * WARNING_THRESHOLD {
        Some(format!(
            "Warning: you are close to your monthly budget of ${:.2}, only ${:.2} left",
            budget,
            budget - total
        ))
    } else {
        None
    }
}

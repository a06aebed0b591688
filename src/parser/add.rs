//! Grammar for the add commands
//!
//! ```text
//! <DESCRIPTION> $<AMOUNT> [/c <CATEGORY>] [/d <DATE>]
//! ```
//!
//! The description is everything before the first `$`. The flags are
//! optional but keep a fixed slot order, `/c` before `/d`. Flag tokens are
//! matched case-insensitively; the description is kept as typed.

use chrono::NaiveDate;

use crate::error::CommandError;
use crate::parser::utils;

/// What a well-formed add argument string carries
///
/// The category is already uppercased; defaults for a missing category or
/// date are applied by the command, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct AddArguments {
    pub description: String,
    pub amount: f64,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
}

pub fn parse(command: &'static str, input: &str) -> Result<AddArguments, CommandError> {
    if utils::is_blank(input) {
        return Err(CommandError::EmptyInput(command));
    }
    let trimmed = input.trim();

    let dollar = trimmed
        .find('$')
        .ok_or(CommandError::FormatError(command))?;
    let description = trimmed[..dollar].trim();
    if description.is_empty() {
        return Err(CommandError::FormatError(command));
    }

    let mut tokens = trimmed[dollar + 1..].split_whitespace();
    let amount_str = tokens.next().ok_or(CommandError::FormatError(command))?;

    let mut category = None;
    let mut date_str = None;
    if let Some(flag) = tokens.next() {
        if flag.eq_ignore_ascii_case("/c") {
            category = Some(tokens.next().ok_or(CommandError::FormatError(command))?);
            if let Some(flag) = tokens.next() {
                if !flag.eq_ignore_ascii_case("/d") {
                    return Err(CommandError::FormatError(command));
                }
                date_str = Some(tokens.next().ok_or(CommandError::FormatError(command))?);
            }
        } else if flag.eq_ignore_ascii_case("/d") {
            date_str = Some(tokens.next().ok_or(CommandError::FormatError(command))?);
        } else {
            return Err(CommandError::FormatError(command));
        }
    }
    if tokens.next().is_some() {
        return Err(CommandError::FormatError(command));
    }

    if !utils::is_valid_amount(amount_str) {
        return Err(CommandError::InvalidAmount);
    }
    let amount = amount_str.parse::<f64>().unwrap();

    let date = match date_str {
        Some(s) => Some(utils::parse_date(s).ok_or(CommandError::InvalidDate)?),
        None => None,
    };

    Ok(AddArguments {
        description: description.to_string(),
        amount,
        category: category.map(|c| c.to_uppercase()),
        date,
    })
}

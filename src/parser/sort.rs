//! Grammar for the list-sort commands
//!
//! ```text
//! <SORT_FIELD> <SORT_DIRECTION>
//! ```
//!
//! Two whitespace-delimited tokens, matched case-insensitively. The field
//! is validated before the direction, so an invalid field wins when both
//! are wrong.

use crate::error::CommandError;
use crate::parser::utils;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SortField {
    Name,
    Amount,
    Category,
    Date,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SortArguments {
    pub field: SortField,
    pub direction: SortDirection,
}

pub fn parse(command: &'static str, input: &str) -> Result<SortArguments, CommandError> {
    if utils::is_blank(input) {
        return Err(CommandError::EmptyInput(command));
    }
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(CommandError::FormatError(command));
    }

    let field = match tokens[0].to_uppercase().as_str() {
        "NAME" => SortField::Name,
        "AMOUNT" => SortField::Amount,
        "CATEGORY" => SortField::Category,
        "DATE" => SortField::Date,
        // an unknown field is a grammar-level mistake
        _ => return Err(CommandError::FormatError(command)),
    };
    let direction = match tokens[1].to_uppercase().as_str() {
        "ASC" => SortDirection::Ascending,
        "DSC" => SortDirection::Descending,
        _ => return Err(CommandError::InvalidSortDirection),
    };

    Ok(SortArguments { field, direction })
}

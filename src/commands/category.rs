use crate::app::AppContext;
use crate::error::CommandError;
use crate::parser::utils;

/// Add-category command
///
/// Registers a custom category for the process lifetime. Matching stays
/// case-insensitive, so "leisure" and "LEISURE" are the same category.
pub fn execute(context: &mut AppContext, arguments: &str) -> Result<String, CommandError> {
    if utils::is_blank(arguments) {
        return Err(CommandError::EmptyInput("add-category"));
    }
    let tokens: Vec<&str> = arguments.split_whitespace().collect();
    if tokens.len() != 1 {
        return Err(CommandError::FormatError("add-category"));
    }

    let name = tokens[0].to_uppercase();
    if !context.categories.add_custom(&name) {
        return Ok(format!("Category {} already exists", name));
    }
    Ok(format!(
        "Added category {}. Custom categories: {}",
        name,
        context.categories.custom_categories_string()
    ))
}

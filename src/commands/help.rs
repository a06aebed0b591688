use crate::error::CommandError;
use crate::messages;
use crate::models::CategorySet;

/// Help command
pub fn execute() -> Result<String, CommandError> {
    Ok(format!(
        "{}\nBuilt-in categories: {}",
        messages::HELP,
        CategorySet::default_categories_string()
    ))
}

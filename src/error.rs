use colored::Colorize;
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Everything that can go wrong with a user command
///
/// Each variant maps to a human-readable message; none of these abort the
/// process. Misuse of the library by calling code (a blank category handed
/// to the reporter, for instance) is a programmer error and panics instead.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    /// The argument string was blank
    EmptyInput(&'static str),
    /// The argument string does not match the command grammar
    FormatError(&'static str),
    InvalidAmount,
    InvalidDate,
    InvalidSortDirection,
    UnknownCommand(String),
}

impl Error for CommandError {}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::EmptyInput(command) => write!(
                f,
                "Argument of the command {} cannot be empty",
                command.bold()
            ),
            CommandError::FormatError(command) => {
                write!(f, "Invalid format for the command {}", command.bold())
            }
            CommandError::InvalidAmount => {
                write!(f, "Amount must be a positive number greater than 0")
            }
            CommandError::InvalidDate => {
                write!(f, "Date must be a real calendar date in the form dd-MM-yyyy")
            }
            CommandError::InvalidSortDirection => {
                write!(f, "Sort direction must be either ASC or DSC")
            }
            CommandError::UnknownCommand(word) => {
                write!(f, "Unknown command {}", word.red().bold())
            }
        }
    }
}

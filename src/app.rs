//! Document the command line interface
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::Editor;
use structopt::StructOpt;

use crate::commands::{add, average, budget, category, help, list, list_sort, summary, total};
use crate::error::CommandError;
use crate::list::ExpenseList;
use crate::messages;
use crate::models::{Budget, CategorySet, ExpenseKind};

#[derive(Debug, StructOpt)]
#[structopt(about = "Command line expense tracker",
version = env ! ("CARGO_PKG_VERSION"),
name = "centavo"
)]
struct Opt {
    /// Execute a single command and exit
    #[structopt(short = "c", long = "command")]
    command: Option<String>,
}

/// Process-lifetime state shared by every command
///
/// Replaces what would otherwise be process-wide singletons; tests build a
/// fresh context each, so nothing leaks between them.
#[derive(Debug, Default)]
pub struct AppContext {
    pub regular: ExpenseList,
    pub recurring: ExpenseList,
    pub categories: CategorySet,
    pub budget: Budget,
}

impl AppContext {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn list(&self, kind: ExpenseKind) -> &ExpenseList {
        match kind {
            ExpenseKind::Regular => &self.regular,
            ExpenseKind::Recurring => &self.recurring,
        }
    }

    pub fn list_mut(&mut self, kind: ExpenseKind) -> &mut ExpenseList {
        match kind {
            ExpenseKind::Regular => &mut self.regular,
            ExpenseKind::Recurring => &mut self.recurring,
        }
    }
}

/// Executes one command line against the context
///
/// The line must start with `/`. Whatever follows the command word is
/// handed to the command's own argument grammar.
pub fn execute_line(context: &mut AppContext, line: &str) -> Result<String, CommandError> {
    let (command, arguments) = match split_command(line) {
        Some(parts) => parts,
        None => return Err(CommandError::UnknownCommand(line.trim().to_string())),
    };

    match command.to_lowercase().as_str() {
        "add" => add::execute(context, arguments, ExpenseKind::Regular),
        "add-recurring" => add::execute(context, arguments, ExpenseKind::Recurring),
        "list" => list::execute(context, ExpenseKind::Regular),
        "list-recurring" => list::execute(context, ExpenseKind::Recurring),
        "list-sort" => list_sort::execute(context, arguments, ExpenseKind::Regular),
        "list-sort-recurring" => list_sort::execute(context, arguments, ExpenseKind::Recurring),
        "total" => total::execute(context),
        "average" => average::execute(context),
        "summary" => summary::execute(context, arguments),
        "budget" => budget::execute(context, arguments),
        "add-category" => category::execute(context, arguments),
        "help" => help::execute(),
        "exit" => Ok(messages::GOODBYE.to_string()),
        _ => Err(CommandError::UnknownCommand(command.to_string())),
    }
}

/// Splits a `/command arguments` line into its two halves
fn split_command(line: &str) -> Option<(&str, &str)> {
    let stripped = line.trim().strip_prefix('/')?;
    match stripped.find(char::is_whitespace) {
        Some(position) => Some((&stripped[..position], &stripped[position + 1..])),
        None => Some((stripped, "")),
    }
}

fn is_exit(line: &str) -> bool {
    match split_command(line) {
        Some((command, _)) => command.eq_ignore_ascii_case("exit"),
        None => false,
    }
}

/// Entry point for the command line app
///
/// With `--command` a single line is executed and the process exits;
/// otherwise an interactive prompt reads commands until /exit.
pub fn run_application(args: Vec<String>) -> Result<(), ()> {
    let opt: Opt = Opt::from_iter(args.iter());
    let mut context = AppContext::new();

    if let Some(line) = opt.command {
        return match execute_line(&mut context, &line) {
            Ok(message) => {
                println!("{}", message);
                Ok(())
            }
            Err(e) => {
                eprintln!("{}", format!("{}", e).red());
                Err(())
            }
        };
    }
    run_prompt(&mut context)
}

fn run_prompt(context: &mut AppContext) -> Result<(), ()> {
    let mut rl = Editor::<()>::new();
    println!("{}", messages::WELCOME);
    loop {
        match rl.readline("> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str());
                match execute_line(context, &line) {
                    Ok(message) => println!("{}", message),
                    Err(e) => eprintln!("{}", format!("{}", e).red()),
                }
                if is_exit(&line) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{:?}", e);
                return Err(());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_by_command_word() {
        let mut context = AppContext::new();
        assert!(execute_line(&mut context, "/add lunch $5.00").is_ok());
        assert!(execute_line(&mut context, "/add-recurring rent $800.00").is_ok());
        assert_eq!(context.regular.len(), 1);
        assert_eq!(context.recurring.len(), 1);

        // command words are case-insensitive
        assert!(execute_line(&mut context, "/TOTAL").is_ok());
        assert_eq!(
            execute_line(&mut context, "/exit").unwrap(),
            messages::GOODBYE
        );
    }

    #[test]
    fn exit_is_detected_by_command_word() {
        assert!(is_exit("/exit"));
        assert!(is_exit("  /EXIT  "));
        // trailing arguments still end the session
        assert!(is_exit("/exit now"));
        assert!(!is_exit("/list"));
        assert!(!is_exit("exit"));
        assert!(!is_exit("/exiting"));
    }

    #[test]
    fn rejects_unknown_words() {
        let mut context = AppContext::new();
        assert_eq!(
            execute_line(&mut context, "no slash"),
            Err(CommandError::UnknownCommand("no slash".to_string()))
        );
        assert_eq!(
            execute_line(&mut context, "/frobnicate now"),
            Err(CommandError::UnknownCommand("frobnicate".to_string()))
        );
    }

    #[test]
    fn one_shot_command() {
        let args: Vec<String> = vec!["testing", "--command", "/total"]
            .iter()
            .map(|x| x.to_string())
            .collect();
        assert!(run_application(args).is_ok());
    }

    #[test]
    fn one_shot_failure() {
        let args: Vec<String> = vec!["testing", "--command", "/add lunch $0"]
            .iter()
            .map(|x| x.to_string())
            .collect();
        assert!(run_application(args).is_err());
    }
}

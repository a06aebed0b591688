use centavo::{execute_line, AppContext, CommandError};

/// Executes a command line that must succeed, returning its message
pub fn run_ok(context: &mut AppContext, line: &str) -> String {
    let res = execute_line(context, line);
    assert!(res.is_ok(), "command failed: {}", line);
    res.unwrap()
}

/// Executes a command line that must fail, returning the error
#[allow(dead_code)]
pub fn run_err(context: &mut AppContext, line: &str) -> CommandError {
    let res = execute_line(context, line);
    assert!(res.is_err(), "command unexpectedly succeeded: {}", line);
    res.unwrap_err()
}

/// A context pre-loaded with a fixed set of regular expenses
#[allow(dead_code)]
pub fn context_with_expenses() -> AppContext {
    let mut context = AppContext::new();
    for line in [
        "/add pizza $5.50 /c FOOD /d 10-06-2025",
        "/add bus fare $2.00 /c TRANSPORT /d 11-06-2025",
        "/add coffee $2.00 /c FOOD /d 12-06-2025",
        "/add movie $4.50 /c ENTERTAINMENT /d 13-06-2025",
    ]
    .iter()
    {
        run_ok(&mut context, line);
    }
    context
}

//! Stateless colored status lines for the console summary.

use console::style;

/// Severity of a console status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Warning,
    Failure,
    Info,
}

/// Prints one status line with the severity tag colored accordingly.
/// Colors drop out automatically when stdout is not a terminal.
pub fn emit(status: Status, msg: &str) {
    let tag = match status {
        Status::Success => style("[OK]").green().bold(),
        Status::Warning => style("[WARN]").yellow().bold(),
        Status::Failure => style("[FAIL]").red().bold(),
        Status::Info => style("[INFO]").magenta().bold(),
    };
    println!("{} {}", tag, msg);
}

pub fn ok(msg: &str) {
    emit(Status::Success, msg);
}

pub fn warn(msg: &str) {
    emit(Status::Warning, msg);
}

pub fn fail(msg: &str) {
    emit(Status::Failure, msg);
}

pub fn info(msg: &str) {
    emit(Status::Info, msg);
}

/// Cyan section banner with a rule above and below the title.
pub fn section(title: &str) {
    let rule = "=".repeat(50);
    println!("\n{}", style(&rule).cyan());
    println!("{}", style(title).cyan());
    println!("{}", style(&rule).cyan());
}

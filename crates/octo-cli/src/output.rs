//! Terminal output formatting utilities.

use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;
use octo_github::{Issue, IssueState};

static QUIET_MODE: AtomicBool = AtomicBool::new(false);

/// Set quiet mode globally. Call once at startup.
pub fn set_quiet(quiet: bool) {
    QUIET_MODE.store(quiet, Ordering::Relaxed);
}

fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::Relaxed)
}

/// Print an error message (always prints to stderr).
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a warning message (always prints to stderr).
pub fn warn(msg: &str) {
    eprintln!("{} {}", "!".yellow(), msg);
}

/// Print an info message (suppressed in quiet mode).
pub fn info(msg: &str) {
    if !is_quiet() {
        println!("{} {}", "→".blue(), msg);
    }
}

/// Print essential machine-readable output (always prints).
///
/// Use for results that should be available for piping, like JSON.
pub fn essential(msg: &str) {
    println!("{msg}");
}

/// Print a horizontal line (suppressed in quiet mode).
pub fn hr() {
    if !is_quiet() {
        println!("{}", "─".repeat(50).dimmed());
    }
}

/// Colored marker for an issue's state; pull requests get a distinct glyph.
#[must_use]
pub fn state_indicator(state: IssueState, is_pull_request: bool) -> String {
    let glyph = if is_pull_request { "⇄" } else { "●" };
    match state {
        IssueState::Open => glyph.green().to_string(),
        IssueState::Closed => glyph.red().to_string(),
    }
}

/// Format an issue reference, `owner/repo#number` when the repository is known.
#[must_use]
pub fn issue_ref(issue: &Issue) -> String {
    issue.repository().map_or_else(
        || format!("#{}", issue.number),
        |repo| format!("{repo}#{}", issue.number),
    )
}

/// Format one search hit as a single line.
#[must_use]
pub fn issue_line(issue: &Issue) -> String {
    let mut line = format!(
        "{} {} {}",
        state_indicator(issue.state, issue.is_pull_request()),
        issue_ref(issue).cyan(),
        issue.title
    );
    if !issue.labels.is_empty() {
        let labels: Vec<&str> = issue.labels.iter().map(|l| l.name.as_str()).collect();
        line.push_str(&format!(" {}", format!("[{}]", labels.join(", ")).dimmed()));
    }
    line
}

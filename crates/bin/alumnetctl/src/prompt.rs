//! Stdin-backed confirmation for destructive commands.

use std::io::{self, BufRead, Write};

use alumnet_app::ports::confirm::ConfirmDelete;

/// Confirmation that asks on the terminal, or answers yes unconditionally
/// when `--yes` was passed.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleConfirm {
    assume_yes: bool,
}

impl ConsoleConfirm {
    #[must_use]
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl ConfirmDelete for ConsoleConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{prompt} [y/N] ");
        let _ = io::stderr().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

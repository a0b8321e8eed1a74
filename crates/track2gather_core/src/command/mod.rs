//! Command seam between input parsing and the domain model.
//!
//! # Responsibility
//! - Define the contract every user-facing command implements.
//! - Carry command outcomes back to the host application.
//!
//! # Invariants
//! - Commands report intent (`exit`, `show_help`) through `CommandResult`;
//!   the host decides how to act on it.

pub mod exit;

use crate::model::contact_book::ContactBook;

/// Executable user command.
pub trait Command {
    /// Runs the command against the current application state.
    fn execute(&self, book: &mut ContactBook) -> CommandResult;
}

/// Outcome of one command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    feedback_to_user: String,
    show_help: bool,
    exit: bool,
}

impl CommandResult {
    pub fn new(feedback_to_user: impl Into<String>, show_help: bool, exit: bool) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
            show_help,
            exit,
        }
    }

    /// Message shown to the user after execution.
    pub fn feedback_to_user(&self) -> &str {
        &self.feedback_to_user
    }

    /// Whether the host should display help.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Whether the host should terminate.
    pub fn is_exit(&self) -> bool {
        self.exit
    }
}

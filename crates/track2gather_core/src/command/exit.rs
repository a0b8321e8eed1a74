//! Exit command.

use crate::command::{Command, CommandResult};
use crate::model::contact_book::ContactBook;
use log::info;

/// Signals the host application to terminate. Leaves state untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    /// Input keyword that selects this command.
    pub const COMMAND_WORD: &'static str = "exit";
    pub const MESSAGE_EXIT_ACKNOWLEDGEMENT: &'static str =
        "Exiting Track2Gather as requested ...";
}

impl Command for ExitCommand {
    fn execute(&self, book: &mut ContactBook) -> CommandResult {
        info!(
            "event=command_execute module=command status=ok command={} tracked={}",
            Self::COMMAND_WORD,
            book.len()
        );
        CommandResult::new(Self::MESSAGE_EXIT_ACKNOWLEDGEMENT, false, true)
    }
}

//! Core domain logic for Track2Gather.
//! This crate is the single source of truth for person record invariants.

pub mod command;
pub mod logging;
pub mod model;

pub use command::exit::ExitCommand;
pub use command::{Command, CommandResult};
pub use logging::{init_logging, logging_status, LogLevel, LoggingConfig};
pub use model::contact_book::{ContactBook, ContactBookError, ContactBookResult};
pub use model::fields::{Address, CaseNumber, Email, FieldError, Name, Phone, ShnPeriod, Tag};
pub use model::person::{CaseDetails, Person, PersonBuilder, PersonError, PersonField};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

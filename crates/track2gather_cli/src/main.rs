//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `track2gather_core` linkage without the desktop shell.
//! - Initialize logging when `TRACK2GATHER_LOG_DIR` is set.

use std::process::ExitCode;
use track2gather_core::{
    core_version, init_logging, Command, ContactBook, ExitCommand, LoggingConfig,
};

fn main() -> ExitCode {
    let logging = LoggingConfig::from_env().and_then(|config| match config {
        Some(config) => init_logging(&config),
        None => Ok(()),
    });
    if let Err(err) = logging {
        eprintln!("track2gather: logging disabled: {err}");
    }

    println!("track2gather_core version={}", core_version());

    let mut book = ContactBook::new();
    let result = ExitCommand.execute(&mut book);
    println!("{}", result.feedback_to_user());
    log::info!("event=cli_exit module=cli status=ok");

    if result.is_exit() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

//! Command implementations for mm-cli.
//!
//! Each function dispatches one intent to the store, reads the owning
//! slice's snapshot, and either renders it or fails with the slice's error
//! message. The process exit code is the only thing the view layer adds on
//! top of the slice contract.

pub mod cart;
pub mod orders;
pub mod products;
pub mod user;

use thiserror::Error;

/// Errors surfaced to the CLI user.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The dispatched operation settled with an error in its slice.
    #[error("{0}")]
    Operation(String),

    /// Command input failed validation before any dispatch.
    #[error("{0}")]
    InvalidInput(String),
}

/// Fail when a slice settled with an error.
fn fail_on_error(error: &str) -> Result<(), CommandError> {
    if error.is_empty() {
        Ok(())
    } else {
        Err(CommandError::Operation(error.to_owned()))
    }
}

/// Parse an email argument.
fn parse_email(raw: &str) -> Result<madrona_core::Email, CommandError> {
    madrona_core::Email::parse(raw).map_err(|e| CommandError::InvalidInput(e.to_string()))
}

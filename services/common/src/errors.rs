//! Common error types for services

use thiserror::Error;

/// Data provider error types
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No channel exists with the given id
    #[error("Unknown channel: {0}")]
    UnknownChannel(u64),

    /// The requested update is not applicable to the entity
    #[error("Invalid update: {0}")]
    InvalidUpdate(String),
}

//! Error types for session setup.
//!
//! Nothing in this crate is fatal at runtime: filters fall back to identity
//! passes and interceptors decline. The only errors worth a type are the
//! ones a host sees while wiring a session together.

use thiserror::Error;

/// Failure while constructing session components.
#[derive(Debug, Error)]
pub enum SetupError {
    /// A named translator could not be instantiated.
    #[error("translator '{name}' failed to initialize: {reason}")]
    Translator { name: String, reason: String },

    /// Configuration could not be read or parsed.
    #[error("config: {0}")]
    Config(String),
}

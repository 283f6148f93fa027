//! Error types for Trellis core.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by Trellis core operations.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// An element tree operation referenced an unknown or invalid node.
    #[error("tree")]
    Tree(String),

    /// A listener operation referenced a registration that doesn't exist.
    #[error("listener")]
    Listener(String),

    /// Invalid input, such as a malformed node name.
    #[error("invalid")]
    Invalid(String),
}

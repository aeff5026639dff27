//! Typenames error types.

use serde::{Deserialize, Serialize};

/// Common error type used throughout.
///
/// Formatting a descriptor whose backend has no namespace is not reported
/// here; see [`crate::textual::backend_namespace`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Type error: {0}")]
    TypeError(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Convenience result type used across cardflow.
pub type CardflowResult<T> = Result<T, CardflowError>;

/// Top-level error taxonomy used by the public APIs.
///
/// The per-frame core (scrolling, entrance animation, ticker) never fails; errors only come
/// from validating user-provided tuning, loading configuration and replaying input scripts.
#[derive(thiserror::Error, Debug)]
pub enum CardflowError {
    /// Invalid tuning values or geometry.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration could not be loaded or is inconsistent.
    #[error("config error: {0}")]
    Config(String),

    /// Input script could not be replayed.
    #[error("script error: {0}")]
    Script(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardflowError {
    /// Build a [`CardflowError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CardflowError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`CardflowError::Script`] value.
    pub fn script(msg: impl Into<String>) -> Self {
        Self::Script(msg.into())
    }

    /// Build a [`CardflowError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for CardflowError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

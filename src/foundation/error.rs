/// Convenience result type used across snakegrid.
pub type SnakeResult<T> = Result<T, SnakeError>;

/// Top-level error taxonomy used by generator APIs.
#[derive(thiserror::Error, Debug)]
pub enum SnakeError {
    /// Rejected configuration values.
    #[error("validation error: {0}")]
    Validation(String),

    /// The assembled SVG document did not parse.
    #[error("document error: {0}")]
    Document(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SnakeError {
    /// Build a [`SnakeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SnakeError::Document`] value.
    pub fn document(msg: impl Into<String>) -> Self {
        Self::Document(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

/// Convenience result type used across Seaglass.
pub type SeaglassResult<T> = Result<T, SeaglassError>;

/// Top-level error taxonomy used by renderer and scene APIs.
#[derive(thiserror::Error, Debug)]
pub enum SeaglassError {
    /// Invalid user-provided configuration, geometry or scene data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing or compositing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SeaglassError {
    /// Build a [`SeaglassError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SeaglassError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

impl From<serde_json::Error> for SeaglassError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

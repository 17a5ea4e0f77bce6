/// Convenience result type used across scrollfolio.
pub type ScrollfolioResult<T> = Result<T, ScrollfolioError>;

/// Top-level error taxonomy used by stage APIs.
#[derive(thiserror::Error, Debug)]
pub enum ScrollfolioError {
    /// Invalid authored configuration (timing windows, profiles, overlay tables).
    #[error("validation error: {0}")]
    Validation(String),

    /// A collaborator required at startup was never supplied.
    #[error("missing dependency: {0}")]
    MissingDependency(String),

    /// A collaborator failed while producing a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollfolioError {
    /// Build a [`ScrollfolioError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollfolioError::MissingDependency`] value.
    pub fn missing_dependency(msg: impl Into<String>) -> Self {
        Self::MissingDependency(msg.into())
    }

    /// Build a [`ScrollfolioError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ScrollfolioError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ScrollfolioError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

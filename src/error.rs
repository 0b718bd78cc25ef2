//! Error types for page enhancement

use thiserror::Error;

/// Main error type for enhancement operations
#[derive(Error, Debug)]
pub enum EnhanceError {
    #[error("no element matches selector '{0}'")]
    ElementNotFound(String),

    #[error("selector '{0}' was rejected by the selector engine")]
    InvalidSelector(String),

    #[error("class name '{0}' was rejected by the class list")]
    InvalidClassName(String),

    #[error("failed to attach click listener: {0}")]
    Listener(String),

    #[error("no document available in this environment")]
    DocumentUnavailable,

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for enhancement operations
pub type EnhanceResult<T> = Result<T, EnhanceError>;

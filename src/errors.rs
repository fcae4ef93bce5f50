use thiserror::Error;

/// Error type for layergraph operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayerGraphError {
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
    #[error("not found: {0}")]
    NotFound(String),
}

impl LayerGraphError {
    pub fn invalid_operation<T: Into<String>>(msg: T) -> Self {
        LayerGraphError::InvalidOperation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        LayerGraphError::NotFound(msg.into())
    }
}

pub type GraphResult<T> = Result<T, LayerGraphError>;

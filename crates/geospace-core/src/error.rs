// crates/geospace-core/src/error.rs
use std::time::Duration;
use thiserror::Error;

/// Who is at fault when an operation fails.
///
/// `Client` maps to a 400-class reply (bad input, unknown place), `Server`
/// to a 500-class one (storage down, deadline exceeded, broken dataset).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Client,
    Server,
}

#[derive(Debug, Error)]
pub enum GeoError {
    /// A required parameter was missing or blank.
    #[error("{field} parameter cannot be empty")]
    EmptyParam { field: &'static str },

    /// A parameter was present but unusable (not a number, out of range, NaN).
    #[error("invalid {field}: {reason}")]
    InvalidParam { field: &'static str, reason: String },

    /// The name (or alias) does not resolve to any place.
    #[error("place not found: {0}")]
    PlaceNotFound(String),

    /// The place backend could not answer.
    #[error("storage unavailable: {0}")]
    Storage(String),

    /// A bounded wait ran out before the backend answered.
    #[error("{operation} timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },

    /// Dataset or config file missing on disk.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary cache error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl GeoError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        GeoError::InvalidParam {
            field,
            reason: reason.into(),
        }
    }

    /// Classifies the error for the calling layer.
    pub fn class(&self) -> ErrorClass {
        match self {
            GeoError::EmptyParam { .. }
            | GeoError::InvalidParam { .. }
            | GeoError::PlaceNotFound(_) => ErrorClass::Client,
            GeoError::Storage(_)
            | GeoError::Timeout { .. }
            | GeoError::NotFound(_)
            | GeoError::Io(_)
            | GeoError::Json(_)
            | GeoError::Bincode(_)
            | GeoError::InvalidData(_) => ErrorClass::Server,
        }
    }

    /// True only for the domain "no such place" condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GeoError::PlaceNotFound(_))
    }

    /// HTTP status an outer layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            GeoError::Timeout { .. } => 504,
            GeoError::Storage(_) => 503,
            _ => match self.class() {
                ErrorClass::Client => 400,
                ErrorClass::Server => 500,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, GeoError>;

//! Error type for request handling and diagnostics.

use thiserror::Error;

/// Errors raised by `binary_race`.
#[derive(Error, Debug)]
pub enum Error {
    /// Magnitude input was not a base-10 integer.
    #[error("magnitude must be an integer, got {0:?}")]
    InvalidMagnitude(String),

    /// Mode selector was not one of `iterative`, `recursive`, `both`.
    #[error("unknown mode {0:?}, expected iterative, recursive or both")]
    InvalidMode(String),

    /// The two converters disagreed for the same magnitude.
    ///
    /// Only ever logged; a chart point is still produced.
    #[error("conversions differ for n={n}: iterative {iterative}, recursive {recursive}")]
    InternalInconsistency {
        /// Magnitude that was converted.
        n: i64,
        /// Iterative output.
        iterative: String,
        /// Recursive output.
        recursive: String,
    },

    /// I/O failure, e.g. binding the listener.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization failure.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Stable identifier for the error kind, used in structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidMagnitude(_) => "InvalidMagnitude",
            Error::InvalidMode(_) => "InvalidMode",
            Error::InternalInconsistency { .. } => "InternalInconsistency",
            Error::Io(_) => "Io",
            Error::Json(_) => "Json",
        }
    }
}

/// Result alias for `binary_race` operations.
pub type Result<T> = std::result::Result<T, Error>;

// Convert to HTTP status codes for API responses
#[cfg(feature = "server")]
impl From<&Error> for axum::http::StatusCode {
    fn from(err: &Error) -> Self {
        use axum::http::StatusCode;
        match err {
            Error::InvalidMagnitude(_) | Error::InvalidMode(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::InvalidMagnitude("abc".into());
        assert_eq!(err.to_string(), "magnitude must be an integer, got \"abc\"");
        assert_eq!(err.kind(), "InvalidMagnitude");

        let err = Error::InternalInconsistency {
            n: 5,
            iterative: "101".into(),
            recursive: "100".into(),
        };
        assert_eq!(err.kind(), "InternalInconsistency");
        assert!(err.to_string().contains("n=5"));
    }
}

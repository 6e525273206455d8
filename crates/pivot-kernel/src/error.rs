//! Error types for pivot kernel operations.

/// Errors raised around the pivot scan.
///
/// The scan itself is total; these cover caller-contract violations and the
/// input surfaces that feed it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PivotError {
    /// The caller supplied no sequence where one is required.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A balance was requested for an index outside the sequence.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A token in a textual sequence is not an integer.
    #[error("cannot parse {token:?} as an integer: {reason}")]
    Parse { token: String, reason: String },

    /// A JSON sequence document is malformed.
    #[error("invalid json sequence: {0}")]
    Json(String),

    /// Reading an input source failed.
    #[error("io error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for PivotError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}

impl From<std::io::Error> for PivotError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

use std::sync::Arc;

/// Errors produced while opening, reading or reindexing a weights file.
#[derive(Debug, thiserror::Error)]
pub enum WeightsError {
    /// A header or data line does not have the expected shape.
    #[error("format error on line {line}: {message}")]
    Format { line: usize, message: String },

    /// A neighbor id that never occurs as an origin id.
    #[error("dangling reference: neighbor {neighbor:?} of {origin:?} is not an origin id")]
    DanglingReference { origin: Arc<str>, neighbor: Arc<str> },

    /// An explicit id ordering lists the same id more than once.
    #[error("duplicate id {0:?} in id ordering")]
    DuplicateId(Arc<str>),

    /// An explicit id ordering names an id with no adjacency entry.
    #[error("id {0:?} in id ordering has no adjacency entry")]
    UnknownId(Arc<str>),

    /// The header's declared count disagrees with the observed origin count.
    #[error("header declares {declared} observations, found {observed}")]
    CountMismatch { declared: String, observed: usize },

    /// The file was already read; rewind with `seek(0)` to read again.
    #[error("no more records: file already read")]
    SequenceExhausted,

    /// The reader was closed.
    #[error("operation on closed reader")]
    Closed,

    /// The requested mode is not supported by this format.
    #[error("unsupported mode {0:?}: gwt files are read-only")]
    Mode(String),

    /// Only seeking to the start of the file is supported.
    #[error("unsupported seek to position {0}: only seek(0) is supported")]
    UnsupportedSeek(u64),

    /// The weights and neighbors maps disagree in shape.
    #[error("inconsistent weights: {0}")]
    Shape(String),

    #[error("invalid options: {0}")]
    Options(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WeightsError {
    pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
        WeightsError::Format { line, message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, WeightsError>;

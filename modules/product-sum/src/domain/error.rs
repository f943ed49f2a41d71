//! Domain errors for the product sum module.

use thiserror::Error;

/// Error classes surfaced by the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Request is missing a required field. The client must fix the request.
    InvalidInput,
    /// Named file does not exist in the data directory.
    NotFound,
    /// CSV structural or numeric defect found by the aggregator.
    MalformedInput,
    /// Any other I/O or unexpected failure while processing the file.
    ProcessingFailure,
}

/// First defect found while scanning a CSV document.
///
/// Line numbers are 1-based and count the header.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregationError {
    #[error("input file not in CSV format: no lines")]
    EmptyDocument,

    #[error("invalid CSV format in line {line}: expected 2 fields, found {fields}: {content}")]
    FieldCount {
        line: usize,
        fields: usize,
        content: String,
    },

    #[error("invalid number format in line {line}: {value}")]
    InvalidQuantity { line: usize, value: String },

    #[error("sum overflowed a 64-bit integer in line {line}")]
    Overflow { line: usize },
}

impl AggregationError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyDocument | Self::FieldCount { .. } | Self::InvalidQuantity { .. } => {
                ErrorKind::MalformedInput
            }
            Self::Overflow { .. } => ErrorKind::ProcessingFailure,
        }
    }
}

/// Errors returned by [`ProductSumService`](crate::domain::service::ProductSumService).
///
/// Every variant carries the requested filename when it is known so the
/// REST layer can echo it back.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid input: {message}")]
    InvalidInput {
        file: Option<String>,
        message: String,
    },

    #[error("file not found: {file}")]
    NotFound { file: String },

    #[error("malformed input in {file}: {source}")]
    MalformedInput {
        file: String,
        #[source]
        source: AggregationError,
    },

    #[error("error processing {file}: {message}")]
    ProcessingFailure { file: String, message: String },
}

impl DomainError {
    #[must_use]
    pub fn invalid_input(file: Option<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            file,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn file_not_found(file: impl Into<String>) -> Self {
        Self::NotFound { file: file.into() }
    }

    #[must_use]
    pub fn processing_failure(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProcessingFailure {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Classify an aggregator failure for `file`.
    #[must_use]
    pub fn from_aggregation(file: impl Into<String>, source: AggregationError) -> Self {
        let file = file.into();
        match source.kind() {
            ErrorKind::MalformedInput => Self::MalformedInput { file, source },
            _ => Self::ProcessingFailure {
                file,
                message: source.to_string(),
            },
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::MalformedInput { .. } => ErrorKind::MalformedInput,
            Self::ProcessingFailure { .. } => ErrorKind::ProcessingFailure,
        }
    }

    /// Requested filename, if the request got far enough to name one.
    #[must_use]
    pub fn file(&self) -> Option<&str> {
        match self {
            Self::InvalidInput { file, .. } => file.as_deref(),
            Self::NotFound { file }
            | Self::MalformedInput { file, .. }
            | Self::ProcessingFailure { file, .. } => Some(file),
        }
    }
}

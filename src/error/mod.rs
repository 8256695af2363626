//! Error types and handling infrastructure for the contact conversion

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::mapping::MIN_INPUT_FIELDS;

/// Fatal errors that abort a conversion run
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    /// A row failure promoted to fatal (strict mode only)
    #[error("strict mode: {0}")]
    Strict(RowWarning),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ConvertError {
    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Io { message, path } => match path {
                Some(path) => format!("IO error on {}: {}", path.display(), message),
                None => format!("IO error: {}", message),
            },
            Self::Configuration { message } => {
                format!("Invalid configuration: {}", message)
            }
            Self::Strict(warning) => format!("Aborted by strict mode: {}", warning),
            Self::Other(err) => format!("Unexpected error: {}", err),
        }
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            path: None,
        }
    }
}

/// Row-level failures, recovered by skipping the row
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
pub enum RowError {
    #[error("empty line")]
    Empty,

    #[error("too few fields ({found} found, expected at least {expected})")]
    TooFewFields { found: usize, expected: usize },
}

impl RowError {
    pub fn too_few_fields(found: usize) -> Self {
        Self::TooFewFields {
            found,
            expected: MIN_INPUT_FIELDS,
        }
    }
}

/// A recovered row failure, annotated with its input position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowWarning {
    /// 1-based physical line number in the input
    pub line_number: usize,
    /// Raw line content, when it adds context to the message
    pub line: Option<String>,
    pub error: RowError,
}

impl RowWarning {
    pub fn new(line_number: usize, line: Option<String>, error: RowError) -> Self {
        Self {
            line_number,
            line,
            error,
        }
    }
}

impl fmt::Display for RowWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} skipped: {}", self.line_number, self.error)?;
        if let Some(line) = &self.line {
            write!(f, " (line: {})", line)?;
        }
        Ok(())
    }
}

/// Result type for whole-run operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Result type for per-row operations
pub type RowResult<T> = Result<T, RowError>;

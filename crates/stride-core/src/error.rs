//! Error types for the planner library.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Comprehensive error type for all planner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Not enough calendar weeks between today and race day
    #[error(
        "Not enough time before race: {available_weeks} training weeks available, \
         at least {required_weeks} needed. Choose a later race date or a shorter race."
    )]
    InsufficientLeadTime {
        available_weeks: i64,
        required_weeks: u32,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Calendar arithmetic left the supported date range
    #[error("Date arithmetic error: {source}")]
    DateArithmetic {
        #[from]
        source: jiff::Error,
    },
    /// An alternate plan strategy failed or produced an unusable plan
    #[error("Plan strategy '{name}' failed: {message}")]
    Strategy { name: String, message: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlannerError {
        PlannerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

/// Builder for creating strategy errors.
pub struct StrategyErrorBuilder {
    name: String,
}

impl StrategyErrorBuilder {
    /// Create a new strategy error builder for the named strategy.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Build the error with the given message.
    pub fn with_message(self, message: impl Into<String>) -> PlannerError {
        PlannerError::Strategy {
            name: self.name,
            message: message.into(),
        }
    }
}

impl PlannerError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a builder for strategy errors.
    pub fn strategy(name: impl Into<String>) -> StrategyErrorBuilder {
        StrategyErrorBuilder::new(name)
    }

    /// Whether the error was caused by the caller's request rather than by
    /// the environment. Such errors must not be retried.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            PlannerError::InsufficientLeadTime { .. } | PlannerError::InvalidInput { .. }
        )
    }
}

/// Specialized extension trait for file-system Results.
pub trait FileSystemResultExt<T> {
    /// Map I/O errors to a `FileSystem` error carrying the path.
    fn fs_context(self, path: &Path) -> Result<T>;
}

impl<T> FileSystemResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| PlannerError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;

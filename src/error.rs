//! Defines the error types returned by every guard.
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// The broad category of a guard failure.
///
// Callers branch on this instead of matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GuardErrorKind {
    /// The value is absent, negative, zero, or empty when it must not be.
    InvalidArgument,
    /// The value's type does not match an expected type or capability.
    TypeMismatch,
    /// A referenced filesystem path does not exist.
    NotFound,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuardError {
    #[error("Argument '{argument}' must not be absent.")]
    Absent { argument: String },
    #[error("Argument '{argument}' must not be negative.")]
    Negative { argument: String },
    #[error("Argument '{argument}' must not be ''.")]
    EmptyString { argument: String },
    #[error("Argument '{argument}' must not be zero.")]
    Zero { argument: String },
    #[error("Argument '{argument}' must not be empty.")]
    EmptyCollection { argument: String },
    #[error("Argument '{argument}' must be of type {expected}. Got {actual}.")]
    WrongType { argument: String, expected: String, actual: String },
    #[error("Argument '{argument}' must be a valid file path (text, bytes, or path). Got {actual}.")]
    NotPathLike { argument: String, actual: String },
    #[error("Argument '{argument}' must be an iterable (not text/bytes). Got {actual}.")]
    NotIterable { argument: String, actual: String },
    #[error("File not found for argument '{}': '{}'", .argument, .path.display())]
    FileNotFound { argument: String, path: PathBuf },
    #[error("Directory not found for argument '{}': '{}'", .argument, .path.display())]
    DirectoryNotFound { argument: String, path: PathBuf },
}

impl GuardError {
    /// Maps the specific rejection onto its failure category.
    pub fn kind(&self) -> GuardErrorKind {
        match self {
            GuardError::Absent { .. }
            | GuardError::Negative { .. }
            | GuardError::EmptyString { .. }
            | GuardError::Zero { .. }
            | GuardError::EmptyCollection { .. } => GuardErrorKind::InvalidArgument,
            GuardError::WrongType { .. }
            | GuardError::NotPathLike { .. }
            | GuardError::NotIterable { .. } => GuardErrorKind::TypeMismatch,
            GuardError::FileNotFound { .. } | GuardError::DirectoryNotFound { .. } => {
                GuardErrorKind::NotFound
            }
        }
    }

    /// The name of the argument that was rejected.
    pub fn argument(&self) -> &str {
        match self {
            GuardError::Absent { argument }
            | GuardError::Negative { argument }
            | GuardError::EmptyString { argument }
            | GuardError::Zero { argument }
            | GuardError::EmptyCollection { argument }
            | GuardError::WrongType { argument, .. }
            | GuardError::NotPathLike { argument, .. }
            | GuardError::NotIterable { argument, .. }
            | GuardError::FileNotFound { argument, .. }
            | GuardError::DirectoryNotFound { argument, .. } => argument,
        }
    }
}

pub type GuardResult<T> = Result<T, GuardError>;

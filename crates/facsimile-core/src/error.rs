//! Error types for exact printing

use crate::position::{Pos, Span};
use crate::syntax::NodeKind;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a printing pass.
///
/// Every variant aborts the pass: output produced before the failure is not
/// considered valid, and the engine is deterministic so retrying the same
/// input fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrintError {
    /// A visited node has no annotation of the shape its renderer needs
    #[error("Missing {kind} annotation for node at {span}")]
    MissingAnnotation { kind: NodeKind, span: Span },

    /// A node kind with no renderer
    #[error("Unsupported {kind} node at {span}")]
    UnsupportedVariant { kind: NodeKind, span: Span },

    /// A pad target precedes the cursor (corrupt annotation or comment ordering)
    #[error("Cannot move backwards from {cursor} to {target}")]
    NonMonotonicPosition { cursor: Pos, target: Pos },

    /// A list combinator received the wrong number of separator positions
    #[error("Malformed {context}: expected {expected} positions, found {found}")]
    MalformedListArity {
        context: &'static str,
        expected: String,
        found: usize,
    },
}

/// Main error type for facsimile operations
#[derive(Debug, Error)]
pub enum FacsimileError {
    /// Printing pass failed
    #[error("Print error: {0}")]
    Print(#[from] PrintError),

    /// Configuration loading or validation errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Malformed print job input
    #[error("Input error: {message}")]
    InputError { message: String },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    InternalError { message: String },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Print,
    Config,
    Input,
    Io,
    Internal,
}

impl FacsimileError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FacsimileError::Print(_) => ErrorKind::Print,
            FacsimileError::ConfigError { .. } => ErrorKind::Config,
            FacsimileError::InputError { .. } => ErrorKind::Input,
            FacsimileError::IoError { .. } => ErrorKind::Io,
            FacsimileError::InternalError { .. } => ErrorKind::Internal,
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an input error
    pub fn input_error(message: impl Into<String>) -> Self {
        Self::InputError {
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    /// Create an internal error
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for FacsimileError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            path: PathBuf::new(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for FacsimileError {
    fn from(err: serde_json::Error) -> Self {
        Self::InputError {
            message: err.to_string(),
        }
    }
}

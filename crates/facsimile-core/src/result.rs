//! Result type aliases

use crate::error::{FacsimileError, PrintError};

/// Standard Result type for facsimile operations
pub type Result<T> = std::result::Result<T, FacsimileError>;

/// Result of a step inside a printing pass
pub type PrintResult<T> = std::result::Result<T, PrintError>;

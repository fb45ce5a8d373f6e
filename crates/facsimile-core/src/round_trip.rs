//! Round-trip validation
//!
//! Prints a job and compares the result with the source it was parsed
//! from. A faithful pass reproduces the source byte for byte; anything else
//! is reported with the first differing position and a unified diff.
//!
//! # Example
//!
//! ```rust,ignore
//! use facsimile_core::round_trip::RoundTripValidator;
//!
//! let validator = RoundTripValidator::new();
//! let result = validator.validate(&job, &source)?;
//! assert!(result.is_valid(), "{}", result.diff);
//! ```

use crate::config::PrintOptions;
use crate::exact::exact_print_module;
use crate::job::PrintJob;
use crate::position::Pos;
use crate::result::Result;
use similar::TextDiff;
use tracing::debug;

/// Outcome of printing a job against its original source
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// Whether the printed text equals the original
    pub is_valid: bool,
    pub original: String,
    pub printed: String,
    /// First position at which the two texts disagree
    pub first_difference: Option<Pos>,
    /// Unified diff from original to printed, empty when they match
    pub diff: String,
    /// Whether a second pass over the same job printed the same text
    pub idempotent: bool,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Human readable list of everything that went wrong
    pub fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if let Some(pos) = self.first_difference {
            issues.push(format!("Printed text differs from the source at {pos}"));
        }
        if self.original.len() != self.printed.len() {
            issues.push(format!(
                "Printed {} bytes, source has {}",
                self.printed.len(),
                self.original.len()
            ));
        }
        if !self.idempotent {
            issues.push("Printing the same job twice gave different text".to_string());
        }

        issues
    }
}

/// Checks that printing reproduces the source
#[derive(Debug, Clone, Default)]
pub struct RoundTripValidator {
    options: PrintOptions,
}

impl RoundTripValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: PrintOptions) -> Self {
        Self { options }
    }

    /// Print `job` twice and compare against `original`.
    ///
    /// Printing errors are returned as errors; a mismatch is not an error
    /// but an invalid result.
    pub fn validate(&self, job: &PrintJob, original: &str) -> Result<ValidationResult> {
        let printed = self.print(job)?;
        let again = self.print(job)?;

        let first_difference = first_difference(original, &printed);
        let diff = match first_difference {
            Some(_) => unified_diff(original, &printed),
            None => String::new(),
        };
        debug!(valid = first_difference.is_none(), "round trip checked");

        Ok(ValidationResult {
            is_valid: first_difference.is_none(),
            original: original.to_string(),
            idempotent: printed == again,
            printed,
            first_difference,
            diff,
        })
    }

    fn print(&self, job: &PrintJob) -> Result<String> {
        Ok(exact_print_module(
            &job.module,
            &job.annotations,
            &job.comments,
            self.options,
        )?)
    }
}

/// Position of the first character at which `expected` and `actual` differ.
///
/// When one text is a prefix of the other, the position just past the
/// shorter one.
pub fn first_difference(expected: &str, actual: &str) -> Option<Pos> {
    let mut pos = Pos::START;
    let mut left = expected.chars();
    let mut right = actual.chars();

    loop {
        match (left.next(), right.next()) {
            (None, None) => return None,
            (Some(a), Some(b)) if a == b => {
                pos = if a == '\n' {
                    Pos::new(pos.line + 1, 1)
                } else {
                    Pos::new(pos.line, pos.column + 1)
                };
            }
            _ => return Some(pos),
        }
    }
}

/// Unified line diff from `original` to `printed`
pub fn unified_diff(original: &str, printed: &str) -> String {
    TextDiff::from_lines(original, printed)
        .unified_diff()
        .context_radius(3)
        .header("original", "printed")
        .to_string()
}

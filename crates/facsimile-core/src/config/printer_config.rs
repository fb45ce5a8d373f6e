//! Printer configuration types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What to do when a node has no renderer
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnsupportedPolicy {
    /// Abort the pass with `UnsupportedVariant`
    #[default]
    Error,
    /// Write a marked placeholder comment and keep going
    Placeholder,
}

/// Printer configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrinterConfiguration {
    /// Policy for node kinds without a renderer
    #[schemars(description = "Unsupported node kinds: 'error' or 'placeholder'")]
    pub unsupported_variants: Option<UnsupportedPolicy>,

    /// Flush comments left in the queue after the root node
    #[schemars(description = "Print comments that follow the last token")]
    pub emit_remaining_comments: Option<bool>,

    /// Treat a backwards pad target as fatal
    #[schemars(description = "Fail when a position precedes the cursor")]
    pub verify_monotonic: Option<bool>,
}

impl Default for PrinterConfiguration {
    fn default() -> Self {
        Self {
            unsupported_variants: Some(UnsupportedPolicy::Error),
            emit_remaining_comments: Some(true),
            verify_monotonic: Some(true),
        }
    }
}

impl PrinterConfiguration {
    /// Resolve unset fields to their defaults
    pub fn options(&self) -> PrintOptions {
        PrintOptions {
            unsupported: self.unsupported_variants.unwrap_or_default(),
            emit_remaining_comments: self.emit_remaining_comments.unwrap_or(true),
            verify_monotonic: self.verify_monotonic.unwrap_or(true),
        }
    }
}

/// Resolved settings of one printing run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions {
    pub unsupported: UnsupportedPolicy,
    pub emit_remaining_comments: bool,
    pub verify_monotonic: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrinterConfiguration::default().options()
    }
}

//! Configuration system for facsimile
//!
//! Configuration is read from `.facsimilerc.json`, `.facsimilerc.toml`,
//! `facsimile.json` or `facsimile.toml`, discovered by walking up from the
//! working directory. Every field is optional; unset fields take the
//! defaults of [`PrinterConfiguration`].
//!
//! ## Example Configuration
//!
//! ```json
//! {
//!   "printer": {
//!     "unsupportedVariants": "error",
//!     "emitRemainingComments": true,
//!     "verifyMonotonic": true
//!   }
//! }
//! ```

mod loader;
mod printer_config;
mod unified_config;

pub use loader::{ConfigLoader, Result};
pub use printer_config::{PrintOptions, PrinterConfiguration, UnsupportedPolicy};
pub use unified_config::UnifiedConfig;

//! Facsimile Core
//!
//! Exact printing engine: reconstructs the source text of a module
//! byte-for-byte from its syntax tree, a span-keyed annotation table and the
//! list of comments. Tokens land at their recorded positions, comments are
//! interleaved by position, and layout is reproduced from recorded braces,
//! semicolons and indentation.

pub mod annotations;
pub mod comments;
pub mod config;
pub mod error;
pub mod exact;
pub mod job;
pub mod position;
pub mod printer;
pub mod result;
pub mod round_trip;
pub mod syntax;

// Re-export commonly used types
pub use annotations::{Anchor, AnnPayload, Annotation, Anns, LayoutAnn, Separator};
pub use comments::{Comment, CommentKind, FloatedComment};
pub use config::{ConfigLoader, PrintOptions, PrinterConfiguration, UnifiedConfig, UnsupportedPolicy};
pub use error::{ErrorKind, FacsimileError, PrintError};
pub use exact::{ExactPrint, exact_print_module};
pub use job::PrintJob;
pub use position::{DeltaPos, Pos, Span};
pub use printer::Printer;
pub use result::{PrintResult, Result};
pub use round_trip::{RoundTripValidator, ValidationResult};
pub use syntax::{Located, Module, NodeKind};

/// Print `module` with the default configuration
pub fn exact_print(
    module: &Located<Module>,
    anns: &Anns,
    comments: &[Comment],
) -> PrintResult<String> {
    exact_print_module(module, anns, comments, PrintOptions::default())
}

/// Print `module` with the options from `config`
pub fn exact_print_with(
    config: &PrinterConfiguration,
    module: &Located<Module>,
    anns: &Anns,
    comments: &[Comment],
) -> PrintResult<String> {
    exact_print_module(module, anns, comments, config.options())
}

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("facsimile=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

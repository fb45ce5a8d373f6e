//! facsimile CLI
//!
//! Command-line interface for the facsimile exact printer

mod commands;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::error;

#[derive(Parser)]
#[command(name = "facsimile")]
#[command(about = "facsimile: reproduce source text exactly from an annotated syntax tree")]
#[command(version = facsimile_core::VERSION)]
#[command(
    long_about = "facsimile prints a parsed module back to the exact text it was parsed from.\n\
A print job is a JSON file holding the located syntax tree, the annotation table\n\
and the comment list produced by a parser.\n\
\n\
Examples:\n  \
facsimile print job.json                 # Print a job to stdout\n  \
facsimile print job.json -o Main.hs      # Print a job to a file\n  \
facsimile check job.json --source Main.hs  # Verify the job reproduces Main.hs\n  \
facsimile config init                    # Initialize configuration file"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(
        short,
        long,
        global = true,
        help = "Path to configuration file (.facsimilerc.json/.facsimilerc.toml)"
    )]
    config: Option<PathBuf>,

    /// Verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a job back to source text
    Print {
        /// Print job (JSON)
        #[arg(help = "Path to the print job JSON file")]
        job: PathBuf,

        /// Output file
        #[arg(short, long, help = "Write the printed text here instead of stdout")]
        output: Option<PathBuf>,
    },

    /// Check that a job reproduces its source exactly
    Check {
        /// Print job (JSON)
        #[arg(help = "Path to the print job JSON file")]
        job: PathBuf,

        /// Source the job was parsed from
        #[arg(short, long, help = "Original source file to compare against")]
        source: PathBuf,
    },

    /// Manage configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version information
    Version {
        /// Show detailed version information
        #[arg(long, help = "Show detailed version and build information")]
        detailed: bool,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Initialize a new configuration file
    Init {
        /// Configuration file format
        #[arg(long, default_value = "json", help = "Configuration file format")]
        format: ConfigFormat,

        /// Overwrite existing configuration file
        #[arg(long, help = "Overwrite existing configuration file")]
        force: bool,
    },

    /// Show the configuration in effect
    Show,

    /// Print the JSON schema of the configuration file
    Schema,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ConfigFormat {
    Json,
    Toml,
}

fn main() {
    let cli = Cli::parse();

    // Initialize colored output
    if !cli.no_color && std::env::var("NO_COLOR").is_err() {
        colored::control::set_override(true);
    } else {
        colored::control::set_override(false);
    }

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "facsimile=error",
        1 => "facsimile=warn",
        2 => "facsimile=info",
        3 => "facsimile=debug",
        _ => "facsimile=trace",
    };
    // SAFETY: single-threaded at this point, before any logging starts
    unsafe {
        std::env::set_var("RUST_LOG", log_level);
    }
    facsimile_core::init_tracing();

    if let Err(e) = run_command(cli) {
        error!("facsimile failed: {:#}", e);
        std::process::exit(1);
    }
}

fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Print { job, output }) => {
            commands::print_command(&job, output.as_deref(), cli.config.as_deref())
        }

        Some(Commands::Check { job, source }) => {
            commands::check_command(&job, &source, cli.config.as_deref())
        }

        Some(Commands::Config { action }) => match action {
            ConfigAction::Init { format, force } => commands::config_init_command(format, force),
            ConfigAction::Show => commands::config_show_command(cli.config.as_deref()),
            ConfigAction::Schema => commands::config_schema_command(),
        },

        Some(Commands::Version { detailed }) => {
            if detailed {
                println!("{} {}", facsimile_core::NAME, facsimile_core::VERSION);
                println!("Build information:");
                println!("  Target: {}", std::env::consts::ARCH);
                println!("  OS: {}", std::env::consts::OS);
            } else {
                println!("{}", facsimile_core::VERSION);
            }
            Ok(())
        }

        None => {
            // No subcommand provided, show help
            let mut cmd = Cli::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}

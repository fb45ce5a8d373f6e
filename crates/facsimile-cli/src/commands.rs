//! Command implementations for the facsimile CLI

use anyhow::{Context, bail};
use colored::Colorize;
use facsimile_core::{
    ConfigLoader, PrintJob, PrintOptions, PrinterConfiguration, RoundTripValidator, UnifiedConfig,
};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::ConfigFormat;

/// Resolve printing options from an explicit config file or discovery
fn load_options(config_path: Option<&Path>) -> anyhow::Result<PrintOptions> {
    let config = ConfigLoader::load(config_path, None)?;
    Ok(config.printer_config().options())
}

/// Print command implementation
pub fn print_command(
    job_path: &Path,
    output: Option<&Path>,
    config_path: Option<&Path>,
) -> anyhow::Result<()> {
    debug!("Printing job: {}", job_path.display());

    let options = load_options(config_path)?;
    let job = PrintJob::from_file(job_path)?;
    let text = facsimile_core::exact_print_module(
        &job.module,
        &job.annotations,
        &job.comments,
        options,
    )
    .with_context(|| format!("Failed to print '{}'", job_path.display()))?;

    match output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            info!("Wrote {} bytes to {}", text.len(), path.display());
        }
        None => print!("{text}"),
    }

    Ok(())
}

/// Check command implementation
///
/// Succeeds only when the job prints back to exactly the given source.
pub fn check_command(
    job_path: &Path,
    source_path: &Path,
    config_path: Option<&Path>,
) -> anyhow::Result<()> {
    debug!(
        "Checking job {} against {}",
        job_path.display(),
        source_path.display()
    );

    let options = load_options(config_path)?;
    let job = PrintJob::from_file(job_path)?;
    let source = std::fs::read_to_string(source_path)
        .with_context(|| format!("Failed to read '{}'", source_path.display()))?;

    let result = RoundTripValidator::with_options(options).validate(&job, &source)?;

    if result.is_valid() && result.idempotent {
        println!(
            "{} {} reproduces {}",
            "✓".green(),
            job_path.display(),
            source_path.display()
        );
        return Ok(());
    }

    for issue in result.issues() {
        println!("{} {issue}", "✗".red());
    }
    if !result.diff.is_empty() {
        println!();
        print_colored_diff(&result.diff);
    }

    bail!(
        "{} does not reproduce {}",
        job_path.display(),
        source_path.display()
    )
}

fn print_colored_diff(diff: &str) {
    for line in diff.lines() {
        let styled = if line.starts_with("+++") || line.starts_with("---") {
            line.bold()
        } else if line.starts_with('+') {
            line.green()
        } else if line.starts_with('-') {
            line.red()
        } else if line.starts_with("@@") {
            line.cyan()
        } else {
            line.normal()
        };
        println!("{styled}");
    }
}

/// Config init command implementation
pub fn config_init_command(format: ConfigFormat, force: bool) -> anyhow::Result<()> {
    debug!("Initializing configuration file with format: {:?}", format);

    let filename = match format {
        ConfigFormat::Json => ".facsimilerc.json",
        ConfigFormat::Toml => ".facsimilerc.toml",
    };

    let config_path = PathBuf::from(filename);

    if config_path.exists() && !force {
        error!(
            "Configuration file '{}' already exists. Use --force to overwrite.",
            filename
        );
        bail!("Configuration file '{filename}' already exists");
    }

    let config = UnifiedConfig {
        printer: Some(PrinterConfiguration::default()),
    };

    let config_content = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(&config)
            .context("Failed to serialize JSON")?,
        ConfigFormat::Toml => {
            toml::to_string_pretty(&config).context("Failed to serialize TOML")?
        }
    };

    std::fs::write(&config_path, config_content)
        .with_context(|| format!("Failed to write '{filename}'"))?;

    println!("✅ Created configuration file: {filename}");
    Ok(())
}

/// Config show command implementation
pub fn config_show_command(config_path: Option<&Path>) -> anyhow::Result<()> {
    debug!("Showing configuration");

    let loaded = ConfigLoader::load(config_path, None)?;
    let config = UnifiedConfig {
        printer: Some(loaded.printer_config()),
    };

    println!("Configuration:");
    println!("==============");
    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}

/// Config schema command implementation
pub fn config_schema_command() -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&UnifiedConfig::json_schema())?
    );
    Ok(())
}

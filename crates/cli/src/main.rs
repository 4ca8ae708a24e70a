//! Shotview CLI - Main Entry Point
//!
//! Reads test lifecycle events as JSON lines and writes the screenshot
//! viewer document once the run ends.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use shotview_report::{EventReader, ReportConfig, ViewerReporter};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod output;

/// Shotview - screenshot gallery reporter for test runs
#[derive(Parser)]
#[command(name = "shotview")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "shotview.toml", env = "SHOTVIEW_CONFIG", global = true)]
    config: PathBuf,

    /// Output format for the run summary
    #[arg(long, default_value = "table", global = true)]
    format: output::OutputFormat,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the viewer document from an event stream
    Report(ReportArgs),

    /// Print the effective configuration
    Config,

    /// Show version information
    Version,
}

#[derive(clap::Args)]
struct ReportArgs {
    /// JSON-lines event stream ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Document path (overrides config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Document title (overrides config)
    #[arg(long)]
    title: Option<String>,

    /// Placeholder image for missing screenshots (overrides config)
    #[arg(long)]
    missing_image: Option<String>,

    /// Also write a JSON run summary here
    #[arg(long)]
    summary: Option<PathBuf>,
}

impl ReportArgs {
    fn apply(&self, config: &mut ReportConfig) {
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(title) = &self.title {
            config.title = title.clone();
        }
        if let Some(image) = &self.missing_image {
            config.missing_image = image.clone();
        }
        if let Some(summary) = &self.summary {
            config.summary = Some(summary.clone());
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging on stderr, stdout carries the summary
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mut config = ReportConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    match cli.command {
        Commands::Report(args) => {
            args.apply(&mut config);
            config.validate()?;

            info!("Shotview v{}", env!("CARGO_PKG_VERSION"));
            let reporter = ViewerReporter::new(config);

            let summary = if args.input == "-" {
                reporter.run(EventReader::new(tokio::io::stdin())).await?
            } else {
                let file = tokio::fs::File::open(&args.input)
                    .await
                    .with_context(|| format!("opening event stream {}", args.input))?;
                reporter.run(EventReader::new(file)).await?
            };

            if summary.stats.missing_screenshots > 0 {
                output::print_warning(&format!(
                    "{} expected screenshot(s) were not generated",
                    summary.stats.missing_screenshots
                ));
            }
            output::print_summary(&summary, cli.format);
            output::print_success(&format!("Report written to {}", summary.document.display()));
        }
        Commands::Config => {
            println!("{}", toml::to_string_pretty(&config)?);
        }
        Commands::Version => {
            println!("Shotview CLI v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

//! PFM-DenseBench Statistics CLI
//!
//! Reads `Data/<method>.json`, computes the leaderboard statistics and writes
//! `data_computed/stats.json`. Runs with defaults when given no arguments.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use colored::Colorize;

use pfm_densebench_cli::output::colors;
use pfm_densebench_cli::{render_report, run, OutputFormat};
use pfm_densebench_common::{init_from_config, StatsConfig};
use pfm_densebench_domain::StatsError;

/// Output format for the console summary
#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum CliOutputFormat {
    /// The report as JSON
    Json,
    /// Table output (default)
    #[default]
    Table,
    /// Fixed-width plain text
    Plain,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "densebench-stats")]
#[command(author, version, about = "PFM-DenseBench leaderboard statistics")]
#[command(long_about = "Computes leaderboard statistics from PFM-DenseBench results.\n\n\
    Reads one <method>.json per adaptation method and writes dataset SOTA, \
    model average ranks and method comparison to a single JSON file.")]
struct Cli {
    /// Configuration file (defaults to densebench.toml if present)
    #[arg(short, long, env = "DENSEBENCH_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding the per-method result files (overrides config)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Directory to write the report to (overrides config)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// TOML catalog replacing the built-in lookup tables (overrides config)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Console summary format
    #[arg(short = 'o', long, value_enum, default_value = "table")]
    format: CliOutputFormat,

    /// Also write a Markdown leaderboard next to the report
    #[arg(long)]
    markdown: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn load_config(&self) -> Result<StatsConfig> {
        let mut config = match &self.config {
            Some(path) => StatsConfig::load_from(path)?,
            None => StatsConfig::load()?,
        };

        if let Some(data_dir) = &self.data_dir {
            config.paths.data_dir = data_dir.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            config.paths.output_dir = output_dir.clone();
        }
        if let Some(catalog) = &self.catalog {
            config.paths.catalog_file = Some(catalog.clone());
        }
        if self.markdown {
            config.output.markdown_summary = true;
        }
        if self.verbose {
            config.telemetry.log_level = "debug".to_string();
        }

        config.validate()?;
        Ok(config)
    }
}

fn execute(cli: &Cli) -> Result<()> {
    let config = cli.load_config()?;
    init_from_config(&config.telemetry)?;

    let format: OutputFormat = cli.format.into();
    tracing::debug!(?config, %format, "Configuration loaded");

    let catalog = config.load_catalog().map_err(StatsError::from)?;
    let outcome = run(&config, &catalog)?;

    println!("{}", render_report(&outcome.report, format)?);

    // Keep stdout pure JSON for `--format json`.
    if format != OutputFormat::Json {
        println!();
        println!(
            "{} {}",
            colors::success("Results saved to"),
            outcome.report_path.display()
        );
        if let Some(summary_path) = &outcome.summary_path {
            println!("{} {}", colors::dim("Summary:"), summary_path.display());
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = execute(&cli) {
        eprintln!("{} {}", colors::error("Error:").bold(), e);
        if let Some(stats_err) = e.downcast_ref::<StatsError>() {
            eprintln!("{} {}", colors::dim("Code:"), stats_err.error_code());
        }
        if cli.verbose {
            eprintln!("\n{}", colors::dim("Details:"));
            eprintln!("{:?}", e);
        }
        std::process::exit(1);
    }
}

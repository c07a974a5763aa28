//! CLI for filling SEO metadata into a local workbook
//!
//! Runs the same pipeline as the upload endpoint and prints the processing
//! stats as JSON.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use seo_meta::{MetaGenerator, ProcessSummary};
use seo_server::{is_xlsx, output_filename, process_workbook, server::build_generator, Config};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "seo-cli")]
#[command(about = "Generate SEO title, description and keywords for a product workbook")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process an .xlsx workbook
    Process {
        /// Input workbook
        input: PathBuf,

        /// Output path (default: <stem>_seo.xlsx next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip LLM enrichment even when OPENAI_API_KEY is set
        #[arg(long)]
        rules_only: bool,
    },
}

#[derive(Serialize)]
struct Report {
    input: String,
    output: String,
    enrichment: bool,
    #[serde(flatten)]
    summary: ProcessSummary,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,seo_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            input,
            output,
            rules_only,
        } => {
            let config = Config::from_env().context("Failed to load configuration")?;
            let generator = if rules_only {
                MetaGenerator::new()
            } else {
                build_generator(&config)
            };

            let report = process_file(&input, output, &generator).await?;
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("Failed to serialize report")?
            );
        }
    }

    Ok(())
}

async fn process_file(
    input: &Path,
    output: Option<PathBuf>,
    generator: &MetaGenerator,
) -> Result<Report> {
    let filename = input
        .file_name()
        .and_then(|name| name.to_str())
        .context("Input path has no file name")?;
    if !is_xlsx(filename) {
        bail!("{} is not an .xlsx file", input.display());
    }

    let output = output.unwrap_or_else(|| input.with_file_name(output_filename(filename)));

    let bytes = tokio::fs::read(input)
        .await
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let processed = process_workbook(&bytes, generator).await?;

    tokio::fs::write(&output, &processed.bytes)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(Report {
        input: input.display().to_string(),
        output: output.display().to_string(),
        enrichment: generator.enrichment_enabled(),
        summary: processed.summary,
    })
}

//! Process command - extract data from a single receipt page.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use fiskal_core::invoice::{HtmlInvoiceParser, InvoiceParser};

use crate::output::{format_invoice, OutputFormat};
use crate::source::{fetch_page, read_page};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Saved receipt verification page (HTML)
    #[arg(required_unless_present = "url", conflicts_with = "url")]
    input: Option<PathBuf>,

    /// Receipt verification URL to download
    #[arg(short, long)]
    url: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Report inconsistencies between items and the receipt total
    #[arg(long)]
    validate: bool,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    let html = match (&args.url, &args.input) {
        (Some(url), _) => fetch_page(url, &config.fetch).await?,
        (None, Some(path)) => {
            info!("Processing file: {}", path.display());
            read_page(path)?
        }
        (None, None) => anyhow::bail!("Either an input file or --url is required"),
    };

    let parser = HtmlInvoiceParser::with_config(&config.extraction)?;
    let result = parser.parse(&html)?;

    if args.validate && !result.warnings.is_empty() {
        eprintln!("{}", style("Validation issues:").yellow());
        for issue in &result.warnings {
            eprintln!("  - {}", issue);
        }
    }

    let output = format_invoice(&result.invoice, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

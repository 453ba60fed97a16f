//! Config command - inspect and edit the extraction settings.
//!
//! Keys are dotted paths into the JSON form of the configuration, e.g.
//! `extraction.timezone` or `fetch.allowed_domains`. Every edit is checked
//! by building a page parser from the result, so a bad selector or zone
//! name never reaches the file.

use std::fs;
use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;
use tracing::debug;

use fiskal_core::FiskalConfig;
use fiskal_core::invoice::HtmlInvoiceParser;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the active configuration
    Show,

    /// Write the default configuration
    Init {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print one value (e.g. "extraction.timezone")
    Get { key: String },

    /// Change one value; JSON is accepted, anything else is stored as a string
    Set { key: String, value: String },

    /// Print the config file location
    Path,
}

/// The config file a subcommand reads and writes.
struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> anyhow::Result<FiskalConfig> {
        if self.exists() {
            Ok(FiskalConfig::from_file(&self.path)?)
        } else {
            Ok(FiskalConfig::default())
        }
    }

    fn store(&self, config: &FiskalConfig) -> anyhow::Result<()> {
        HtmlInvoiceParser::with_config(&config.extraction)
            .map_err(|e| anyhow::anyhow!("Rejected configuration: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        config.save(&self.path)?;
        debug!("Saved configuration to {}", self.path.display());
        Ok(())
    }
}

pub fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let file = ConfigFile {
        path: super::config_file(config_path),
    };

    match args.command {
        ConfigCommand::Show => {
            if !file.exists() {
                eprintln!("{} Using built-in defaults", style("ℹ").blue());
            }
            println!("{}", serde_json::to_string_pretty(&file.load()?)?);
        }
        ConfigCommand::Init { force } => {
            if file.exists() && !force {
                anyhow::bail!(
                    "{} already exists; pass --force to replace it",
                    file.path.display()
                );
            }
            file.store(&FiskalConfig::default())?;
            eprintln!("{} Wrote {}", style("✓").green(), file.path.display());
        }
        ConfigCommand::Get { key } => {
            let json = serde_json::to_value(file.load()?)?;
            let value = lookup(&json, &key)?;
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        ConfigCommand::Set { key, value } => {
            let value = parse_value(&value);
            let mut json = serde_json::to_value(file.load()?)?;
            *lookup_mut(&mut json, &key)? = value.clone();

            let config: FiskalConfig = serde_json::from_value(json)
                .map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e))?;
            file.store(&config)?;
            eprintln!("{} {} = {}", style("✓").green(), key, value);
        }
        ConfigCommand::Path => {
            let status = if file.exists() {
                style("exists").green()
            } else {
                style("not created").yellow()
            };
            println!("{} ({})", file.path.display(), status);
        }
    }

    Ok(())
}

fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn lookup<'a>(json: &'a Value, key: &str) -> anyhow::Result<&'a Value> {
    key.split('.')
        .try_fold(json, |node, part| node.get(part))
        .ok_or_else(|| anyhow::anyhow!("Unknown configuration key: {}", key))
}

/// Existing leaf only; `set` never invents keys the config does not have.
fn lookup_mut<'a>(json: &'a mut Value, key: &str) -> anyhow::Result<&'a mut Value> {
    key.split('.')
        .try_fold(json, |node, part| node.get_mut(part))
        .ok_or_else(|| anyhow::anyhow!("Unknown configuration key: {}", key))
}

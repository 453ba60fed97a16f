//! Items command - parse line items from bare receipt text.

use std::io::Read;
use std::path::PathBuf;

use clap::Args;

use fiskal_core::parse_items;

use crate::output::{format_items, OutputFormat};

/// Arguments for the items command.
#[derive(Args)]
pub struct ItemsArgs {
    /// Receipt text file ("-" reads stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

pub fn run(args: ItemsArgs) -> anyhow::Result<()> {
    let text = if args.input.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        crate::source::read_page(&args.input)?
    };

    let items = parse_items(&text)?;
    println!("{}", format_items(&items, args.format)?);

    Ok(())
}

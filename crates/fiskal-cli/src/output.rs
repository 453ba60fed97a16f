//! Rendering of extracted receipts.

use console::style;

use fiskal_core::models::invoice::{Invoice, LineItem};
use fiskal_core::receipt::format_serbian_amount;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output (one row per item)
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub fn format_invoice(invoice: &Invoice, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(invoice)?),
        OutputFormat::Csv => format_items_csv(&invoice.items, Some(&invoice.invoice_number)),
        OutputFormat::Text => Ok(format_invoice_text(invoice)),
    }
}

pub fn format_items(items: &[LineItem], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
        OutputFormat::Csv => format_items_csv(items, None),
        OutputFormat::Text => Ok(format_items_text(items)),
    }
}

fn format_items_csv(items: &[LineItem], invoice_number: Option<&str>) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header = vec!["name", "vat", "price", "quantity", "total_price"];
    if invoice_number.is_some() {
        header.insert(0, "invoice_number");
    }
    wtr.write_record(&header)?;

    for item in items {
        let mut record = vec![
            item.name.clone(),
            item.vat.to_string(),
            item.price.to_string(),
            item.quantity.to_string(),
            item.total_price.to_string(),
        ];
        if let Some(number) = invoice_number {
            record.insert(0, number.to_string());
        }
        wtr.write_record(&record)?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_items_text(items: &[LineItem]) -> String {
    let mut output = String::new();

    for item in items {
        output.push_str(&format!(
            "  {} ({}%)\n    {} x {} = {}\n",
            item.name,
            item.vat,
            format_serbian_amount(item.price),
            item.quantity,
            format_serbian_amount(item.total_price)
        ));
    }

    output
}

fn format_invoice_text(invoice: &Invoice) -> String {
    let mut output = String::new();

    output.push_str(&format!("Receipt: {}\n", invoice.invoice_number));
    output.push_str(&format!("Date: {}\n", invoice.datetime));
    output.push('\n');

    output.push_str("Seller:\n");
    output.push_str(&format!("  {}\n", invoice.company_name));
    output.push_str(&format!("  PIB: {}\n", invoice.company_tin));
    if let Some(buyer_tin) = &invoice.buyer_tin {
        output.push_str(&format!("Buyer PIB: {}\n", buyer_tin));
    }
    output.push('\n');

    output.push_str(&format!("Items ({}):\n", invoice.items.len()));
    output.push_str(&format_items_text(&invoice.items));
    output.push('\n');

    output.push_str(&format!(
        "{} {} RSD\n",
        style("Total:").bold(),
        format_serbian_amount(invoice.total_amount)
    ));

    output
}

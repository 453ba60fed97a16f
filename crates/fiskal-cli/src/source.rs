//! Loading receipt pages from disk or from the verification service.

use std::path::Path;
use std::time::Duration;

use reqwest::Url;
use tracing::{debug, info};

use fiskal_core::models::config::FetchConfig;

/// Check that a verification URL points at an allowed host.
pub fn validate_url(url: &str, config: &FetchConfig) -> anyhow::Result<Url> {
    let parsed = Url::parse(url).map_err(|e| anyhow::anyhow!("Invalid URL '{}': {}", url, e))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        anyhow::bail!("Unsupported URL scheme: {}", parsed.scheme());
    }

    let host = parsed.host_str().unwrap_or("");
    if !config.is_allowed_host(host) {
        anyhow::bail!("Invalid domain: {} is not an allowed receipt host", host);
    }

    Ok(parsed)
}

/// Download a receipt verification page.
pub async fn fetch_page(url: &str, config: &FetchConfig) -> anyhow::Result<String> {
    let url = validate_url(url, config)?;

    info!("Fetching receipt page from {}", url);

    let client = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;

    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        anyhow::bail!(
            "Request failed with status code {}",
            response.status().as_u16()
        );
    }

    let body = response.text().await?;
    debug!("Fetched {} bytes", body.len());

    Ok(body)
}

/// Read a saved receipt page.
pub fn read_page(path: &Path) -> anyhow::Result<String> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }
    Ok(std::fs::read_to_string(path)?)
}

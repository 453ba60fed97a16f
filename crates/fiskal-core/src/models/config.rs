//! Configuration structures for receipt extraction.

use serde::{Deserialize, Serialize};

use crate::error::FiskalError;

/// Main configuration for the fiskal pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FiskalConfig {
    /// Receipt page extraction configuration.
    pub extraction: ExtractionConfig,

    /// Receipt page download configuration.
    pub fetch: FetchConfig,
}

/// Receipt page extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// CSS selectors of the labeled fields.
    pub selectors: FieldSelectors,

    /// IANA zone the printed receipt time is in.
    pub timezone: String,

    /// `chrono` format of the printed receipt time.
    pub datetime_format: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            selectors: FieldSelectors::default(),
            timezone: "Europe/Belgrade".to_string(),
            datetime_format: "%d.%m.%Y. %H:%M:%S".to_string(),
        }
    }
}

/// CSS selectors for each labeled field on the verification page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSelectors {
    pub company_name: String,
    pub company_tin: String,
    pub buyer_tin: String,
    pub total_amount: String,
    pub datetime: String,
    pub invoice_number: String,
    pub receipt_text: String,
}

impl Default for FieldSelectors {
    fn default() -> Self {
        Self {
            company_name: "span#shopFullNameLabel".to_string(),
            company_tin: "span#tinLabel".to_string(),
            buyer_tin: "span#buyerIdLabel".to_string(),
            total_amount: "span#totalAmountLabel".to_string(),
            datetime: "span#sdcDateTimeLabel".to_string(),
            invoice_number: "span#invoiceNumberLabel".to_string(),
            receipt_text: "div#collapse3 > div > pre".to_string(),
        }
    }
}

/// Receipt page download configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Hosts receipt pages may be downloaded from.
    pub allowed_domains: Vec<String>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// User agent sent with requests.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            allowed_domains: vec!["suf.purs.gov.rs".to_string()],
            timeout_secs: 30,
            user_agent: format!("fiskal/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl FetchConfig {
    /// Whether pages may be downloaded from `host`.
    pub fn is_allowed_host(&self, host: &str) -> bool {
        self.allowed_domains
            .iter()
            .any(|domain| domain.eq_ignore_ascii_case(host))
    }
}

impl FiskalConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, FiskalError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| FiskalError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), FiskalError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| FiskalError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

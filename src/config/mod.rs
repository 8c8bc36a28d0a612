#[cfg(feature = "cli")]
pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_csv_extension, validate_non_empty_string, validate_path, validate_range,
    validate_required_field, validate_url, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Environment variable consulted when --api-key is not given.
pub const API_KEY_ENV: &str = "SERPAPI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "leads-enrich"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Enriches business leads with contact and ordering-platform data")
)]
pub struct CliConfig {
    /// Input CSV; must contain 'Name' and 'City' columns
    #[cfg_attr(feature = "cli", arg(long, default_value = "leads.csv"))]
    pub input: String,

    /// Output CSV; input columns plus the appended contact columns
    #[cfg_attr(feature = "cli", arg(long, default_value = "leads_with_info.csv"))]
    pub output: String,

    #[cfg_attr(
        feature = "cli",
        arg(long, default_value = "https://serpapi.com/search")
    )]
    pub api_endpoint: String,

    /// SerpAPI key; falls back to the SERPAPI_API_KEY environment variable
    #[cfg_attr(feature = "cli", arg(long))]
    pub api_key: Option<String>,

    /// UI language (hl) for the search request
    #[cfg_attr(feature = "cli", arg(long, default_value = "en"))]
    pub language: String,

    /// Region (gl) for the search request
    #[cfg_attr(feature = "cli", arg(long, default_value = "pl"))]
    pub region: String,

    /// Per-request HTTP timeout
    #[cfg_attr(feature = "cli", arg(long, default_value = "30"))]
    pub timeout_secs: u64,

    /// Fixed pause after every lead, in milliseconds
    #[cfg_attr(feature = "cli", arg(long, default_value = "1500"))]
    pub delay_ms: u64,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(
        feature = "cli",
        arg(long, help = "Log system resource usage per phase")
    )]
    pub monitor: bool,
}

impl CliConfig {
    /// Fills the API key from the environment when no flag was given. Called
    /// once at startup; validation rejects a config that still has no key.
    pub fn resolve_api_key_from_env(&mut self) {
        if self.api_key.is_none() {
            self.api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        }
    }
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or("")
    }

    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn language(&self) -> &str {
        &self.language
    }

    fn region(&self) -> &str {
        &self.region
    }

    fn request_timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    fn delay_ms(&self) -> u64 {
        self.delay_ms
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_required_field("api_key", &self.api_key)?;
        validate_path("input", &self.input)?;
        validate_path("output", &self.output)?;
        validate_csv_extension("input", &self.input)?;
        validate_csv_extension("output", &self.output)?;
        validate_non_empty_string("language", &self.language)?;
        validate_non_empty_string("region", &self.region)?;
        validate_range("timeout_secs", self.timeout_secs, 1, 300)?;
        validate_range("delay_ms", self.delay_ms, 0, 600_000)?;
        Ok(())
    }
}

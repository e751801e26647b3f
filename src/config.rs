use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Price estimation settings
    #[serde(default)]
    pub pricing: PricingConfig,
}

/// Settings for the grocery price estimator
#[derive(Debug, Deserialize, Clone)]
pub struct PricingConfig {
    /// Base URL of the price API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Number of ingredients queried concurrently per batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Pause between batches in milliseconds
    #[serde(default = "default_batch_delay_ms")]
    pub batch_delay_ms: u64,
    /// Maximum price samples requested per ingredient
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            batch_size: default_batch_size(),
            batch_delay_ms: default_batch_delay_ms(),
            sample_size: default_sample_size(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://prices.openfoodfacts.org".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_batch_size() -> usize {
    3
}

fn default_batch_delay_ms() -> u64 {
    500
}

fn default_sample_size() -> usize {
    20
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE__PRICING__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Use double underscore for nested: RECIPE__PRICING__BATCH_SIZE
            .add_source(
                Environment::with_prefix("RECIPE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pricing: PricingConfig::default(),
        }
    }
}

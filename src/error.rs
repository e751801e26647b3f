use thiserror::Error;

/// Errors that can occur outside the parse pipeline.
///
/// Parsing itself is total: every input string yields a record. These
/// variants belong to the price-estimation and configuration paths.
#[derive(Error, Debug)]
pub enum ParserError {
    /// Failed to reach the price API
    #[error("Price request failed: {0}")]
    PriceRequest(#[from] reqwest::Error),

    /// Price API returned a non-success status
    #[error("Price API returned status {0}")]
    PriceStatus(u16),

    /// Price API returned a payload we could not interpret
    #[error("Unexpected price payload: {0}")]
    PricePayload(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

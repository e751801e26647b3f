use std::collections::HashSet;
use std::time::Duration;

use futures::future::join_all;
use log::{debug, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::config::PricingConfig;
use crate::error::ParserError;

/// Qualitative confidence label for a price estimate.
///
/// Derived from sample count and name-similarity score; not a calibrated
/// probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
    None,
}

/// Price estimate for a single ingredient line.
#[derive(Debug, Clone, Serialize)]
pub struct PriceEstimate {
    /// The ingredient line as given by the caller
    pub ingredient: String,
    /// Cleaned product name used for the lookup
    pub query: String,
    /// Average of accepted price samples, absent when nothing matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub confidence: Confidence,
    /// Number of samples that passed the similarity filter
    pub sample_count: usize,
}

impl PriceEstimate {
    fn none(ingredient: &str, query: String) -> Self {
        Self {
            ingredient: ingredient.to_string(),
            query,
            price: None,
            confidence: Confidence::None,
            sample_count: 0,
        }
    }
}

#[derive(Deserialize)]
struct PricesResponse {
    #[serde(default)]
    items: Vec<PriceItem>,
}

#[derive(Deserialize)]
struct PriceItem {
    price: Option<f64>,
    product: Option<ProductInfo>,
}

#[derive(Deserialize)]
struct ProductInfo {
    product_name: Option<String>,
}

/// Leading quantities like "2", "1/2", "1.5" with an optional unit.
static QUANTITY_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[\d/.,\s]+(?:g|kg|ml|l|oz|lb|lbs|cup|cups|tbsp|tsp|tablespoons?|teaspoons?|cloves?|cans?|slices?|pieces?)?\b\s*(?:of\s+)?",
    )
    .unwrap()
});

/// Preparation descriptors that carry no product information.
static DESCRIPTORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:fresh|freshly|chopped|diced|minced|sliced|grated|shredded|ground|large|small|medium|ripe|optional|to taste|finely|roughly|cooked|raw|boneless|skinless)\b",
    )
    .unwrap()
});

/// Similarity below which a sample is not counted at all.
const ACCEPT_SIMILARITY: f64 = 0.35;

/// Estimates grocery prices for ingredient lines against a product/price API.
///
/// Requests run in fixed-size concurrent batches with a fixed pause between
/// batches. A failed lookup degrades to a no-estimate result for that item
/// only; it never aborts the batch.
pub struct PriceEstimator {
    client: reqwest::Client,
    config: PricingConfig,
}

impl PriceEstimator {
    pub fn new(config: PricingConfig) -> Result<Self, ParserError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self { client, config })
    }

    /// Estimate prices for all ingredient lines.
    ///
    /// No retry, no backoff, no cancellation: every input line gets exactly
    /// one result in input order.
    pub async fn estimate_all(&self, ingredients: &[String]) -> Vec<PriceEstimate> {
        let mut estimates = Vec::with_capacity(ingredients.len());
        let mut batches = ingredients.chunks(self.config.batch_size.max(1)).peekable();

        while let Some(batch) = batches.next() {
            let futures = batch.iter().map(|line| self.estimate(line));
            estimates.extend(join_all(futures).await);

            if batches.peek().is_some() {
                tokio::time::sleep(Duration::from_millis(self.config.batch_delay_ms)).await;
            }
        }

        estimates
    }

    /// Estimate the price of a single ingredient line.
    pub async fn estimate(&self, ingredient: &str) -> PriceEstimate {
        let query = clean_ingredient_name(ingredient);
        if query.is_empty() {
            return PriceEstimate::none(ingredient, query);
        }

        let samples = match self.fetch_samples(&query).await {
            Ok(samples) => samples,
            Err(e) => {
                warn!("price lookup failed for '{query}': {e}");
                return PriceEstimate::none(ingredient, query);
            }
        };

        let mut accepted = Vec::new();
        let mut best_similarity: f64 = 0.0;
        for (price, name) in samples {
            let score = similarity(&query, &name.to_lowercase());
            if score >= ACCEPT_SIMILARITY {
                best_similarity = best_similarity.max(score);
                accepted.push(price);
            }
        }

        if accepted.is_empty() {
            debug!("no price samples matched '{query}'");
            return PriceEstimate::none(ingredient, query);
        }

        let price = accepted.iter().sum::<f64>() / accepted.len() as f64;
        let confidence = grade_confidence(accepted.len(), best_similarity);

        PriceEstimate {
            ingredient: ingredient.to_string(),
            query,
            price: Some((price * 100.0).round() / 100.0),
            confidence,
            sample_count: accepted.len(),
        }
    }

    async fn fetch_samples(&self, query: &str) -> Result<Vec<(f64, String)>, ParserError> {
        let url = format!("{}/api/v1/prices", self.config.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("product_name", query),
                ("size", &self.config.sample_size.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ParserError::PriceStatus(response.status().as_u16()));
        }

        let payload: PricesResponse = response
            .json()
            .await
            .map_err(|e| ParserError::PricePayload(e.to_string()))?;

        Ok(payload
            .items
            .into_iter()
            .filter_map(|item| {
                let price = item.price?;
                let name = item.product?.product_name?;
                Some((price, name))
            })
            .collect())
    }
}

/// Reduce an ingredient line to a product name usable as a search query.
///
/// Strips a leading quantity+unit, preparation descriptors, and leftover
/// punctuation, and collapses whitespace.
pub fn clean_ingredient_name(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let stripped = QUANTITY_PREFIX.replace(&lowered, "");
    let stripped = DESCRIPTORS.replace_all(&stripped, "");
    stripped
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Token-set Jaccard similarity between two product names.
fn similarity(a: &str, b: &str) -> f64 {
    let set_a: HashSet<&str> = a.split_whitespace().collect();
    let set_b: HashSet<&str> = b.split_whitespace().collect();
    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }
    let intersection = set_a.intersection(&set_b).count() as f64;
    let union = set_a.union(&set_b).count() as f64;
    intersection / union
}

fn grade_confidence(sample_count: usize, best_similarity: f64) -> Confidence {
    if sample_count == 0 {
        Confidence::None
    } else if sample_count < 3 || best_similarity < 0.5 {
        Confidence::Low
    } else if sample_count < 8 || best_similarity < 0.8 {
        Confidence::Medium
    } else {
        Confidence::High
    }
}

use std::env;
use std::fs;
use std::io::Read;

use log::debug;
use recipe_parser::{parse_recipe_record, AppConfig, PriceEstimator};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let with_prices = args.iter().any(|a| a == "--prices");
    let path = args.iter().find(|a| !a.starts_with("--"));

    // Read the response text from a file argument or stdin
    let text = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let record = parse_recipe_record(&text);
    debug!("parsed '{}' with {} tags", record.title, record.tags.len());

    if with_prices {
        let config = AppConfig::load()?;
        let estimator = PriceEstimator::new(config.pricing)?;
        let estimates = estimator.estimate_all(&record.content_json.ingredients).await;
        let output = json!({ "record": record, "prices": estimates });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&record)?);
    }

    Ok(())
}

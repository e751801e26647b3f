use recipe_parser::{Confidence, PriceEstimator, PricingConfig};

fn test_config(base_url: String) -> PricingConfig {
    PricingConfig {
        base_url,
        timeout: 5,
        batch_size: 3,
        batch_delay_ms: 0,
        sample_size: 20,
    }
}

fn price_item(price: f64, name: &str) -> serde_json::Value {
    serde_json::json!({ "price": price, "product": { "product_name": name } })
}

#[tokio::test]
async fn test_estimate_averages_matching_samples() {
    let mut server = mockito::Server::new_async().await;
    let body = serde_json::json!({
        "items": [
            price_item(1.20, "olive oil"),
            price_item(1.40, "olive oil extra virgin"),
            price_item(9.99, "dish soap"),
        ]
    });

    let _m = server
        .mock("GET", "/api/v1/prices")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let estimator = PriceEstimator::new(test_config(server.url())).unwrap();
    let estimate = estimator.estimate("2 tbsp olive oil").await;

    assert_eq!(estimate.query, "olive oil");
    // "dish soap" fails the similarity filter; the two oils average out
    assert_eq!(estimate.price, Some(1.30));
    assert_eq!(estimate.sample_count, 2);
    assert_ne!(estimate.confidence, Confidence::None);
}

#[tokio::test]
async fn test_server_error_degrades_to_no_estimate() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/api/v1/prices")
        .match_query(mockito::Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let estimator = PriceEstimator::new(test_config(server.url())).unwrap();
    let estimate = estimator.estimate("1 cup rice").await;

    assert_eq!(estimate.price, None);
    assert_eq!(estimate.confidence, Confidence::None);
    assert_eq!(estimate.sample_count, 0);
}

#[tokio::test]
async fn test_empty_items_means_none_confidence() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/api/v1/prices")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"items": []}"#)
        .create_async()
        .await;

    let estimator = PriceEstimator::new(test_config(server.url())).unwrap();
    let estimate = estimator.estimate("saffron threads").await;

    assert_eq!(estimate.price, None);
    assert_eq!(estimate.confidence, Confidence::None);
}

#[tokio::test]
async fn test_batch_failure_does_not_abort_other_items() {
    let mut server = mockito::Server::new_async().await;

    // Catch-all failure first; the more recent "rice" mock takes precedence
    // for matching requests.
    let _err = server
        .mock("GET", "/api/v1/prices")
        .match_query(mockito::Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    let _ok = server
        .mock("GET", "/api/v1/prices")
        .match_query(mockito::Matcher::UrlEncoded(
            "product_name".into(),
            "rice".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({ "items": [price_item(2.50, "rice"), price_item(3.50, "rice")] })
                .to_string(),
        )
        .create_async()
        .await;

    let estimator = PriceEstimator::new(test_config(server.url())).unwrap();
    let ingredients = vec!["1 cup rice".to_string(), "2 unknowable things".to_string()];
    let estimates = estimator.estimate_all(&ingredients).await;

    assert_eq!(estimates.len(), 2);
    assert_eq!(estimates[0].ingredient, "1 cup rice");
    assert_eq!(estimates[0].price, Some(3.00));
    assert_eq!(estimates[1].price, None);
    assert_eq!(estimates[1].confidence, Confidence::None);
}

#[tokio::test]
async fn test_results_keep_input_order_across_batches() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/api/v1/prices")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"items": []}"#)
        .expect_at_least(4)
        .create_async()
        .await;

    let estimator = PriceEstimator::new(test_config(server.url())).unwrap();
    let ingredients: Vec<String> = ["flour", "sugar", "butter", "eggs"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let estimates = estimator.estimate_all(&ingredients).await;

    let order: Vec<&str> = estimates.iter().map(|e| e.ingredient.as_str()).collect();
    assert_eq!(order, vec!["flour", "sugar", "butter", "eggs"]);
}

use pretty_assertions::assert_eq;
use shared_types::SearchRequest;
use std::collections::BTreeMap;

use crate::common::MockEngine;
use server::api::generate_query_impl;

#[tokio::test]
async fn preview_returns_the_query_without_running_it() {
    let engine = MockEngine::start().await;

    let mut weights = BTreeMap::new();
    weights.insert("multi_match".to_string(), 2.0);
    let response = generate_query_impl(
        SearchRequest {
            query: "tent".to_string(),
            weights: Some(weights),
            multi_match_fields: Some(vec!["product_name".to_string()]),
            ..Default::default()
        },
        &engine.settings,
    );

    assert!(response.success);
    let doc = response.query.expect("query document");
    assert_eq!(
        doc["query"]["bool"]["should"][0]["multi_match"]["query"],
        "tent"
    );
    // Preview must never hit the engine.
    assert!(engine.captured_searches().await.is_empty());
}

#[tokio::test]
async fn preview_rejects_an_empty_query() {
    let engine = MockEngine::start().await;

    let response = generate_query_impl(
        SearchRequest {
            query: String::new(),
            ..Default::default()
        },
        &engine.settings,
    );

    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("Query cannot be empty"));
    assert_eq!(response.query, None);
}

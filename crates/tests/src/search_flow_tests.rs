use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{SearchRequest, SearchType};
use std::collections::BTreeMap;

use crate::common::{two_product_hits, unreachable_settings, MockEngine};
use server::api::search_products_impl;

fn hybrid_request(query: &str) -> SearchRequest {
    let mut weights = BTreeMap::new();
    weights.insert("description_semantic_elser".to_string(), 3.0);
    weights.insert("multi_match".to_string(), 2.0);
    SearchRequest {
        query: query.to_string(),
        weights: Some(weights),
        multi_match_fields: Some(vec![
            "description".to_string(),
            "product_name".to_string(),
        ]),
        ..Default::default()
    }
}

#[tokio::test]
async fn hybrid_search_maps_products_and_total() {
    let engine = MockEngine::start().await;
    engine.set_search_response(two_product_hits()).await;

    let response = search_products_impl(hybrid_request("tent"), &engine.settings).await;

    assert!(response.success);
    assert_eq!(response.total, 2);
    assert_eq!(response.products.len(), 2);
    assert_eq!(response.search_type, Some(SearchType::Text));
    assert!(response.query.is_some());

    let first = &response.products[0];
    assert_eq!(first.product_name, "Dome Tent");
    assert_eq!(first.final_price, Some(89.99));
    assert!(first.in_stock);

    let second = &response.products[1];
    assert_eq!(second.final_price, None);
    assert_eq!(second.rating, None);
    assert!(!second.in_stock);
}

#[tokio::test]
async fn hybrid_search_targets_the_products_index_with_boosted_clauses() {
    let engine = MockEngine::start().await;
    engine.set_search_response(two_product_hits()).await;

    search_products_impl(hybrid_request("tent"), &engine.settings).await;

    let captured = engine.captured_searches().await;
    assert_eq!(captured.len(), 1);
    let (index, body) = &captured[0];
    assert_eq!(index, "products-test");

    let should = body["query"]["bool"]["should"].as_array().unwrap();
    assert_eq!(should.len(), 2);
    assert_eq!(should[0]["match"]["description_semantic_elser"]["boost"], 3.0);
    assert_eq!(should[1]["multi_match"]["boost"], 2.0);
    assert_eq!(body["query"]["bool"]["minimum_should_match"], 1);
    assert_eq!(body["size"], 20);
}

#[tokio::test]
async fn empty_query_fails_without_touching_the_engine() {
    let engine = MockEngine::start().await;

    let response = search_products_impl(
        SearchRequest {
            query: "   ".to_string(),
            ..Default::default()
        },
        &engine.settings,
    )
    .await;

    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("Query cannot be empty"));
    assert!(engine.captured_searches().await.is_empty());
}

#[tokio::test]
async fn engine_errors_fold_into_a_failed_response() {
    let engine = MockEngine::start().await;
    engine.set_search_status(500).await;

    let response = search_products_impl(hybrid_request("tent"), &engine.settings).await;

    assert!(!response.success);
    assert!(response.products.is_empty());
    let error = response.error.expect("error message");
    assert!(error.contains("500"), "unexpected error: {error}");
}

#[tokio::test]
async fn unreachable_engine_reports_a_transport_error() {
    let response =
        search_products_impl(hybrid_request("tent"), &unreachable_settings()).await;

    assert!(!response.success);
    let error = response.error.expect("error message");
    assert!(
        error.contains("engine unreachable"),
        "unexpected error: {error}"
    );
}

#[tokio::test]
async fn reranking_flag_wraps_the_query_in_a_retriever() {
    let engine = MockEngine::start().await;
    engine.set_search_response(two_product_hits()).await;

    let mut request = hybrid_request("tent");
    request.enable_reranking = Some(true);
    request.rerank_field = Some("product_name".to_string());
    search_products_impl(request, &engine.settings).await;

    let captured = engine.captured_searches().await;
    let (_, body) = &captured[0];
    assert!(body.get("query").is_none());
    let reranker = &body["retriever"]["text_similarity_reranker"];
    assert_eq!(reranker["field"], "product_name");
    assert_eq!(reranker["inference_id"], "rerank-test");
    assert_eq!(reranker["inference_text"], "tent");
}

#[tokio::test]
async fn plain_search_without_weights_uses_the_synonyms_index() {
    let engine = MockEngine::start().await;
    engine
        .set_search_response(json!({
            "hits": { "total": { "value": 1 }, "hits": [] }
        }))
        .await;

    search_products_impl(
        SearchRequest {
            query: "yeti".to_string(),
            ..Default::default()
        },
        &engine.settings,
    )
    .await;

    let captured = engine.captured_searches().await;
    let (index, body) = &captured[0];
    assert_eq!(index, "synonyms-test");
    assert_eq!(body["query"]["match"]["product_name"], "yeti");
}

#[tokio::test]
async fn rules_mode_sends_the_ruleset_retriever() {
    let engine = MockEngine::start().await;
    engine.set_search_response(two_product_hits()).await;

    let response = search_products_impl(
        SearchRequest {
            query: "labubu".to_string(),
            search_type: Some(SearchType::Rules),
            ..Default::default()
        },
        &engine.settings,
    )
    .await;

    assert_eq!(response.search_type, Some(SearchType::Rules));

    let captured = engine.captured_searches().await;
    let (index, body) = &captured[0];
    assert_eq!(index, "products-test");
    assert_eq!(body["retriever"]["rule"]["ruleset_ids"][0], "test-rules");
    assert_eq!(
        body["retriever"]["rule"]["match_criteria"]["product_name"],
        "labubu"
    );
}

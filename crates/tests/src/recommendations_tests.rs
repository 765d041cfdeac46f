use pretty_assertions::assert_eq;

use crate::common::{two_product_hits, MockEngine};
use server::api::get_recommendations_impl;

#[tokio::test]
async fn returns_related_products_for_a_document() {
    let engine = MockEngine::start().await;
    engine.set_search_response(two_product_hits()).await;

    let response = get_recommendations_impl("p1".to_string(), &engine.settings).await;

    assert!(response.success);
    assert_eq!(response.recommendations.len(), 2);
    assert_eq!(response.recommendations[0].product_name, "Dome Tent");
}

#[tokio::test]
async fn lookup_excludes_the_source_document() {
    let engine = MockEngine::start().await;
    engine.set_search_response(two_product_hits()).await;

    get_recommendations_impl("p1".to_string(), &engine.settings).await;

    let captured = engine.captured_searches().await;
    let (index, body) = &captured[0];
    assert_eq!(index, "products-test");
    let must = &body["query"]["bool"]["must"][0]["more_like_this"];
    assert_eq!(must["like"][0]["_id"], "p1");
    assert_eq!(must["like"][0]["_index"], "products-test");
    assert_eq!(body["query"]["bool"]["must_not"][0]["ids"]["values"][0], "p1");
    assert_eq!(body["size"], 4);
}

#[tokio::test]
async fn empty_document_id_is_rejected() {
    let engine = MockEngine::start().await;

    let response = get_recommendations_impl("  ".to_string(), &engine.settings).await;

    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("Product id cannot be empty"));
    assert!(engine.captured_searches().await.is_empty());
}

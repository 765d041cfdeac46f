use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::MockEngine;
use server::api::get_search_refinements_impl;

#[tokio::test]
async fn returns_the_highest_confidence_suggestion_first() {
    let engine = MockEngine::start().await;
    engine
        .set_search_response(json!({
            "hits": {
                "hits": [{
                    "_source": {
                        "search_term": "tnet",
                        "recommendations": {
                            "tent": 0.92,
                            "net": 0.63,
                            "tarp": 0.41
                        }
                    }
                }]
            }
        }))
        .await;

    let response = get_search_refinements_impl("Tnet".to_string(), &engine.settings).await;

    assert!(response.success);
    let data = response.data.expect("refinement data");
    assert_eq!(data.search_term, "Tnet");
    assert_eq!(data.best_recommendation.unwrap().term, "tent");
    assert_eq!(data.all_recommendations.len(), 3);

    let captured = engine.captured_searches().await;
    let (index, body) = &captured[0];
    assert_eq!(index, "refinements-test");
    assert_eq!(body["query"]["term"]["search_term"]["value"], "tnet");
}

#[tokio::test]
async fn unknown_terms_produce_a_named_failure() {
    let engine = MockEngine::start().await;

    let response = get_search_refinements_impl("xyzzy".to_string(), &engine.settings).await;

    assert!(!response.success);
    assert_eq!(
        response.error.as_deref(),
        Some("No refinements found for 'xyzzy'")
    );
}

#[tokio::test]
async fn empty_query_is_rejected_before_the_lookup() {
    let engine = MockEngine::start().await;

    let response = get_search_refinements_impl(String::new(), &engine.settings).await;

    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("Query cannot be empty"));
    assert!(engine.captured_searches().await.is_empty());
}

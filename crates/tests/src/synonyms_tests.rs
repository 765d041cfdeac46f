use pretty_assertions::assert_eq;

use crate::common::MockEngine;
use server::api::{get_synonyms_impl, reset_synonyms_impl, update_synonym_rule_impl};

#[tokio::test]
async fn fetches_the_synonym_set() {
    let engine = MockEngine::start().await;

    let response = get_synonyms_impl(&engine.settings).await;

    assert!(response.success);
    let set = response.data.expect("synonym set");
    assert_eq!(set.count, 1);
    assert_eq!(set.synonyms_set[0].id, "rule-1");
    assert_eq!(set.synonyms_set[0].synonyms, "yeti, sasquatch, bigfoot");
}

#[tokio::test]
async fn update_rejects_empty_synonyms() {
    let engine = MockEngine::start().await;

    let response =
        update_synonym_rule_impl("rule-1".to_string(), "  ".to_string(), &engine.settings).await;

    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("Synonyms cannot be empty"));
    assert_eq!(
        engine.synonym_rules().await[0].1,
        "yeti, sasquatch, bigfoot"
    );
}

#[tokio::test]
async fn update_overwrites_the_rule_in_the_engine() {
    let engine = MockEngine::start().await;

    let response = update_synonym_rule_impl(
        "rule-1".to_string(),
        " abominable snowman, yeti ".to_string(),
        &engine.settings,
    )
    .await;

    assert!(response.success);
    assert_eq!(
        engine.synonym_rules().await[0].1,
        "abominable snowman, yeti"
    );
}

#[tokio::test]
async fn reset_restores_the_first_rule_to_defaults() {
    let engine = MockEngine::start().await;
    update_synonym_rule_impl("rule-1".to_string(), "scrambled".to_string(), &engine.settings)
        .await;

    let response = reset_synonyms_impl(&engine.settings).await;

    assert!(response.success);
    assert_eq!(
        engine.synonym_rules().await[0].1,
        "yeti, sasquatch, bigfoot"
    );
}

#[tokio::test]
async fn reset_fails_when_the_set_is_empty() {
    let engine = MockEngine::start().await;
    engine.clear_synonyms().await;

    let response = reset_synonyms_impl(&engine.settings).await;

    assert!(!response.success);
    assert_eq!(
        response.error.as_deref(),
        Some("Synonym set has no rules to reset")
    );
}

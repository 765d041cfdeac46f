use serde_json::Value;
use shared_types::{ApiError, SynonymSet};

use crate::config::EngineSettings;

fn request(
    client: &reqwest::Client,
    method: reqwest::Method,
    url: &str,
    settings: &EngineSettings,
) -> reqwest::RequestBuilder {
    let builder = client.request(method, url);
    if settings.api_key.is_empty() {
        builder
    } else {
        builder.header("Authorization", format!("ApiKey {}", settings.api_key))
    }
}

async fn engine_body(response: reqwest::Response) -> Result<Value, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(%status, "engine returned an error");
        return Err(ApiError::backend(format!(
            "engine error ({status}): {body}"
        )));
    }
    response
        .json::<Value>()
        .await
        .map_err(|e| ApiError::backend(format!("invalid engine response: {e}")))
}

/// Run a search against `index` and return the raw engine response body.
#[tracing::instrument(skip(settings, query_doc))]
pub async fn search(
    settings: &EngineSettings,
    index: &str,
    query_doc: &Value,
) -> Result<Value, ApiError> {
    let client = reqwest::Client::new();
    let url = format!("{}/{}/_search", settings.url, index);
    let response = request(&client, reqwest::Method::POST, &url, settings)
        .json(query_doc)
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("engine unreachable: {e}")))?;
    engine_body(response).await
}

/// Fetch the contents of the configured synonym set.
#[tracing::instrument(skip(settings))]
pub async fn get_synonym_set(settings: &EngineSettings) -> Result<SynonymSet, ApiError> {
    let client = reqwest::Client::new();
    let url = format!("{}/_synonyms/{}", settings.url, settings.synonym_set);
    let response = request(&client, reqwest::Method::GET, &url, settings)
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("engine unreachable: {e}")))?;
    let body = engine_body(response).await?;
    serde_json::from_value(body)
        .map_err(|e| ApiError::backend(format!("invalid synonym set payload: {e}")))
}

/// Overwrite a single rule inside the configured synonym set.
#[tracing::instrument(skip(settings))]
pub async fn put_synonym_rule(
    settings: &EngineSettings,
    rule_id: &str,
    synonyms: &str,
) -> Result<(), ApiError> {
    let client = reqwest::Client::new();
    let url = format!(
        "{}/_synonyms/{}/{}",
        settings.url, settings.synonym_set, rule_id
    );
    let response = request(&client, reqwest::Method::PUT, &url, settings)
        .json(&serde_json::json!({ "synonyms": synonyms }))
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("engine unreachable: {e}")))?;
    engine_body(response).await?;
    tracing::info!(rule_id, "synonym rule updated");
    Ok(())
}

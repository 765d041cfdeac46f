use dioxus::prelude::*;
use shared_types::RecommendationsResponse;

#[cfg(feature = "server")]
use crate::config::{self, EngineSettings};

#[cfg(feature = "server")]
pub async fn get_recommendations_impl(
    document_id: String,
    settings: &EngineSettings,
) -> RecommendationsResponse {
    if document_id.trim().is_empty() {
        return RecommendationsResponse::failure("Product id cannot be empty");
    }
    let doc = crate::query::related_query(&settings.products_index, &document_id);
    match crate::engine::search(settings, &settings.products_index, &doc).await {
        Ok(body) => {
            let (recommendations, _) = crate::hits::products_from_response(&body);
            RecommendationsResponse {
                success: true,
                recommendations,
                error: None,
            }
        }
        Err(e) => {
            tracing::error!(error = %e, document_id, "recommendations lookup failed");
            RecommendationsResponse::failure(e.to_string())
        }
    }
}

/// Similar products for an open detail view, excluding the product itself.
#[server]
pub async fn get_recommendations(
    document_id: String,
) -> Result<RecommendationsResponse, ServerFnError> {
    let settings = config::settings();
    Ok(get_recommendations_impl(document_id, settings).await)
}

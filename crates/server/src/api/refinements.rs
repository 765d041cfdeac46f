use dioxus::prelude::*;
use shared_types::RefinementsResponse;

#[cfg(feature = "server")]
use crate::config::{self, EngineSettings};

#[cfg(feature = "server")]
pub async fn get_search_refinements_impl(
    query: String,
    settings: &EngineSettings,
) -> RefinementsResponse {
    if query.trim().is_empty() {
        return RefinementsResponse {
            success: false,
            data: None,
            error: Some("Query cannot be empty".to_string()),
        };
    }
    let doc = crate::query::refinements_query(query.trim());
    match crate::engine::search(settings, &settings.refinements_index, &doc).await {
        Ok(body) => match crate::hits::refinement_from_response(&body, query.trim()) {
            Some(data) => RefinementsResponse {
                success: true,
                data: Some(data),
                error: None,
            },
            None => RefinementsResponse {
                success: false,
                data: None,
                error: Some(format!("No refinements found for '{}'", query.trim())),
            },
        },
        Err(e) => {
            tracing::error!(error = %e, "refinements lookup failed");
            RefinementsResponse {
                success: false,
                data: None,
                error: Some(e.to_string()),
            }
        }
    }
}

/// Suggested alternative terms for a query that returned nothing.
#[server]
pub async fn get_search_refinements(query: String) -> Result<RefinementsResponse, ServerFnError> {
    let settings = config::settings();
    Ok(get_search_refinements_impl(query, settings).await)
}

use dioxus::prelude::*;
use shared_types::{QueryPreviewResponse, SearchRequest, SearchResponse, SearchType};

#[cfg(feature = "server")]
use crate::config::{self, EngineSettings};

/// Build the engine query document for a request, along with the mode and
/// index it should run against.
#[cfg(feature = "server")]
pub fn plan_search(
    request: &SearchRequest,
    settings: &EngineSettings,
) -> (serde_json::Value, SearchType, String) {
    let search_type = request.search_type.unwrap_or_default();

    if search_type == SearchType::Rules {
        let doc = crate::query::rules_query(&request.query, &settings.ruleset_id);
        return (doc, SearchType::Rules, settings.products_index.clone());
    }

    match &request.weights {
        Some(weights) => {
            let fields = request
                .multi_match_fields
                .clone()
                .unwrap_or_else(|| {
                    shared_types::DEFAULT_MULTI_MATCH_FIELDS
                        .iter()
                        .map(|f| f.to_string())
                        .collect()
                });
            let mut doc = crate::query::hybrid_query(&request.query, weights, &fields);
            if request.enable_reranking == Some(true) {
                let field = request.rerank_field.as_deref().unwrap_or("description");
                doc = crate::query::with_reranking(
                    doc,
                    field,
                    &settings.rerank_inference_id,
                    &request.query,
                );
            }
            (doc, SearchType::Text, settings.products_index.clone())
        }
        // Profiles without weight controls search the synonym-enabled index.
        None => {
            let doc = crate::query::text_query(&request.query);
            (doc, SearchType::Text, settings.synonyms_index.clone())
        }
    }
}

#[cfg(feature = "server")]
pub async fn search_products_impl(
    request: SearchRequest,
    settings: &EngineSettings,
) -> SearchResponse {
    if request.query.trim().is_empty() {
        return SearchResponse::failure("Query cannot be empty");
    }

    let (doc, search_type, index) = plan_search(&request, settings);
    tracing::info!(query = %request.query, %index, "running search");

    match crate::engine::search(settings, &index, &doc).await {
        Ok(body) => {
            let (products, total) = crate::hits::products_from_response(&body);
            SearchResponse {
                success: true,
                query: Some(doc),
                products,
                total,
                search_type: Some(search_type),
                error: None,
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "search failed");
            SearchResponse::failure(e.to_string())
        }
    }
}

#[cfg(feature = "server")]
pub fn generate_query_impl(
    request: SearchRequest,
    settings: &EngineSettings,
) -> QueryPreviewResponse {
    if request.query.trim().is_empty() {
        return QueryPreviewResponse::failure("Query cannot be empty");
    }
    let (doc, _, _) = plan_search(&request, settings);
    QueryPreviewResponse {
        success: true,
        query: Some(doc),
        error: None,
    }
}

/// Execute a search and return mapped products plus the executed query.
#[server]
pub async fn search_products(request: SearchRequest) -> Result<SearchResponse, ServerFnError> {
    let settings = config::settings();
    Ok(search_products_impl(request, settings).await)
}

/// Return the query document the current configuration would execute,
/// without running it. Backs the live query preview.
#[server]
pub async fn generate_query(request: SearchRequest) -> Result<QueryPreviewResponse, ServerFnError> {
    let settings = config::settings();
    Ok(generate_query_impl(request, settings))
}

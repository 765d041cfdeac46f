use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::product::Product;

/// Which kind of engine query a search runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    /// Plain full-text match.
    #[default]
    Text,
    /// Query-rules retriever (pinned/boosted results managed in the engine).
    Rules,
}

impl SearchType {
    /// Badge text shown next to results produced in this mode.
    pub fn label(&self) -> &'static str {
        match self {
            SearchType::Text => "Text Search",
            SearchType::Rules => "Query Rules",
        }
    }
}

/// Body of a search or query-preview request.
///
/// Optional fields are omitted on the wire; the backend adapter falls back
/// to its defaults, mirroring the profiles that do not expose them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchRequest {
    pub query: String,
    /// Effective weight map: only entries whose enable flag is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<BTreeMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_match_fields: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_reranking: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rerank_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_type: Option<SearchType>,
}

/// Full search response: the executed query document plus result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    /// The engine query that was executed (shown by "view query").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Value>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_type: Option<SearchType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            query: None,
            products: Vec::new(),
            total: 0,
            search_type: None,
            error: Some(error.into()),
        }
    }
}

/// Response of the query-preview ("explain") endpoint: the query the engine
/// would run for the current configuration, without executing a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryPreviewResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryPreviewResponse {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            query: None,
            error: Some(error.into()),
        }
    }
}

/// Related products for an open detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub success: bool,
    #[serde(default)]
    pub recommendations: Vec<Product>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecommendationsResponse {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            recommendations: Vec::new(),
            error: Some(error.into()),
        }
    }
}

/// Deep link into the engine's management console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleUrlResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A single ranked query-refinement suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refinement {
    pub term: String,
    pub confidence: f64,
}

/// Refinement lookup payload for a search term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefinementData {
    pub search_term: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_recommendation: Option<Refinement>,
    #[serde(default)]
    pub all_recommendations: BTreeMap<String, f64>,
}

/// Response of the zero-results refinement endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefinementsResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<RefinementData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

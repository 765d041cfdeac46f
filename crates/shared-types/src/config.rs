use std::collections::BTreeMap;

/// Semantic sub-fields the hybrid query can boost, in display order.
pub const SEMANTIC_FIELDS: &[&str] = &[
    "description_semantic_elser",
    "description_semantic_google",
    "description_semantic_e5",
    "product_name_semantic_elser",
    "product_name_semantic_google",
    "product_name_semantic_e5",
];

/// Keyword fields with their own weight sliders (matched as plain clauses).
pub const KEYWORD_FIELDS: &[&str] = &["model_number", "product_id"];

/// Weight key controlling the combined multi-field text clause.
pub const MULTI_MATCH_WEIGHT_KEY: &str = "multi_match";

/// Text fields selectable for the combined multi-field match.
pub const TEXT_FIELDS: &[&str] = &[
    "product_name",
    "description",
    "offers",
    "related_products",
    "top_reviews",
];

/// Fields the reranking stage can be applied to.
pub const RERANK_FIELDS: &[&str] = &["description", "product_name"];

/// Multi-match fields enabled when a session starts.
pub const DEFAULT_MULTI_MATCH_FIELDS: &[&str] = &["description", "product_name"];

/// Starting boost for every tunable weight.
pub const DEFAULT_WEIGHT: f64 = 2.0;

/// All tunable weight keys in display order.
pub fn weight_keys() -> Vec<String> {
    SEMANTIC_FIELDS
        .iter()
        .chain(std::iter::once(&MULTI_MATCH_WEIGHT_KEY))
        .chain(KEYWORD_FIELDS.iter())
        .map(|k| k.to_string())
        .collect()
}

/// The weight map a fresh session starts from.
pub fn default_weights() -> BTreeMap<String, f64> {
    weight_keys()
        .into_iter()
        .map(|k| (k, DEFAULT_WEIGHT))
        .collect()
}

use std::collections::BTreeMap;

use shared_types::{default_weights, Product, SearchRequest, SearchType, DEFAULT_MULTI_MATCH_FIELDS};

/// Which controls a search page exposes. One controller component renders
/// every page; the profile decides which panels appear and which request
/// fields are sent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchProfile {
    pub title: &'static str,
    /// Weight inputs with per-field enable switches and multi-match field picks.
    pub weight_controls: bool,
    /// Semantic reranking toggle and rerank-field picker.
    pub reranking: bool,
    /// Text vs. query-rules mode picker.
    pub search_type_picker: bool,
    /// Live query preview, refreshed on a trailing debounce.
    pub query_preview: bool,
    /// Copy-to-clipboard button on the preview.
    pub copy_query: bool,
    /// Deep links into the engine's management console.
    pub console_links: bool,
    /// Synonym set editor.
    pub synonyms_panel: bool,
    /// Alternative-term suggestions when a search comes back empty.
    pub refinements: bool,
    /// Similar products inside the detail view.
    pub recommendations: bool,
}

/// Full tuning console: weights, reranking, preview, recommendations.
pub const HYBRID_PROFILE: SearchProfile = SearchProfile {
    title: "Hybrid Search",
    weight_controls: true,
    reranking: true,
    search_type_picker: false,
    query_preview: true,
    copy_query: false,
    console_links: false,
    synonyms_panel: false,
    refinements: false,
    recommendations: true,
};

/// Query-rules demo: mode picker plus console links.
pub const RULES_PROFILE: SearchProfile = SearchProfile {
    title: "Query Rules",
    weight_controls: false,
    reranking: false,
    search_type_picker: true,
    query_preview: true,
    copy_query: false,
    console_links: true,
    synonyms_panel: false,
    refinements: false,
    recommendations: false,
};

/// Plain match demo: synonym management and zero-result refinements.
pub const SIMPLE_PROFILE: SearchProfile = SearchProfile {
    title: "Simple Search",
    weight_controls: false,
    reranking: false,
    search_type_picker: false,
    query_preview: true,
    copy_query: true,
    console_links: false,
    synonyms_panel: true,
    refinements: true,
    recommendations: false,
};

/// One tunable weight: its boost value and whether it participates at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightSetting {
    pub value: f64,
    pub enabled: bool,
}

/// Everything the user has configured on a search page.
///
/// Pure state: parsing, toggling, and request building have no UI or
/// network dependencies.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSession {
    pub query: String,
    pub weights: BTreeMap<String, WeightSetting>,
    pub multi_match_fields: Vec<String>,
    pub enable_reranking: bool,
    pub rerank_field: String,
    pub search_type: SearchType,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            weights: default_weights()
                .into_iter()
                .map(|(k, value)| (k, WeightSetting { value, enabled: true }))
                .collect(),
            multi_match_fields: DEFAULT_MULTI_MATCH_FIELDS
                .iter()
                .map(|f| f.to_string())
                .collect(),
            enable_reranking: false,
            rerank_field: "description".to_string(),
            search_type: SearchType::Text,
        }
    }

    /// Update a weight from raw input text. Unparseable input becomes 0,
    /// matching a cleared field.
    pub fn set_weight(&mut self, key: &str, raw: &str) {
        if let Some(setting) = self.weights.get_mut(key) {
            setting.value = raw.trim().parse().unwrap_or(0.0);
        }
    }

    /// Flip a weight's enable switch without touching its value, so
    /// re-enabling restores the previous boost.
    pub fn set_enabled(&mut self, key: &str, enabled: bool) {
        if let Some(setting) = self.weights.get_mut(key) {
            setting.enabled = enabled;
        }
    }

    /// Zero every weight. Enable flags keep their state so the switches do
    /// not jump around under the user.
    pub fn reset_weights(&mut self) {
        for setting in self.weights.values_mut() {
            setting.value = 0.0;
        }
    }

    pub fn toggle_multi_match_field(&mut self, field: &str, selected: bool) {
        if selected {
            if !self.multi_match_fields.iter().any(|f| f == field) {
                self.multi_match_fields.push(field.to_string());
            }
        } else {
            self.multi_match_fields.retain(|f| f != field);
        }
    }

    /// The weight map actually sent with a request: enabled entries only.
    pub fn effective_weights(&self) -> BTreeMap<String, f64> {
        self.weights
            .iter()
            .filter(|(_, s)| s.enabled)
            .map(|(k, s)| (k.clone(), s.value))
            .collect()
    }

    /// Build the request body for a page profile. Fields behind controls the
    /// profile does not expose are omitted so the backend uses its defaults.
    pub fn request(&self, profile: &SearchProfile) -> SearchRequest {
        SearchRequest {
            query: self.query.trim().to_string(),
            weights: profile.weight_controls.then(|| self.effective_weights()),
            multi_match_fields: profile
                .weight_controls
                .then(|| self.multi_match_fields.clone()),
            enable_reranking: profile.reranking.then_some(self.enable_reranking),
            rerank_field: (profile.reranking && self.enable_reranking)
                .then(|| self.rerank_field.clone()),
            search_type: profile.search_type_picker.then_some(self.search_type),
        }
    }
}

/// Monotonic request tags for last-submitted-wins response handling.
///
/// Responses may arrive out of order; only the one tagged with the most
/// recently issued token may update the view.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RequestSequence {
    issued: u64,
}

impl RequestSequence {
    /// Tag a new request. Implicitly invalidates every earlier token.
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Whether a response carrying `token` belongs to the latest request.
    pub fn is_current(&self, token: u64) -> bool {
        token == self.issued
    }
}

/// Whether a related-items reply fetched for `document_id` still belongs to
/// the product open in the detail view.
pub fn reply_matches_selection(selected: Option<&Product>, document_id: &str) -> bool {
    selected.map(|p| p.id.as_str()) == Some(document_id)
}

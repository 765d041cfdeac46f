use std::sync::OnceLock;

static SETTINGS: OnceLock<EngineSettings> = OnceLock::new();

/// Connection and naming settings for the search engine, read from the
/// environment once at startup.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Base URL of the engine, without a trailing slash.
    pub url: String,
    /// API key sent as `Authorization: ApiKey <key>`. Empty disables the header.
    pub api_key: String,
    /// Index serving the hybrid and rules profiles.
    pub products_index: String,
    /// Synonym-enabled index serving the plain-text profile.
    pub synonyms_index: String,
    /// Index holding query-refinement suggestions.
    pub refinements_index: String,
    /// Name of the engine-managed synonym set.
    pub synonym_set: String,
    /// Ruleset applied by the query-rules profile.
    pub ruleset_id: String,
    /// Synonyms written back when a rule is reset to its shipped value.
    pub default_synonyms: String,
    /// Inference endpoint used by the semantic reranking stage.
    pub rerank_inference_id: String,
    /// Base URL of the engine's management console, when deployed alongside one.
    pub console_url: Option<String>,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

impl EngineSettings {
    fn from_env() -> Self {
        Self {
            url: env_or("ENGINE_URL", "http://localhost:9200")
                .trim_end_matches('/')
                .to_string(),
            api_key: env_or("ENGINE_API_KEY", ""),
            products_index: env_or("PRODUCTS_INDEX", "products"),
            synonyms_index: env_or("SYNONYMS_INDEX", "products-synonyms"),
            refinements_index: env_or("REFINEMENTS_INDEX", "search-refinements"),
            synonym_set: env_or("SYNONYM_SET", "products-synonyms-set"),
            ruleset_id: env_or("QUERY_RULESET_ID", "labubu"),
            default_synonyms: env_or("DEFAULT_SYNONYMS", "yeti, sasquatch, bigfoot"),
            rerank_inference_id: env_or("RERANK_INFERENCE_ID", ".rerank-v1-elasticsearch"),
            console_url: std::env::var("CONSOLE_URL").ok().filter(|u| !u.is_empty()),
        }
    }
}

/// Load `.env` (when present) and cache the engine settings. Safe to call
/// multiple times; only the first call reads the environment.
pub fn load() -> &'static EngineSettings {
    SETTINGS.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let settings = EngineSettings::from_env();
        tracing::info!(
            url = %settings.url,
            products_index = %settings.products_index,
            "engine settings loaded"
        );
        settings
    })
}

/// The cached settings, loading them on first use.
pub fn settings() -> &'static EngineSettings {
    load()
}

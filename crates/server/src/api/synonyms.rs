use dioxus::prelude::*;
use shared_types::{AckResponse, SynonymSetResponse};

#[cfg(feature = "server")]
use crate::config::{self, EngineSettings};

#[cfg(feature = "server")]
pub async fn get_synonyms_impl(settings: &EngineSettings) -> SynonymSetResponse {
    match crate::engine::get_synonym_set(settings).await {
        Ok(set) => SynonymSetResponse {
            success: true,
            data: Some(set),
            error: None,
        },
        Err(e) => {
            tracing::error!(error = %e, "synonym set fetch failed");
            SynonymSetResponse {
                success: false,
                data: None,
                error: Some(e.to_string()),
            }
        }
    }
}

#[cfg(feature = "server")]
pub async fn update_synonym_rule_impl(
    rule_id: String,
    synonyms: String,
    settings: &EngineSettings,
) -> AckResponse {
    if synonyms.trim().is_empty() {
        return AckResponse::failure("Synonyms cannot be empty");
    }
    match crate::engine::put_synonym_rule(settings, &rule_id, synonyms.trim()).await {
        Ok(()) => AckResponse::ok(),
        Err(e) => {
            tracing::error!(error = %e, rule_id, "synonym rule update failed");
            AckResponse::failure(e.to_string())
        }
    }
}

/// Restore the first rule of the synonym set to its shipped value.
///
/// Two steps against the engine: fetch the set to learn the rule id, then
/// overwrite that rule.
#[cfg(feature = "server")]
pub async fn reset_synonyms_impl(settings: &EngineSettings) -> AckResponse {
    let set = match crate::engine::get_synonym_set(settings).await {
        Ok(set) => set,
        Err(e) => return AckResponse::failure(e.to_string()),
    };
    let Some(rule) = set.synonyms_set.first() else {
        return AckResponse::failure("Synonym set has no rules to reset");
    };
    update_synonym_rule_impl(rule.id.clone(), settings.default_synonyms.clone(), settings).await
}

/// Fetch the contents of the managed synonym set.
#[server]
pub async fn get_synonyms() -> Result<SynonymSetResponse, ServerFnError> {
    let settings = config::settings();
    Ok(get_synonyms_impl(settings).await)
}

/// Overwrite one synonym rule with a comma-separated list.
#[server]
pub async fn update_synonym_rule(
    rule_id: String,
    synonyms: String,
) -> Result<AckResponse, ServerFnError> {
    let settings = config::settings();
    Ok(update_synonym_rule_impl(rule_id, synonyms, settings).await)
}

/// Reset the synonym set's first rule to its default value.
#[server]
pub async fn reset_synonyms() -> Result<AckResponse, ServerFnError> {
    let settings = config::settings();
    Ok(reset_synonyms_impl(settings).await)
}

use serde::{Deserialize, Serialize};

/// One rule inside an engine-managed synonym set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynonymRule {
    pub id: String,
    #[serde(default)]
    pub synonyms: String,
}

/// Contents of a synonym set as returned by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynonymSet {
    #[serde(default)]
    pub synonyms_set: Vec<SynonymRule>,
    #[serde(default)]
    pub count: i64,
}

/// Response of the synonym-set fetch endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynonymSetResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SynonymSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body of a synonym-rule overwrite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynonymRuleUpdate {
    pub synonyms: String,
}

/// Generic acknowledgement for write operations without a payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AckResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AckResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::sync::Mutex;

use server::config::EngineSettings;

/// In-memory stand-in for the search engine, served over real HTTP on an
/// ephemeral localhost port. Tests configure the canned response and can
/// inspect every query document the adapter sent.
pub struct MockEngine {
    pub settings: EngineSettings,
    state: Arc<EngineState>,
}

struct EngineState {
    search_response: Mutex<Value>,
    search_status: Mutex<u16>,
    captured: Mutex<Vec<(String, Value)>>,
    synonyms: Mutex<Vec<(String, String)>>,
}

impl MockEngine {
    pub async fn start() -> Self {
        let state = Arc::new(EngineState {
            search_response: Mutex::new(empty_hits()),
            search_status: Mutex::new(200),
            captured: Mutex::new(Vec::new()),
            synonyms: Mutex::new(vec![(
                "rule-1".to_string(),
                "yeti, sasquatch, bigfoot".to_string(),
            )]),
        });

        let router = Router::new()
            .route("/{index}/_search", post(handle_search))
            .route("/_synonyms/{set}", get(handle_get_synonyms))
            .route("/_synonyms/{set}/{rule}", put(handle_put_synonym))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock engine");
        let addr = listener.local_addr().expect("mock engine addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve mock engine");
        });

        Self {
            settings: settings_for(addr),
            state,
        }
    }

    pub async fn set_search_response(&self, body: Value) {
        *self.state.search_response.lock().await = body;
    }

    pub async fn set_search_status(&self, status: u16) {
        *self.state.search_status.lock().await = status;
    }

    /// Every `(index, query document)` pair the adapter has sent so far.
    pub async fn captured_searches(&self) -> Vec<(String, Value)> {
        self.state.captured.lock().await.clone()
    }

    pub async fn synonym_rules(&self) -> Vec<(String, String)> {
        self.state.synonyms.lock().await.clone()
    }

    pub async fn clear_synonyms(&self) {
        self.state.synonyms.lock().await.clear();
    }
}

/// Settings pointing at an address nothing listens on, for transport
/// failure tests.
pub fn unreachable_settings() -> EngineSettings {
    settings_for("127.0.0.1:9".parse().expect("addr"))
}

fn settings_for(addr: SocketAddr) -> EngineSettings {
    EngineSettings {
        url: format!("http://{addr}"),
        api_key: String::new(),
        products_index: "products-test".to_string(),
        synonyms_index: "synonyms-test".to_string(),
        refinements_index: "refinements-test".to_string(),
        synonym_set: "test-set".to_string(),
        ruleset_id: "test-rules".to_string(),
        default_synonyms: "yeti, sasquatch, bigfoot".to_string(),
        rerank_inference_id: "rerank-test".to_string(),
        console_url: Some("http://console.test".to_string()),
    }
}

async fn handle_search(
    State(state): State<Arc<EngineState>>,
    Path(index): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.captured.lock().await.push((index, body));
    let status = *state.search_status.lock().await;
    if status != 200 {
        return (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(json!({ "error": { "reason": "mock engine failure" } })),
        );
    }
    (
        StatusCode::OK,
        Json(state.search_response.lock().await.clone()),
    )
}

async fn handle_get_synonyms(
    State(state): State<Arc<EngineState>>,
    Path(_set): Path<String>,
) -> Json<Value> {
    let rules = state.synonyms.lock().await;
    let set: Vec<Value> = rules
        .iter()
        .map(|(id, synonyms)| json!({ "id": id, "synonyms": synonyms }))
        .collect();
    Json(json!({ "synonyms_set": set, "count": set.len() }))
}

async fn handle_put_synonym(
    State(state): State<Arc<EngineState>>,
    Path((_set, rule)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let synonyms = body["synonyms"].as_str().unwrap_or_default().to_string();
    let mut rules = state.synonyms.lock().await;
    match rules.iter_mut().find(|(id, _)| *id == rule) {
        Some(entry) => entry.1 = synonyms,
        None => rules.push((rule, synonyms)),
    }
    Json(json!({ "result": "updated", "reload_analyzers_details": {} }))
}

fn empty_hits() -> Value {
    json!({ "hits": { "total": { "value": 0, "relation": "eq" }, "hits": [] } })
}

/// Canned two-product engine response used across the search tests.
pub fn two_product_hits() -> Value {
    json!({
        "hits": {
            "total": { "value": 2, "relation": "eq" },
            "hits": [
                {
                    "_id": "p1",
                    "_score": 6.42,
                    "_source": {
                        "product_id": "B0TENT",
                        "product_name": "Dome Tent",
                        "description": "Two-person dome tent with rainfly",
                        "main_image": "https://img.example/tent.jpg",
                        "final_price": 89.99,
                        "currency": "USD",
                        "rating": 4.6,
                        "reviews_count": 812,
                        "is_available": true,
                        "model_number": "DT-200"
                    },
                    "highlight": {
                        "product_name": ["<em>Dome</em> Tent"]
                    }
                },
                {
                    "_id": "p2",
                    "_score": 3.11,
                    "_source": {
                        "product_id": "B0TARP",
                        "product_name": "Camping Tarp",
                        "description": "Lightweight tarp",
                        "final_price": 0,
                        "rating": 0,
                        "is_available": false
                    }
                }
            ]
        }
    })
}

use serde_json::Value;
use std::collections::BTreeMap;

use shared_types::{Product, Refinement, RefinementData};

fn non_empty_string(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn positive_number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|n| *n > 0.0)
}

fn highlight_map(hit: &Value) -> Option<BTreeMap<String, Vec<String>>> {
    let fields = hit.get("highlight")?.as_object()?;
    let mut map = BTreeMap::new();
    for (field, fragments) in fields {
        let fragments: Vec<String> = fragments
            .as_array()
            .map(|list| {
                list.iter()
                    .filter_map(|f| f.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();
        if !fragments.is_empty() {
            map.insert(field.clone(), fragments);
        }
    }
    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// Map one engine hit to a product record.
///
/// Zero prices and zero ratings are treated the same as missing ones so the
/// cards can hide those rows entirely.
pub fn product_from_hit(hit: &Value) -> Product {
    let source = hit.get("_source").cloned().unwrap_or(Value::Null);
    Product {
        id: non_empty_string(&hit["_id"]).unwrap_or_default(),
        product_id: non_empty_string(&source["product_id"]).unwrap_or_default(),
        product_name: non_empty_string(&source["product_name"]).unwrap_or_default(),
        description: non_empty_string(&source["description"]).unwrap_or_default(),
        main_image: non_empty_string(&source["main_image"]),
        final_price: positive_number(&source["final_price"]),
        currency: non_empty_string(&source["currency"]).unwrap_or_else(|| "USD".to_string()),
        rating: positive_number(&source["rating"]),
        reviews_count: source["reviews_count"].as_i64().unwrap_or(0),
        in_stock: source["is_available"]
            .as_bool()
            .or_else(|| source["in_stock"].as_bool())
            .unwrap_or(false),
        model_number: non_empty_string(&source["model_number"]),
        score: hit.get("_score").and_then(Value::as_f64),
        highlights: highlight_map(hit),
    }
}

/// Extract the product list and total hit count from an engine response body.
pub fn products_from_response(body: &Value) -> (Vec<Product>, i64) {
    let hits = body["hits"]["hits"]
        .as_array()
        .map(|list| list.iter().map(product_from_hit).collect())
        .unwrap_or_default();
    let total = body["hits"]["total"]["value"]
        .as_i64()
        .or_else(|| body["hits"]["total"].as_i64())
        .unwrap_or(0);
    (hits, total)
}

/// Build the refinement payload from the first hit of a term lookup.
///
/// The best suggestion is the entry with the highest confidence; ties break
/// on first encounter in key order.
pub fn refinement_from_response(body: &Value, search_term: &str) -> Option<RefinementData> {
    let hit = body["hits"]["hits"].as_array()?.first()?;
    let source = hit.get("_source")?;
    let recommendations = source.get("recommendations")?.as_object()?;

    let mut all = BTreeMap::new();
    for (term, confidence) in recommendations {
        if let Some(confidence) = confidence.as_f64() {
            all.insert(term.clone(), confidence);
        }
    }

    let best = all
        .iter()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(term, confidence)| Refinement {
            term: term.clone(),
            confidence: *confidence,
        });

    Some(RefinementData {
        search_term: search_term.to_string(),
        best_recommendation: best,
        all_recommendations: all,
    })
}

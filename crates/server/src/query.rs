use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

use shared_types::{KEYWORD_FIELDS, MULTI_MATCH_WEIGHT_KEY, SEMANTIC_FIELDS};

/// Number of hits requested per search.
pub const RESULT_SIZE: u64 = 20;

/// Number of related items requested for a detail view.
pub const RELATED_SIZE: u64 = 4;

/// Highlight block shared by the full-text query shapes.
fn highlight_fields(fields: &[&str]) -> Value {
    let mut map = Map::new();
    for field in fields {
        map.insert(
            field.to_string(),
            json!({ "number_of_fragments": 1, "order": "score" }),
        );
    }
    json!({ "fields": Value::Object(map) })
}

/// Plain single-field match on `product_name`, with highlighting.
pub fn text_query(query_text: &str) -> Value {
    json!({
        "query": { "match": { "product_name": query_text } },
        "highlight": { "fields": { "product_name": {} } },
        "size": RESULT_SIZE,
    })
}

/// Query-rules retriever: the engine applies the named ruleset before
/// falling back to a standard match.
pub fn rules_query(query_text: &str, ruleset_id: &str) -> Value {
    json!({
        "retriever": {
            "rule": {
                "match_criteria": { "product_name": query_text },
                "ruleset_ids": [ruleset_id],
                "retriever": {
                    "standard": {
                        "query": { "match": { "product_name": query_text } }
                    }
                }
            }
        },
        "size": RESULT_SIZE,
    })
}

/// Hybrid bool/should query combining boosted semantic clauses with an
/// optional multi-field text clause.
///
/// Only weights that are present and strictly positive contribute a clause;
/// the caller has already applied enable flags, so absence means "off".
pub fn hybrid_query(
    query_text: &str,
    weights: &BTreeMap<String, f64>,
    multi_match_fields: &[String],
) -> Value {
    let mut should = Vec::new();

    for field in SEMANTIC_FIELDS {
        if let Some(boost) = weights.get(*field).filter(|b| **b > 0.0) {
            should.push(json!({
                "match": { *field: { "query": query_text, "boost": boost } }
            }));
        }
    }

    if let Some(boost) = weights.get(MULTI_MATCH_WEIGHT_KEY).filter(|b| **b > 0.0) {
        if !multi_match_fields.is_empty() {
            should.push(json!({
                "multi_match": {
                    "query": query_text,
                    "fields": multi_match_fields,
                    "boost": boost,
                }
            }));
        }
    }

    for field in KEYWORD_FIELDS {
        if let Some(boost) = weights.get(*field).filter(|b| **b > 0.0) {
            should.push(json!({
                "match": { *field: { "query": query_text, "boost": boost } }
            }));
        }
    }

    json!({
        "query": {
            "bool": { "should": should, "minimum_should_match": 1 }
        },
        "highlight": highlight_fields(&["product_name", "description"]),
        "size": RESULT_SIZE,
    })
}

/// Wrap a query document in a semantic reranking retriever over `field`.
///
/// The inner `query` object is lifted into a standard retriever; highlight
/// and size settings carry over unchanged.
pub fn with_reranking(query_doc: Value, field: &str, inference_id: &str, query_text: &str) -> Value {
    let mut root = match query_doc {
        Value::Object(map) => map,
        other => return other,
    };
    let Some(inner) = root.remove("query") else {
        return Value::Object(root);
    };

    root.insert(
        "retriever".to_string(),
        json!({
            "text_similarity_reranker": {
                "retriever": { "standard": { "query": inner } },
                "field": field,
                "inference_id": inference_id,
                "inference_text": query_text,
            }
        }),
    );
    Value::Object(root)
}

/// Exact-term lookup in the refinements index.
pub fn refinements_query(search_term: &str) -> Value {
    json!({
        "query": {
            "term": { "search_term": { "value": search_term.to_lowercase() } }
        }
    })
}

/// More-like-this lookup for the related-items panel, excluding the source
/// document itself.
pub fn related_query(index: &str, document_id: &str) -> Value {
    json!({
        "query": {
            "bool": {
                "must": [{
                    "more_like_this": {
                        "fields": ["product_name", "description"],
                        "like": [{ "_index": index, "_id": document_id }],
                        "min_term_freq": 1,
                        "min_doc_freq": 1,
                    }
                }],
                "must_not": [{ "ids": { "values": [document_id] } }]
            }
        },
        "size": RELATED_SIZE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn weights_of(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    #[test]
    fn hybrid_query_emits_one_clause_per_positive_weight() {
        let weights = weights_of(&[
            ("description_semantic_elser", 3.0),
            ("product_name_semantic_e5", 1.5),
            ("multi_match", 2.0),
        ]);
        let fields = vec!["description".to_string(), "product_name".to_string()];
        let doc = hybrid_query("tent", &weights, &fields);

        let should = doc["query"]["bool"]["should"].as_array().unwrap();
        assert_eq!(should.len(), 3);
        assert_eq!(
            should[0]["match"]["description_semantic_elser"]["boost"],
            3.0
        );
        assert_eq!(should[2]["multi_match"]["fields"][0], "description");
        assert_eq!(doc["query"]["bool"]["minimum_should_match"], 1);
        assert_eq!(doc["size"], RESULT_SIZE);
    }

    #[test]
    fn hybrid_query_skips_zero_and_absent_weights() {
        let weights = weights_of(&[
            ("description_semantic_elser", 0.0),
            ("multi_match", 2.0),
        ]);
        let fields = vec!["product_name".to_string()];
        let doc = hybrid_query("tent", &weights, &fields);

        let should = doc["query"]["bool"]["should"].as_array().unwrap();
        assert_eq!(should.len(), 1);
        assert!(should[0].get("multi_match").is_some());
    }

    #[test]
    fn hybrid_query_drops_multi_match_without_fields() {
        let weights = weights_of(&[("multi_match", 2.0)]);
        let doc = hybrid_query("tent", &weights, &[]);
        let should = doc["query"]["bool"]["should"].as_array().unwrap();
        assert!(should.is_empty());
    }

    #[test]
    fn hybrid_query_includes_keyword_clauses() {
        let weights = weights_of(&[("model_number", 4.0), ("product_id", 1.0)]);
        let doc = hybrid_query("SKU-42", &weights, &[]);
        let should = doc["query"]["bool"]["should"].as_array().unwrap();
        assert_eq!(should.len(), 2);
        assert_eq!(should[0]["match"]["model_number"]["query"], "SKU-42");
    }

    #[test]
    fn reranking_wraps_the_inner_query_in_a_retriever() {
        let weights = weights_of(&[("multi_match", 2.0)]);
        let fields = vec!["product_name".to_string()];
        let doc = with_reranking(
            hybrid_query("tent", &weights, &fields),
            "description",
            "rerank-model",
            "tent",
        );

        assert!(doc.get("query").is_none());
        let reranker = &doc["retriever"]["text_similarity_reranker"];
        assert_eq!(reranker["field"], "description");
        assert_eq!(reranker["inference_id"], "rerank-model");
        assert_eq!(reranker["inference_text"], "tent");
        assert!(reranker["retriever"]["standard"]["query"]["bool"].is_object());
        // highlight and size survive the wrap
        assert_eq!(doc["size"], RESULT_SIZE);
        assert!(doc.get("highlight").is_some());
    }

    #[test]
    fn rules_query_names_the_ruleset() {
        let doc = rules_query("labubu doll", "promo-rules");
        assert_eq!(doc["retriever"]["rule"]["ruleset_ids"][0], "promo-rules");
        assert_eq!(
            doc["retriever"]["rule"]["match_criteria"]["product_name"],
            "labubu doll"
        );
    }

    #[test]
    fn refinements_query_lowercases_the_term() {
        let doc = refinements_query("Tent");
        assert_eq!(doc["query"]["term"]["search_term"]["value"], "tent");
    }

    #[test]
    fn related_query_excludes_the_source_document() {
        let doc = related_query("products", "doc-9");
        assert_eq!(
            doc["query"]["bool"]["must_not"][0]["ids"]["values"][0],
            "doc-9"
        );
        assert_eq!(doc["size"], RELATED_SIZE);
    }
}

//! Display formatting for product cards and result headers.

use shared_types::Product;

/// Pluralized result count, e.g. "1 result" / "12 results".
pub fn result_count_label(total: i64) -> String {
    if total == 1 {
        "1 result".to_string()
    } else {
        format!("{total} results")
    }
}

/// Price line: "USD 89.99", or "N/A" when the engine had no price.
pub fn format_price(price: Option<f64>, currency: &str) -> String {
    match price {
        Some(value) => {
            let currency = if currency.is_empty() { "USD" } else { currency };
            format!("{currency} {value:.2}")
        }
        None => "N/A".to_string(),
    }
}

/// Rating number next to the stars, one decimal.
pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1}")
}

/// Review count in parentheses, as the engine reports it.
pub fn reviews_label(count: i64) -> String {
    format!("({count} reviews)")
}

/// Relevance score line, two decimals.
pub fn format_score(score: f64) -> String {
    format!("Score: {score:.2}")
}

pub fn stock_label(in_stock: bool) -> &'static str {
    if in_stock {
        "In Stock"
    } else {
        "Out of Stock"
    }
}

pub fn display_name(product: &Product) -> &str {
    if product.product_name.is_empty() {
        "No name available"
    } else {
        &product.product_name
    }
}

pub fn display_description(product: &Product) -> &str {
    if product.description.is_empty() {
        "No description available"
    } else {
        &product.description
    }
}

/// All highlight fragments for a product joined into one snippet, fragments
/// separated by " ... ". Fields come out in map order so the snippet is
/// stable for a given product.
pub fn highlight_snippet(product: &Product) -> Option<String> {
    let highlights = product.highlights.as_ref()?;
    let fragments: Vec<&str> = highlights
        .values()
        .flatten()
        .map(String::as_str)
        .collect();
    if fragments.is_empty() {
        None
    } else {
        Some(fragments.join(" ... "))
    }
}

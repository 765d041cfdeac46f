use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdImage;
use dioxus_free_icons::Icon;
use shared_types::{Product, RecommendationsResponse, RefinementData, SearchResponse};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Sheet,
    SheetClose, SheetContent, SheetHeader, SheetSide, SheetTitle, Skeleton, StarRating,
};

use crate::format_helpers::{
    display_description, display_name, format_price, format_rating, format_score,
    highlight_snippet, result_count_label, reviews_label, stock_label,
};

/// Result list under the search bar: notices, loading skeletons, the count
/// header, and the product grid.
#[component]
pub fn ResultsArea(
    results: Signal<Option<SearchResponse>>,
    notice: Signal<Option<String>>,
    loading: Signal<bool>,
    on_select: EventHandler<Product>,
) -> Element {
    if let Some(message) = notice() {
        return rsx! {
            div { class: "results-notice", "{message}" }
        };
    }

    if loading() {
        return rsx! {
            div { class: "result-grid",
                for _ in 0..6 {
                    Card {
                        CardHeader {
                            Skeleton { style: "height: 22px; width: 70%;" }
                        }
                        CardContent {
                            div { class: "skeleton-body",
                                Skeleton { style: "height: 16px; width: 90%;" }
                                Skeleton { style: "height: 16px; width: 40%;" }
                            }
                        }
                    }
                }
            }
        };
    }

    let guard = results.read();
    let Some(response) = guard.as_ref() else {
        return rsx! {
            div { class: "results-placeholder", "Enter a query to search the catalog." }
        };
    };

    if !response.success {
        let message = match &response.error {
            Some(error) => format!("Error: {error}"),
            None => "Search failed".to_string(),
        };
        return rsx! {
            div { class: "results-notice results-error", "{message}" }
        };
    }

    let count = result_count_label(response.total);
    rsx! {
        div { class: "results-header",
            span { class: "results-count", "{count}" }
            if let Some(search_type) = response.search_type {
                Badge {
                    variant: if search_type == shared_types::SearchType::Rules { BadgeVariant::Accent } else { BadgeVariant::Outline },
                    "{search_type.label()}"
                }
            }
        }
        if response.products.is_empty() {
            div { class: "results-placeholder", "No products matched your search." }
        } else {
            div { class: "result-grid",
                for product in response.products.iter() {
                    ProductCard {
                        product: product.clone(),
                        on_select: move |p| on_select.call(p),
                    }
                }
            }
        }
    }
}

/// One product in the result grid. Clicking anywhere opens the detail view.
#[component]
pub fn ProductCard(product: Product, on_select: EventHandler<Product>) -> Element {
    let name = display_name(&product).to_string();
    let description = display_description(&product).to_string();
    let price = format_price(product.final_price, &product.currency);
    let snippet = highlight_snippet(&product);
    let p = product.clone();

    rsx! {
        div {
            class: "result-card-link",
            onclick: move |_| on_select.call(p.clone()),
            Card {
                if let Some(image) = product.main_image.as_ref() {
                    img { class: "result-image", src: "{image}", alt: "{name}", loading: "lazy" }
                } else {
                    div { class: "result-image image-placeholder",
                        Icon::<LdImage> { icon: LdImage, width: 32, height: 32 }
                    }
                }
                CardHeader {
                    CardTitle { "{name}" }
                    if let Some(rating) = product.rating {
                        div { class: "result-rating",
                            StarRating { rating }
                            span { class: "result-rating-value", {format_rating(rating)} }
                            span { class: "result-reviews", {reviews_label(product.reviews_count)} }
                        }
                    }
                }
                CardContent {
                    p { class: "result-description", "{description}" }
                    if let Some(snippet) = snippet {
                        p { class: "result-highlight", dangerous_inner_html: "{snippet}" }
                    }
                    div { class: "result-meta",
                        span { class: "result-price", "{price}" }
                        Badge {
                            variant: if product.in_stock { BadgeVariant::Success } else { BadgeVariant::Danger },
                            {stock_label(product.in_stock)}
                        }
                    }
                    if let Some(score) = product.score {
                        span { class: "result-score", {format_score(score)} }
                    }
                }
            }
        }
    }
}

/// Sliding detail panel for a selected product, with similar items when the
/// page exposes them.
#[component]
pub fn DetailSheet(
    selected: Signal<Option<Product>>,
    recommendations: Signal<Option<RecommendationsResponse>>,
    show_recommendations: bool,
    on_select: EventHandler<Product>,
) -> Element {
    let guard = selected.read();
    let Some(product) = guard.as_ref() else {
        return rsx! {};
    };
    let product = product.clone();
    drop(guard);

    let name = display_name(&product).to_string();
    let description = display_description(&product).to_string();
    let price = format_price(product.final_price, &product.currency);
    let related = recommendations.read().clone();

    rsx! {
        Sheet {
            open: true,
            side: SheetSide::Right,
            on_close: move |_| selected.set(None),
            SheetHeader {
                SheetTitle { "{name}" }
                SheetClose { on_close: move |_| selected.set(None) }
            }
            SheetContent {
                if let Some(image) = product.main_image.as_ref() {
                    img { class: "detail-image", src: "{image}", alt: "{name}" }
                } else {
                    div { class: "detail-image image-placeholder",
                        Icon::<LdImage> { icon: LdImage, width: 48, height: 48 }
                    }
                }
                if let Some(rating) = product.rating {
                    div { class: "result-rating",
                        StarRating { rating }
                        span { class: "result-rating-value", {format_rating(rating)} }
                        span { class: "result-reviews", {reviews_label(product.reviews_count)} }
                    }
                }
                p { class: "detail-description", "{description}" }
                div { class: "detail-meta",
                    span { class: "result-price", "{price}" }
                    Badge {
                        variant: if product.in_stock { BadgeVariant::Success } else { BadgeVariant::Danger },
                        {stock_label(product.in_stock)}
                    }
                }
                if !product.product_id.is_empty() {
                    p { class: "detail-model", "Product ID: {product.product_id}" }
                }
                if let Some(model) = product.model_number.as_ref() {
                    p { class: "detail-model", "Model: {model}" }
                }
                if let Some(score) = product.score {
                    p { class: "detail-model", {format_score(score)} }
                }
                if show_recommendations {
                    h4 { class: "detail-related-title", "Similar products" }
                    {match related {
                        None => rsx! {
                            p { class: "detail-related-empty", "Loading similar products..." }
                        },
                        Some(reply) if !reply.success => {
                            let message = reply
                                .error
                                .unwrap_or_else(|| "Failed to load recommendations".to_string());
                            rsx! {
                                p { class: "detail-related-empty", "Error: {message}" }
                            }
                        }
                        Some(reply) if reply.recommendations.is_empty() => rsx! {
                            p { class: "detail-related-empty", "No recommendations available" }
                        },
                        Some(reply) => rsx! {
                            div { class: "detail-related-grid",
                                for item in reply.recommendations.iter() {
                                    RelatedCard {
                                        product: item.clone(),
                                        on_select: move |p| on_select.call(p),
                                    }
                                }
                            }
                        },
                    }}
                }
            }
        }
    }
}

/// Compact card for the similar-products strip. Selecting one swaps the
/// detail view to that product.
#[component]
fn RelatedCard(product: Product, on_select: EventHandler<Product>) -> Element {
    let name = display_name(&product).to_string();
    let price = format_price(product.final_price, &product.currency);
    let p = product.clone();

    rsx! {
        div {
            class: "related-card",
            onclick: move |_| on_select.call(p.clone()),
            if let Some(image) = product.main_image.as_ref() {
                img { class: "related-image", src: "{image}", alt: "{name}", loading: "lazy" }
            } else {
                div { class: "related-image image-placeholder",
                    Icon::<LdImage> { icon: LdImage, width: 24, height: 24 }
                }
            }
            span { class: "related-name", "{name}" }
            span { class: "related-price", "{price}" }
            if let Some(rating) = product.rating {
                span { class: "related-rating", {format_rating(rating)} }
            }
        }
    }
}

/// Suggestion banner shown when a search comes back empty and the
/// refinements index knows a better term.
#[component]
pub fn RefinementNotice(data: RefinementData, on_pick: EventHandler<String>) -> Element {
    let Some(best) = data.best_recommendation.clone() else {
        return rsx! {};
    };
    let best_term = best.term.clone();
    let others: Vec<String> = data
        .all_recommendations
        .keys()
        .filter(|term| **term != best.term)
        .cloned()
        .collect();

    rsx! {
        div { class: "refinement-notice",
            span { "Did you mean " }
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| on_pick.call(best_term.clone()),
                b { "{best.term}" }
            }
            span { "?" }
            if !others.is_empty() {
                span { class: "refinement-others",
                    "Also tried: "
                    for term in others.iter() {
                        {
                            let term = term.clone();
                            rsx! {
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    onclick: move |_| on_pick.call(term.clone()),
                                    "{term}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

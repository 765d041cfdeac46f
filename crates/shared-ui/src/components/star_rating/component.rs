use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdStar;
use dioxus_free_icons::Icon;

/// Total stars in a rating row.
pub const MAX_STARS: u32 = 5;

/// Filled stars for a rating: whole stars only, clamped to the row.
pub fn filled_star_count(rating: f64) -> u32 {
    if rating.is_nan() || rating <= 0.0 {
        return 0;
    }
    (rating.floor() as u32).min(MAX_STARS)
}

/// Five-star rating row. Whole stars are filled, the rest are dimmed.
#[component]
pub fn StarRating(rating: f64) -> Element {
    let filled = filled_star_count(rating);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { class: "star-rating",
            for i in 0..MAX_STARS {
                span {
                    class: "star",
                    "data-filled": if i < filled { "true" } else { "false" },
                    Icon::<LdStar> { icon: LdStar, width: 14, height: 14 }
                }
            }
        }
    }
}

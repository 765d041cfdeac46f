pub mod controls;
pub mod not_found;
pub mod results;
pub mod search;
pub mod synonyms;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSearch;
use dioxus_free_icons::Icon;

use crate::session::{HYBRID_PROFILE, RULES_PROFILE, SIMPLE_PROFILE};
use not_found::NotFound;
use search::SearchPage;

/// Application routes. Each search page is the same controller component
/// with a different capability profile.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    HybridSearch {},
    #[route("/rules")]
    RulesSearch {},
    #[route("/simple")]
    SimpleSearch {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn HybridSearch() -> Element {
    rsx! { SearchPage { profile: HYBRID_PROFILE } }
}

#[component]
fn RulesSearch() -> Element {
    rsx! { SearchPage { profile: RULES_PROFILE } }
}

#[component]
fn SimpleSearch() -> Element {
    rsx! { SearchPage { profile: SIMPLE_PROFILE } }
}

/// Top navigation shared by all search pages.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();

    let nav_class = |active: bool| {
        if active {
            "nav-link nav-link-active"
        } else {
            "nav-link"
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        header { class: "topbar",
            span { class: "topbar-brand",
                Icon::<LdSearch> { icon: LdSearch, width: 18, height: 18 }
                "Product Search Lab"
            }
            nav { class: "topbar-nav",
                Link {
                    to: Route::HybridSearch {},
                    class: nav_class(matches!(route, Route::HybridSearch {})),
                    "Hybrid"
                }
                Link {
                    to: Route::RulesSearch {},
                    class: nav_class(matches!(route, Route::RulesSearch {})),
                    "Query Rules"
                }
                Link {
                    to: Route::SimpleSearch {},
                    class: nav_class(matches!(route, Route::SimpleSearch {})),
                    "Simple"
                }
            }
        }
        main { class: "page-content",
            Outlet::<Route> {}
        }
    }
}

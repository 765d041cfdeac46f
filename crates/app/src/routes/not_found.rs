use dioxus::prelude::*;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        div { class: "not-found",
            h1 { "Page not found" }
            p { "No page exists at /{path}" }
        }
    }
}

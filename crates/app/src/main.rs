use dioxus::prelude::*;

mod debounce;
mod format_helpers;
mod routes;
mod session;

use routes::Route;

const THEME: Asset = asset!("/assets/theme.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::telemetry::init();
        server::config::load();

        let router = dioxus::server::router(App)
            .layer(tower_http::trace::TraceLayer::new_for_http());
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}

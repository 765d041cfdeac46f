use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSearch;
use dioxus_free_icons::Icon;
use server::api::{generate_query, get_recommendations, get_search_refinements, search_products};
use shared_types::{Product, RecommendationsResponse, RefinementData, SearchResponse};
use shared_ui::{Button, ButtonVariant, Input, PageActions, PageHeader, PageTitle, SearchBar};

use crate::debounce::{sleep, Debouncer, QUERY_PREVIEW_DELAY};
use crate::routes::{controls, results, synonyms};
use crate::session::{reply_matches_selection, RequestSequence, SearchProfile, SearchSession};

/// One controller renders every search page; `profile` decides which
/// panels exist and which request fields are sent.
#[component]
pub fn SearchPage(profile: SearchProfile) -> Element {
    let mut session = use_signal(SearchSession::new);
    let mut results_state = use_signal(|| None::<SearchResponse>);
    let mut notice = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);
    let mut sequence = use_signal(RequestSequence::default);
    let mut preview = use_signal(|| None::<serde_json::Value>);
    let mut previewer = use_signal(|| Debouncer::new(QUERY_PREVIEW_DELAY));
    let mut refinements = use_signal(|| None::<RefinementData>);
    let mut selected = use_signal(|| None::<Product>);
    let mut recommendations = use_signal(|| None::<RecommendationsResponse>);

    // Trailing-edge refresh of the query preview. Every control change
    // restarts the window; only the wakeup for the last change fires, and it
    // reads the configuration as it stands at fire time.
    let schedule_preview = move |_| {
        if !profile.query_preview {
            return;
        }
        let token = previewer.write().arm();
        if session.peek().query.trim().is_empty() {
            preview.set(None);
            return;
        }
        let delay = previewer.peek().delay();
        spawn(async move {
            sleep(delay).await;
            if !previewer.peek().is_current(token) {
                return;
            }
            let request = session.peek().request(&profile);
            if request.query.is_empty() {
                return;
            }
            // Preview failures stay in the log; the last good preview keeps
            // showing.
            match generate_query(request).await {
                Ok(response) if response.success => {
                    if let Some(doc) = response.query {
                        preview.set(Some(doc));
                    }
                }
                Ok(response) => {
                    tracing::warn!(error = ?response.error, "query preview failed");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "query preview request failed");
                }
            }
        });
    };

    let run_search = move |query_override: Option<String>| {
        if let Some(query) = query_override {
            session.write().query = query;
        }
        let request = session.peek().request(&profile);
        if request.query.is_empty() {
            notice.set(Some("Please enter a search query".to_string()));
            results_state.set(None);
            refinements.set(None);
            return;
        }
        notice.set(None);
        refinements.set(None);
        loading.set(true);

        // Tag the request; a stale response must never overwrite a newer one.
        let token = sequence.write().issue();
        let wants_refinements = profile.refinements;
        let query_text = request.query.clone();
        spawn(async move {
            let outcome = search_products(request).await;
            if !sequence.peek().is_current(token) {
                return;
            }
            loading.set(false);
            match outcome {
                Ok(response) => {
                    // A search also refreshes the pending-query slot.
                    if response.success {
                        if let Some(doc) = response.query.clone() {
                            preview.set(Some(doc));
                        }
                    }
                    if wants_refinements && response.success && response.total == 0 {
                        spawn(async move {
                            let outcome = get_search_refinements(query_text).await;
                            // The lookup belongs to this search; a newer
                            // submission supersedes its suggestion too.
                            if !sequence.peek().is_current(token) {
                                return;
                            }
                            if let Ok(reply) = outcome {
                                if reply.success {
                                    refinements.set(reply.data);
                                }
                            }
                        });
                    }
                    results_state.set(Some(response));
                }
                Err(e) => {
                    notice.set(Some(format!("Network error: {e}")));
                    results_state.set(None);
                }
            }
        });
    };

    let open_detail = move |product: Product| {
        if profile.recommendations {
            recommendations.set(None);
            let document_id = product.id.clone();
            spawn(async move {
                let outcome = get_recommendations(document_id.clone()).await;
                // The sheet may show a different product by now, or be
                // closed; this reply is only valid for the one it was
                // fetched for.
                if !reply_matches_selection(selected.peek().as_ref(), &document_id) {
                    return;
                }
                match outcome {
                    Ok(reply) => recommendations.set(Some(reply)),
                    Err(e) => recommendations
                        .set(Some(RecommendationsResponse::failure(format!(
                            "Network error: {e}"
                        )))),
                }
            });
        }
        selected.set(Some(product));
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./search.css") }
        div { class: "search-page",
            PageHeader {
                PageTitle { "{profile.title}" }
                if profile.console_links {
                    PageActions {
                        controls::ConsoleLinks {}
                    }
                }
            }

            SearchBar {
                Input {
                    value: session.read().query.clone(),
                    placeholder: "Search for products...",
                    label: "",
                    on_input: move |evt: FormEvent| {
                        session.write().query = evt.value();
                        schedule_preview(());
                    },
                    on_keydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            run_search(None);
                        }
                    },
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| run_search(None),
                    Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                    "Search"
                }
            }

            if profile.search_type_picker {
                controls::SearchTypePicker { session, on_change: schedule_preview }
            }

            if profile.weight_controls {
                controls::WeightPanel { session, on_change: schedule_preview }
            }

            if profile.reranking {
                controls::RerankPanel { session, on_change: schedule_preview }
            }

            if profile.query_preview {
                controls::QueryPreviewCard { preview, copyable: profile.copy_query }
            }

            if profile.synonyms_panel {
                synonyms::SynonymsPanel {}
            }

            if let Some(data) = refinements() {
                results::RefinementNotice {
                    data,
                    on_pick: move |term: String| run_search(Some(term)),
                }
            }

            results::ResultsArea {
                results: results_state,
                notice,
                loading,
                on_select: open_detail,
            }

            results::DetailSheet {
                selected,
                recommendations,
                show_recommendations: profile.recommendations,
                on_select: open_detail,
            }
        }
    }
}

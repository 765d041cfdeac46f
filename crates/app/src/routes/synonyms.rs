use dioxus::prelude::*;
use server::api::{get_synonyms, reset_synonyms, update_synonym_rule};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Input, Skeleton,
    ToastOptions,
};

/// Editor for the engine-managed synonym set.
///
/// The set is fetched on mount; saving overwrites the edited rule and
/// reloads, so the list always reflects what the engine holds.
#[component]
pub fn SynonymsPanel() -> Element {
    let toast = use_toast();
    let mut synonym_set = use_resource(|| async { get_synonyms().await });
    let mut edited = use_signal(|| None::<(String, String)>);
    let mut saving = use_signal(|| false);

    let mut save_rule = move |rule_id: String, synonyms: String| {
        if synonyms.trim().is_empty() {
            toast.error("Synonyms cannot be empty".to_string(), ToastOptions::new());
            return;
        }
        saving.set(true);
        spawn(async move {
            match update_synonym_rule(rule_id, synonyms).await {
                Ok(reply) if reply.success => {
                    toast.success("Synonyms updated".to_string(), ToastOptions::new());
                    edited.set(None);
                    synonym_set.restart();
                }
                Ok(reply) => {
                    let message = reply.error.unwrap_or_else(|| "Update failed".to_string());
                    toast.error(message, ToastOptions::new());
                }
                Err(e) => {
                    toast.error(format!("Network error: {e}"), ToastOptions::new());
                }
            }
            saving.set(false);
        });
    };

    let reset_set = move |_| {
        saving.set(true);
        spawn(async move {
            match reset_synonyms().await {
                Ok(reply) if reply.success => {
                    toast.success("Synonyms reset".to_string(), ToastOptions::new());
                    edited.set(None);
                    synonym_set.restart();
                }
                Ok(reply) => {
                    let message = reply.error.unwrap_or_else(|| "Reset failed".to_string());
                    toast.error(message, ToastOptions::new());
                }
                Err(e) => {
                    toast.error(format!("Network error: {e}"), ToastOptions::new());
                }
            }
            saving.set(false);
        });
    };

    let guard = synonym_set.read();
    rsx! {
        Card {
            CardHeader {
                div { class: "panel-header-row",
                    CardTitle { "Synonyms" }
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: saving(),
                        onclick: reset_set,
                        "Reset to defaults"
                    }
                }
            }
            CardContent {
                {match guard.as_ref() {
                    None => rsx! {
                        Skeleton { style: "height: 32px; width: 100%;" }
                    },
                    Some(Err(e)) => rsx! {
                        div { class: "results-notice results-error", "Network error: {e}" }
                    },
                    Some(Ok(reply)) if !reply.success => {
                        let message = reply
                            .error
                            .clone()
                            .unwrap_or_else(|| "Failed to load synonyms".to_string());
                        rsx! {
                            div { class: "results-notice results-error", "Error: {message}" }
                        }
                    }
                    Some(Ok(reply)) => {
                        let rules = reply
                            .data
                            .as_ref()
                            .map(|set| set.synonyms_set.clone())
                            .unwrap_or_default();
                        rsx! {
                            if rules.is_empty() {
                                div { class: "results-placeholder", "The synonym set is empty." }
                            }
                            for rule in rules.iter() {
                                {
                                    let rule_id = rule.id.clone();
                                    let stored = rule.synonyms.clone();
                                    let current = match edited() {
                                        Some((ref id, ref text)) if *id == rule_id => text.clone(),
                                        _ => stored.clone(),
                                    };
                                    let input_id = rule_id.clone();
                                    let save_id = rule_id.clone();
                                    let save_text = current.clone();
                                    rsx! {
                                        div { class: "synonym-row",
                                            span { class: "synonym-rule-id", "{rule_id}" }
                                            Input {
                                                value: current.clone(),
                                                label: "",
                                                placeholder: "comma, separated, synonyms",
                                                on_input: move |evt: FormEvent| {
                                                    edited.set(Some((input_id.clone(), evt.value())));
                                                },
                                            }
                                            Button {
                                                variant: ButtonVariant::Primary,
                                                disabled: saving(),
                                                onclick: move |_| save_rule(save_id.clone(), save_text.clone()),
                                                "Save"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }}
            }
        }
    }
}

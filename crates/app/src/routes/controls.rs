use dioxus::prelude::*;
use server::api::{console_dev_tools_url, console_query_rules_url};
use shared_types::{weight_keys, SearchType, RERANK_FIELDS, TEXT_FIELDS};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Checkbox,
    CheckboxIndicator, CheckboxState, Input, Label, RadioGroup, RadioGroupItem, Switch,
    SwitchThumb, ToastOptions,
};

use crate::session::SearchSession;

/// Text vs. query-rules mode picker.
#[component]
pub fn SearchTypePicker(session: Signal<SearchSession>, on_change: EventHandler<()>) -> Element {
    let current = session.read().search_type;
    let default = match current {
        SearchType::Text => "text",
        SearchType::Rules => "rules",
    };

    rsx! {
        div { class: "search-type-picker",
            Label { html_for: "search-type", "Search mode" }
            RadioGroup {
                default_value: default.to_string(),
                on_value_change: move |value: String| {
                    session.write().search_type = if value == "rules" {
                        SearchType::Rules
                    } else {
                        SearchType::Text
                    };
                    on_change.call(());
                },
                div { class: "search-type-options",
                    label { class: "search-type-option",
                        RadioGroupItem { value: "text", index: 0usize }
                        "Text Search"
                    }
                    label { class: "search-type-option",
                        RadioGroupItem { value: "rules", index: 1usize }
                        "Query Rules"
                    }
                }
            }
        }
    }
}

/// Per-field boost inputs with enable switches, plus the multi-match field
/// picks and a reset button.
#[component]
pub fn WeightPanel(session: Signal<SearchSession>, on_change: EventHandler<()>) -> Element {
    let keys = weight_keys();

    rsx! {
        Card {
            CardHeader {
                div { class: "panel-header-row",
                    CardTitle { "Field Weights" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            session.write().reset_weights();
                            on_change.call(());
                        },
                        "Reset"
                    }
                }
            }
            CardContent {
                div { class: "weight-grid",
                    for key in keys.iter() {
                        WeightRow {
                            key_name: key.clone(),
                            session,
                            on_change: move |_| on_change.call(()),
                        }
                    }
                }
                div { class: "multi-match-fields",
                    Label { html_for: "multi-match-fields", "Multi-match fields" }
                    div { class: "field-checks",
                        for field in TEXT_FIELDS.iter() {
                            FieldCheck {
                                field: field.to_string(),
                                session,
                                on_change: move |_| on_change.call(()),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn WeightRow(
    key_name: String,
    session: Signal<SearchSession>,
    on_change: EventHandler<()>,
) -> Element {
    let setting = session.read().weights.get(&key_name).copied();
    let Some(setting) = setting else {
        return rsx! {};
    };
    let value_text = format!("{}", setting.value);
    let input_key = key_name.clone();
    let switch_key = key_name.clone();

    rsx! {
        div { class: "weight-row",
            Switch {
                checked: Some(setting.enabled),
                on_checked_change: move |enabled: bool| {
                    session.write().set_enabled(&switch_key, enabled);
                    on_change.call(());
                },
                SwitchThumb {}
            }
            span { class: "weight-name", "{key_name}" }
            Input {
                value: value_text,
                input_type: "number".to_string(),
                label: "",
                disabled: !setting.enabled,
                on_input: move |evt: FormEvent| {
                    session.write().set_weight(&input_key, &evt.value());
                    on_change.call(());
                },
            }
        }
    }
}

#[component]
fn FieldCheck(
    field: String,
    session: Signal<SearchSession>,
    on_change: EventHandler<()>,
) -> Element {
    let selected = session.read().multi_match_fields.iter().any(|f| *f == field);
    let toggle_field = field.clone();

    rsx! {
        label { class: "field-check",
            Checkbox {
                checked: Some(if selected { CheckboxState::Checked } else { CheckboxState::Unchecked }),
                on_checked_change: move |state: CheckboxState| {
                    session
                        .write()
                        .toggle_multi_match_field(&toggle_field, state == CheckboxState::Checked);
                    on_change.call(());
                },
                CheckboxIndicator {}
            }
            "{field}"
        }
    }
}

/// Semantic reranking toggle and rerank-field picker.
#[component]
pub fn RerankPanel(session: Signal<SearchSession>, on_change: EventHandler<()>) -> Element {
    let enabled = session.read().enable_reranking;
    let field = session.read().rerank_field.clone();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Semantic Reranking" }
            }
            CardContent {
                div { class: "rerank-row",
                    Switch {
                        checked: Some(enabled),
                        on_checked_change: move |value: bool| {
                            session.write().enable_reranking = value;
                            on_change.call(());
                        },
                        SwitchThumb {}
                    }
                    span { "Rerank results with a semantic model" }
                }
                if enabled {
                    div { class: "rerank-fields",
                        Label { html_for: "rerank-field", "Rerank on" }
                        RadioGroup {
                            default_value: field,
                            on_value_change: move |value: String| {
                                session.write().rerank_field = value;
                                on_change.call(());
                            },
                            div { class: "search-type-options",
                                for (index, rerank_field) in RERANK_FIELDS.iter().enumerate() {
                                    label { class: "search-type-option",
                                        RadioGroupItem { value: rerank_field.to_string(), index }
                                        "{rerank_field}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Live view of the engine query the current configuration would run.
#[component]
pub fn QueryPreviewCard(preview: Signal<Option<serde_json::Value>>, copyable: bool) -> Element {
    let toast = use_toast();
    let guard = preview.read();
    let Some(doc) = guard.as_ref() else {
        return rsx! {};
    };

    let body = serde_json::to_string_pretty(doc).unwrap_or_default();
    let copy_text = body.clone();

    rsx! {
        Card {
            CardHeader {
                div { class: "panel-header-row",
                    CardTitle { "Query Preview" }
                    if copyable {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| {
                                let payload = serde_json::to_string(&copy_text)
                                    .unwrap_or_else(|_| "\"\"".to_string());
                                let _ = document::eval(&format!(
                                    "navigator.clipboard.writeText({payload});"
                                ));
                                toast.success("Query copied".to_string(), ToastOptions::new());
                            },
                            "Copy"
                        }
                    }
                }
            }
            CardContent {
                pre { class: "query-preview", "{body}" }
            }
        }
    }
}

/// Deep links into the engine's management console.
#[component]
pub fn ConsoleLinks() -> Element {
    let toast = use_toast();

    let open_dev_tools = move |_| {
        spawn(async move {
            match console_dev_tools_url().await {
                Ok(reply) if reply.success => {
                    if let Some(url) = reply.url {
                        let payload = serde_json::to_string(&url)
                            .unwrap_or_else(|_| "\"\"".to_string());
                        let _ = document::eval(&format!("window.open({payload}, '_blank');"));
                    }
                }
                Ok(reply) => {
                    let message = reply
                        .error
                        .unwrap_or_else(|| "Console URL is not configured".to_string());
                    toast.error(message, ToastOptions::new());
                }
                Err(e) => {
                    toast.error(format!("Network error: {e}"), ToastOptions::new());
                }
            }
        });
    };

    let open_query_rules = move |_| {
        spawn(async move {
            match console_query_rules_url().await {
                Ok(reply) if reply.success => {
                    if let Some(url) = reply.url {
                        let payload = serde_json::to_string(&url)
                            .unwrap_or_else(|_| "\"\"".to_string());
                        let _ = document::eval(&format!("window.open({payload}, '_blank');"));
                    }
                }
                Ok(reply) => {
                    let message = reply
                        .error
                        .unwrap_or_else(|| "Console URL is not configured".to_string());
                    toast.error(message, ToastOptions::new());
                }
                Err(e) => {
                    toast.error(format!("Network error: {e}"), ToastOptions::new());
                }
            }
        });
    };

    rsx! {
        Button {
            variant: ButtonVariant::Outline,
            onclick: open_dev_tools,
            "Open Console"
        }
        Button {
            variant: ButtonVariant::Outline,
            onclick: open_query_rules,
            "Manage Query Rules"
        }
    }
}

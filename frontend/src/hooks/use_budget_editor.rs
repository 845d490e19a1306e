use std::cell::Cell;

use gloo::timers::future::TimeoutFuture;
use shared::{BudgetEditorConfig, EditorState};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "budget-editor";

pub struct UseBudgetEditorResult {
    pub state: EditorState,
    pub actions: UseBudgetEditorActions,
}

#[derive(Clone)]
pub struct UseBudgetEditorActions {
    /// Keystroke in one category's input: `(category, input event)`
    pub on_amount_input: Callback<(String, InputEvent)>,
    pub on_submit: Callback<SubmitEvent>,
}

/// Hook owning the budget editor's load, edit and submit cycle
#[hook]
pub fn use_budget_editor(config: &BudgetEditorConfig) -> UseBudgetEditorResult {
    let state = use_state(EditorState::default);
    // Cleared on unmount so late responses don't touch a dead component
    let mounted = use_memo((), |_| Cell::new(true));
    Logger::set_debug(config.enable_debug_logging);
    let api_client = ApiClient::with_base_url(config.api_base_url.clone());

    // Fetch categories and budgets once on mount
    {
        let state = state.clone();
        let api_client = api_client.clone();
        let mounted = mounted.clone();

        use_effect_with((), move |_| {
            spawn_local({
                let mounted = mounted.clone();
                async move {
                    let result = api_client
                        .load_budget_data()
                        .await
                        .map_err(|e| e.into_load_failure());

                    if !mounted.get() {
                        return;
                    }

                    match &result {
                        Ok((categories, budgets)) => Logger::debug_with_component(
                            COMPONENT,
                            &format!(
                                "Loaded {} categories and {} budgets",
                                categories.len(),
                                budgets.len()
                            ),
                        ),
                        Err(e) => Logger::error_with_component(COMPONENT, &e.to_string()),
                    }
                    state.set(EditorState::loaded(result));
                }
            });

            move || mounted.set(false)
        });
    }

    let on_amount_input = {
        let state = state.clone();
        Callback::from(move |(category, e): (String, InputEvent)| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let raw = input.value();

            let Some(form) = state.form() else { return };
            match form.edit(&category, &raw) {
                Some(edited) => state.set(EditorState::Ready(edited)),
                None => {
                    // Controlled input: put the last accepted text back
                    input.set_value(&form.amounts.display_value(&category));
                    Logger::debug_with_component(
                        COMPONENT,
                        &format!("Rejected input {:?} for {}", raw, category),
                    );
                }
            }
        })
    };

    let on_submit = {
        let state = state.clone();
        let api_client = api_client.clone();
        let reload_delay_ms = config.reload_delay_ms;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(submitting) = state.form().and_then(|form| form.begin_submit()) else {
                return;
            };
            let payload = submitting.payload();
            state.set(EditorState::Ready(submitting.clone()));

            let state = state.clone();
            let api_client = api_client.clone();
            let mounted = mounted.clone();
            spawn_local(async move {
                let result = api_client.submit_budgets(&payload).await;
                if !mounted.get() {
                    return;
                }

                match result {
                    Ok(()) => {
                        Logger::info_with_component(
                            COMPONENT,
                            &format!("Saved {} budgets", payload.len()),
                        );
                        state.set(EditorState::Ready(submitting.submit_succeeded()));

                        TimeoutFuture::new(reload_delay_ms).await;
                        reload_page();
                    }
                    Err(e) => {
                        Logger::warn_with_component(COMPONENT, &format!("Save failed: {}", e));
                        let error = e.into_submit_failure();
                        state.set(EditorState::Ready(submitting.submit_failed(&error)));
                    }
                }
            });
        })
    };

    UseBudgetEditorResult {
        state: (*state).clone(),
        actions: UseBudgetEditorActions {
            on_amount_input,
            on_submit,
        },
    }
}

fn reload_page() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().reload() {
        Logger::error_with_component(COMPONENT, &format!("Page reload failed: {:?}", e));
    }
}

use shared::{BudgetEditorConfig, EditorState};
use yew::prelude::*;

use super::forms::budget_form::BudgetFormView;
use crate::hooks::use_budget_editor::use_budget_editor;

#[derive(Properties, PartialEq, Default)]
pub struct BudgetEditorProps {
    #[prop_or_default]
    pub config: BudgetEditorConfig,
}

/// Loads, edits and saves the per-category budgets
#[function_component(BudgetEditor)]
pub fn budget_editor(props: &BudgetEditorProps) -> Html {
    let editor = use_budget_editor(&props.config);

    match editor.state {
        EditorState::Loading => html! {
            <div class="loading">{"Loading data..."}</div>
        },
        EditorState::LoadError(error) => html! {
            <div class="load-error">{format!("Error: {}", error)}</div>
        },
        EditorState::Ready(form) => html! {
            <BudgetFormView
                form={form}
                currency_symbol={props.config.currency_symbol.clone()}
                on_amount_input={editor.actions.on_amount_input}
                on_submit={editor.actions.on_submit}
            />
        },
    }
}

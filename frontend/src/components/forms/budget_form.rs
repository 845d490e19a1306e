use shared::{BudgetForm, FormPhase};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BudgetFormViewProps {
    pub form: BudgetForm,
    pub currency_symbol: String,

    // Event handlers
    pub on_amount_input: Callback<(String, InputEvent)>,
    pub on_submit: Callback<SubmitEvent>,
}

/// Id of the input for a category, also used by its label
pub fn input_id(category: &str) -> String {
    format!("budget-{}", category)
}

#[function_component(BudgetFormView)]
pub fn budget_form_view(props: &BudgetFormViewProps) -> Html {
    let submitting = props.form.is_submitting();

    html! {
        <div class="budget-editor">
            <form class="budget-form" onsubmit={props.on_submit.clone()}>
                <h1 class="budget-form-title">{"View and configure your budgets"}</h1>

                <div class="budget-grid">
                    {for props.form.categories.iter().map(|category| {
                        let id = input_id(category);
                        let on_input = {
                            let on_amount_input = props.on_amount_input.clone();
                            let category = category.clone();
                            Callback::from(move |e: InputEvent| {
                                on_amount_input.emit((category.clone(), e));
                            })
                        };

                        html! {
                            <div class="budget-card" key={category.clone()}>
                                <label for={id.clone()}>{category}</label>
                                <div class="amount-input">
                                    <input
                                        type="text"
                                        inputmode="decimal"
                                        id={id}
                                        placeholder="Not set"
                                        value={props.form.amounts.display_value(category)}
                                        oninput={on_input}
                                        disabled={submitting}
                                    />
                                    <span class="currency-symbol">{&props.currency_symbol}</span>
                                </div>
                            </div>
                        }
                    })}
                </div>

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled={submitting}>
                        {if submitting { "Saving..." } else { "Save" }}
                    </button>
                </div>

                {match &props.form.phase {
                    FormPhase::Saved(message) => html! {
                        <p class="form-message success">
                            {message}
                            <span class="form-message-hint">{"Updating..."}</span>
                        </p>
                    },
                    FormPhase::Failed(error) => html! {
                        <p class="form-message error">{error}</p>
                    },
                    FormPhase::Idle | FormPhase::Submitting => html! {},
                }}
            </form>
        </div>
    }
}

use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::budget_editor::BudgetEditor;

#[function_component(App)]
fn app() -> Html {
    html! {
        <main class="container">
            <BudgetEditor />
        </main>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

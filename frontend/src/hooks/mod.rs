pub mod use_budget_editor;

pub mod budget_editor;
pub mod forms;

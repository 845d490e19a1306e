pub mod budget_form;

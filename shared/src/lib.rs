use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod amount;
pub mod editor;

pub use editor::{BudgetForm, EditableBudgetMap, EditorState, FormPhase};

/// A named budget bucket, e.g. "Food"
pub type Category = String;

/// One category paired with its budgeted amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetEntry {
    pub category: Category,
    pub amount: f64,
}

/// Body returned by the backend when saving budgets fails
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Message shown when the initial data fetch fails
pub const LOAD_ERROR_MESSAGE: &str = "Unable to retrieve budget data";
/// Fallback message when a submit fails without a usable server message
pub const SUBMIT_ERROR_MESSAGE: &str = "Unable to save budgets";
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Your budget has been saved successfully!";

/// Failures the budget editor surfaces to the user
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BudgetError {
    /// Either read request failed or returned something undecodable
    #[error("failed to load budget data: {0}")]
    LoadFailure(String),
    /// The write request failed; carries the server's message when it sent one
    #[error("failed to save budgets: {}", .0.as_deref().unwrap_or("no server message"))]
    SubmitFailure(Option<String>),
}

impl BudgetError {
    /// Text displayed in the UI for this failure
    pub fn user_message(&self) -> String {
        match self {
            BudgetError::LoadFailure(_) => LOAD_ERROR_MESSAGE.to_string(),
            BudgetError::SubmitFailure(Some(message)) if !message.trim().is_empty() => {
                message.clone()
            }
            BudgetError::SubmitFailure(_) => SUBMIT_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Configuration for the budget editor component
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetEditorConfig {
    /// Prefix prepended to `/api/...` paths; empty means same origin
    pub api_base_url: String,
    /// Delay between a successful save and the page reload
    pub reload_delay_ms: u32,
    pub currency_symbol: String,
    pub enable_debug_logging: bool,
}

impl Default for BudgetEditorConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            reload_delay_ms: 1500,
            currency_symbol: "€".to_string(),
            enable_debug_logging: false,
        }
    }
}

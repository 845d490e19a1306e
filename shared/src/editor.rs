//! State machine behind the budget editor form.
//!
//! The component holds a single [`EditorState`] instead of separate flags for
//! loading, errors and status, so combinations like "loading with an error
//! and a form" cannot be represented.

use std::collections::BTreeMap;

use crate::amount::{format_amount, normalize, parse_amount};
use crate::{BudgetEntry, BudgetError, Category, SUBMIT_SUCCESS_MESSAGE};

/// Per-category text buffer backing the form inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditableBudgetMap {
    amounts: BTreeMap<Category, String>,
}

impl EditableBudgetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the initial buffer from provided budgets, keeping only known categories
    pub fn from_budgets(categories: &[Category], budgets: &[BudgetEntry]) -> Self {
        let amounts = budgets
            .iter()
            .filter(|budget| categories.contains(&budget.category))
            .map(|budget| (budget.category.clone(), format_amount(budget.amount)))
            .collect();
        Self { amounts }
    }

    /// Text for a category, `None` when nothing has been entered
    pub fn get(&self, category: &str) -> Option<&str> {
        self.amounts.get(category).map(String::as_str)
    }

    /// Text to show in the input; absent entries render empty
    pub fn display_value(&self, category: &str) -> String {
        self.get(category).unwrap_or_default().to_string()
    }

    /// Copy of this map with one category's text replaced
    pub fn with_amount(&self, category: &str, text: String) -> Self {
        let mut amounts = self.amounts.clone();
        amounts.insert(category.to_string(), text);
        Self { amounts }
    }

    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}

/// Sub-state of a loaded form
#[derive(Debug, Clone, PartialEq)]
pub enum FormPhase {
    /// Editable, no outstanding message
    Idle,
    /// Save request in flight
    Submitting,
    /// Save succeeded; the page is about to reload
    Saved(String),
    /// Save failed; form stays editable
    Failed(String),
}

/// Loaded categories plus their editable amounts
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetForm {
    pub categories: Vec<Category>,
    pub amounts: EditableBudgetMap,
    pub phase: FormPhase,
}

impl BudgetForm {
    pub fn new(categories: Vec<Category>, budgets: &[BudgetEntry]) -> Self {
        let amounts = EditableBudgetMap::from_budgets(&categories, budgets);
        Self {
            categories,
            amounts,
            phase: FormPhase::Idle,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Apply a keystroke to one category.
    ///
    /// Returns `None` when the edit is dropped: the text is not a decimal
    /// numeral, the category is unknown, or a save is in flight.
    pub fn edit(&self, category: &str, raw: &str) -> Option<BudgetForm> {
        if self.is_submitting() || !self.categories.iter().any(|c| c == category) {
            return None;
        }
        let text = normalize(raw)?;
        Some(BudgetForm {
            categories: self.categories.clone(),
            amounts: self.amounts.with_amount(category, text),
            phase: FormPhase::Idle,
        })
    }

    /// One entry per category in display order; blank or invalid text becomes 0
    pub fn payload(&self) -> Vec<BudgetEntry> {
        self.categories
            .iter()
            .map(|category| BudgetEntry {
                category: category.clone(),
                amount: self.amounts.get(category).map(parse_amount).unwrap_or(0.0),
            })
            .collect()
    }

    /// Enter `Submitting`, clearing any previous message. `None` if already submitting.
    pub fn begin_submit(&self) -> Option<BudgetForm> {
        if self.is_submitting() {
            return None;
        }
        Some(self.with_phase(FormPhase::Submitting))
    }

    pub fn submit_succeeded(&self) -> BudgetForm {
        self.with_phase(FormPhase::Saved(SUBMIT_SUCCESS_MESSAGE.to_string()))
    }

    pub fn submit_failed(&self, error: &BudgetError) -> BudgetForm {
        self.with_phase(FormPhase::Failed(error.user_message()))
    }

    fn with_phase(&self, phase: FormPhase) -> BudgetForm {
        BudgetForm {
            categories: self.categories.clone(),
            amounts: self.amounts.clone(),
            phase,
        }
    }
}

/// Top-level view state of the editor
#[derive(Debug, Clone, PartialEq)]
pub enum EditorState {
    Loading,
    LoadError(String),
    Ready(BudgetForm),
}

impl Default for EditorState {
    fn default() -> Self {
        EditorState::Loading
    }
}

impl EditorState {
    /// Resolve the initial fetch into either a ready form or a load error
    pub fn loaded(result: Result<(Vec<Category>, Vec<BudgetEntry>), BudgetError>) -> Self {
        match result {
            Ok((categories, budgets)) => EditorState::Ready(BudgetForm::new(categories, &budgets)),
            Err(err) => EditorState::LoadError(err.user_message()),
        }
    }

    pub fn form(&self) -> Option<&BudgetForm> {
        match self {
            EditorState::Ready(form) => Some(form),
            _ => None,
        }
    }
}

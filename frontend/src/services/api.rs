use futures::future::try_join;
use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{BudgetEntry, BudgetError, Category, ErrorBody};
use thiserror::Error;

/// Errors produced while talking to the budget backend
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned {status}")]
    Status { status: u16, message: Option<String> },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("failed to serialize request: {0}")]
    Serialize(String),
}

impl ApiError {
    /// Map a read failure onto the editor's load error
    pub fn into_load_failure(self) -> BudgetError {
        BudgetError::LoadFailure(self.to_string())
    }

    /// Map a write failure onto the editor's submit error, keeping the server message
    pub fn into_submit_failure(self) -> BudgetError {
        match self {
            ApiError::Status { message, .. } => BudgetError::SubmitFailure(message),
            _ => BudgetError::SubmitFailure(None),
        }
    }
}

/// API client for the categories and budgets endpoints
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client that talks to the page's own origin
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    /// Create a client with a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    /// Ordered list of budget categories
    pub async fn get_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json(&self.url("categories")).await
    }

    /// Existing budget amounts
    pub async fn get_budgets(&self) -> Result<Vec<BudgetEntry>, ApiError> {
        self.get_json(&self.url("budgets")).await
    }

    /// Fetch categories and budgets concurrently; fails if either request fails
    pub async fn load_budget_data(&self) -> Result<(Vec<Category>, Vec<BudgetEntry>), ApiError> {
        try_join(self.get_categories(), self.get_budgets()).await
    }

    /// Replace the full set of budgets
    pub async fn submit_budgets(&self, budgets: &[BudgetEntry]) -> Result<(), ApiError> {
        let response = Request::post(&self.url("budgets"))
            .header("Content-Type", "application/json")
            .json(&budgets)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        let message = error_message(response).await;
        Err(ApiError::Status { status, message })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                message: None,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn error_message(response: Response) -> Option<String> {
    let text = response.text().await.ok()?;
    parse_error_message(&text)
}

/// Pull `message` out of an error body, ignoring bodies that are not JSON
pub fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{LOAD_ERROR_MESSAGE, SUBMIT_ERROR_MESSAGE};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_default_client_uses_same_origin() {
        let client = ApiClient::new();
        assert_eq!(client.url("categories"), "/api/categories");
        assert_eq!(client.url("budgets"), "/api/budgets");
    }

    #[wasm_bindgen_test]
    fn test_custom_base_url_trims_trailing_slash() {
        let client = ApiClient::with_base_url("http://localhost:3000/");
        assert_eq!(client.url("budgets"), "http://localhost:3000/api/budgets");
    }

    #[wasm_bindgen_test]
    fn test_parse_error_message() {
        assert_eq!(
            parse_error_message(r#"{"message":"Server busy"}"#).as_deref(),
            Some("Server busy")
        );
        assert_eq!(parse_error_message(r#"{"message":""}"#), None);
        assert_eq!(parse_error_message("{}"), None);
        assert_eq!(parse_error_message("<html>Bad Gateway</html>"), None);
    }

    #[wasm_bindgen_test]
    fn test_status_error_keeps_server_message() {
        let err = ApiError::Status {
            status: 503,
            message: Some("Server busy".to_string()),
        };
        assert_eq!(err.into_submit_failure().user_message(), "Server busy");
    }

    #[wasm_bindgen_test]
    fn test_network_error_uses_generic_messages() {
        let submit = ApiError::Network("connection refused".to_string()).into_submit_failure();
        assert_eq!(submit.user_message(), SUBMIT_ERROR_MESSAGE);

        let load = ApiError::Decode("expected array".to_string()).into_load_failure();
        assert_eq!(load.user_message(), LOAD_ERROR_MESSAGE);
    }
}

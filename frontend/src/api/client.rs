use reqwest::{Client, Response};

use crate::{api::types::*, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        let base = if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        };
        base.trim_end_matches('/').to_string()
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }
}

/// Turns a response from the reset API into its payload.
///
/// Failure statuses are still parsed: an `error` field in the body becomes a
/// [`ApiError::rejected`], anything else a [`ApiError::request_failed`].
pub(super) async fn read_reset_response(response: Response) -> Result<ResetResponse, ApiError> {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<ResetResponse>()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to parse response: {}", e)));
    }

    match response.json::<ResetResponse>().await {
        Ok(ResetResponse {
            error: Some(message),
            ..
        }) => Err(ApiError::rejected(message)),
        _ => Err(ApiError::request_failed(format!(
            "Request failed with status {}",
            status
        ))),
    }
}

use super::{
    client::{read_reset_response, ApiClient},
    types::{ApiError, ResetPasswordBody, ResetResponse},
};

impl ApiClient {
    pub async fn verify_token(&self, token: &str, id: &str) -> Result<ResetResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/verify-token", base_url))
            .query(&[("token", token), ("id", id)])
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        read_reset_response(response).await
    }

    pub async fn reset_password(
        &self,
        token: &str,
        id: &str,
        password: &str,
    ) -> Result<ResetResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let body = ResetPasswordBody {
            password: password.to_string(),
            id: Some(id.to_string()),
        };
        let response = self
            .http_client()
            .post(format!("{}/reset-password", base_url))
            .query(&[("token", token), ("id", id)])
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        read_reset_response(response).await
    }
}

use super::machine::{ResetRequest, SubmitPayload};
use crate::{
    api::{ApiClient, ApiError, ResetResponse},
    utils::cancel::CancellationToken,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct ResetPasswordRepository {
    client: Rc<ApiClient>,
}

impl ResetPasswordRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn verify_token(
        &self,
        request: &ResetRequest,
        cancel: &CancellationToken,
    ) -> Result<ResetResponse, ApiError> {
        cancel
            .run(self.client.verify_token(&request.token, &request.id))
            .await
            .unwrap_or_else(|_| Err(ApiError::cancelled()))
    }

    pub async fn reset_password(
        &self,
        payload: &SubmitPayload,
        cancel: &CancellationToken,
    ) -> Result<ResetResponse, ApiError> {
        let SubmitPayload { request, password } = payload;
        cancel
            .run(
                self.client
                    .reset_password(&request.token, &request.id, password),
            )
            .await
            .unwrap_or_else(|_| Err(ApiError::cancelled()))
    }
}

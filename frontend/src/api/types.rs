use serde::{Deserialize, Serialize};

/// Payload returned by both the verification and the update endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResetResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn rejected(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordBody {
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Failure of a reset API call; `code` is one of the associated constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    pub code: &'static str,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl ApiError {
    pub const REJECTED: &'static str = "REJECTED";
    pub const REQUEST_FAILED: &'static str = "REQUEST_FAILED";
    pub const CANCELLED: &'static str = "CANCELLED";

    fn with_code(msg: impl Into<String>, code: &'static str) -> Self {
        Self {
            error: msg.into(),
            code,
        }
    }

    /// The server answered with a failure status and an `error` payload.
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::with_code(msg, Self::REJECTED)
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, Self::REQUEST_FAILED)
    }

    pub fn cancelled() -> Self {
        Self::with_code("request cancelled", Self::CANCELLED)
    }

    pub fn is_cancelled(&self) -> bool {
        self.code == Self::CANCELLED
    }

    /// Message supplied by the server, if the failure carried one.
    pub fn server_message(&self) -> Option<&str> {
        (self.code == Self::REJECTED).then_some(self.error.as_str())
    }
}

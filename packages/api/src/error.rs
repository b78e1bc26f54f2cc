use serde_json::Value;
use store::{FormError, SignupError};
use thiserror::Error;

/// Failure of a single call to the corpus API.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response. `detail` is the server's explanation, if it gave one;
    /// `body` is the response body, pretty-printed when it is JSON.
    #[error("server responded with status {status}")]
    Status {
        status: u16,
        detail: Option<String>,
        body: String,
    },
    /// A 2xx body that does not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Build a `Status` error from a raw response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let json = serde_json::from_str::<Value>(body).ok();
        let detail = json.as_ref().and_then(detail_from_body);
        let body = json
            .and_then(|value| serde_json::to_string_pretty(&value).ok())
            .unwrap_or_else(|| body.to_string());
        ApiError::Status {
            status,
            detail,
            body,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// Text shown to the user: the server's detail when present, `offline`
    /// when the server was unreachable, `fallback` otherwise.
    pub fn user_message(&self, fallback: &str, offline: &str) -> String {
        match self {
            ApiError::Network(_) => offline.to_string(),
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// The `detail` field of an error body, else `message`. Empty strings and
/// nulls count as absent; objects and arrays are rendered as JSON.
pub fn detail_from_body(body: &Value) -> Option<String> {
    ["detail", "message"]
        .into_iter()
        .find_map(|key| match body.get(key)? {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        })
}

/// Failure of a flow driver: either a local validation rejected the input
/// before any request, or the request itself failed.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum FlowError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Signup(#[from] SignupError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("Request an OTP before verifying")]
    OtpNotRequested,
}

impl FlowError {
    pub fn user_message(&self, fallback: &str, offline: &str) -> String {
        match self {
            FlowError::Api(e) => e.user_message(fallback, offline),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_prefers_detail_over_message() {
        let body = json!({ "detail": "Invalid credentials", "message": "nope" });
        assert_eq!(detail_from_body(&body).as_deref(), Some("Invalid credentials"));

        let body = json!({ "detail": "", "message": "Phone not registered" });
        assert_eq!(detail_from_body(&body).as_deref(), Some("Phone not registered"));

        assert_eq!(detail_from_body(&json!({ "error": "x" })), None);
        assert_eq!(detail_from_body(&json!({ "detail": null })), None);
    }

    #[test]
    fn test_structured_detail_is_stringified() {
        let body = json!({ "detail": [{ "loc": ["body", "phone"], "msg": "field required" }] });
        let detail = detail_from_body(&body).unwrap();
        assert!(detail.starts_with('['));
        assert!(detail.contains("field required"));
    }

    #[test]
    fn test_user_message() {
        let err = ApiError::from_status(401, r#"{"detail":"Invalid credentials"}"#);
        assert_eq!(err.user_message("Login failed", "offline"), "Invalid credentials");

        let err = ApiError::from_status(500, "Internal Server Error");
        assert_eq!(err.user_message("Login failed", "offline"), "Login failed");
        if let ApiError::Status { body, .. } = &err {
            assert_eq!(body, "Internal Server Error");
        }

        let err = ApiError::Network("dns".to_string());
        assert_eq!(
            err.user_message("Login failed", "Error connecting to server"),
            "Error connecting to server"
        );
    }

    #[test]
    fn test_flow_error_messages() {
        let err = FlowError::from(SignupError::PasswordMismatch);
        assert_eq!(err.user_message("fallback", "offline"), "Passwords do not match.");

        let err = FlowError::from(ApiError::Decode("missing token".to_string()));
        assert_eq!(err.user_message("fallback", "offline"), "fallback");
    }
}

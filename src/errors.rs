//! Client-side failure types.
//!
//! Every transport or server failure the data manager can hit is converted
//! here, and `report` is the single place an error becomes the
//! human-readable string the UI layer stores and displays.

use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    /// Request never produced a response (connection refused, timeout, ...)
    Transport(String),
    /// Non-2xx response, with the body's `message` field when it had one
    Status { status: u16, message: Option<String> },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "{}", msg),
            ApiError::Status {
                message: Some(msg), ..
            } => write!(f, "{}", msg),
            ApiError::Status { status, .. } => {
                write!(f, "server returned status {}", status)
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

/// Turn a non-2xx response into an [`ApiError`], preferring a structured
/// `{"message": "..."}` body over the bare status code.
pub async fn status_error(resp: reqwest::Response) -> ApiError {
    let status = resp.status().as_u16();
    let message = match resp.text().await {
        Ok(body) => serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from)),
        Err(_) => None,
    };

    ApiError::Status { status, message }
}

/// Log a failed operation and produce the string stored in the manager's
/// error slot. Infallible: the caller never has to handle a reporting error.
pub fn report(operation: &str, err: &ApiError) -> String {
    let message = err.to_string();
    tracing::error!("{} failed: {}", operation, message);
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_without_message_falls_back_to_code() {
        let err = ApiError::Status {
            status: 503,
            message: None,
        };
        assert_eq!(err.to_string(), "server returned status 503");
    }

    #[test]
    fn status_with_message_uses_it() {
        let err = ApiError::Status {
            status: 500,
            message: Some("database unavailable".to_string()),
        };
        assert_eq!(err.to_string(), "database unavailable");
    }

    #[test]
    fn report_returns_the_display_string() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(report("fetch books", &err), "connection refused");
    }
}

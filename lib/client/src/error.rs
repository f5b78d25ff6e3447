//! Error types for the API client.
//!
//! Errors are designed for layered context using rootcause:
//! - `ApiError`: request transport, rejection, and decoding failures
//!
//! The taxonomy separates "the server said no" from "something broke",
//! because views display the former verbatim and the latter generically.

use serde_json::Value;
use std::fmt;

/// Errors from REST API calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never reached the server or the connection failed.
    Network { reason: String },
    /// The server answered with a non-success status and no usable message.
    Status { status: u16 },
    /// The server rejected the request with a structured message.
    Rejected { status: u16, message: String },
    /// The response body did not decode as the expected shape.
    Decode { reason: String },
}

impl ApiError {
    /// Builds the error for a non-success response.
    ///
    /// Extracts the server's message from a DRF-style JSON body when one
    /// is present: `{"detail": "..."}`, `{"non_field_errors": ["..."]}`,
    /// or per-field errors like `{"email": ["..."]}`. Anything else
    /// falls back to a bare status error.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let Ok(value) = serde_json::from_str::<Value>(body) else {
            return Self::Status { status };
        };

        if let Some(detail) = value.get("detail").and_then(Value::as_str) {
            return Self::Rejected {
                status,
                message: detail.to_string(),
            };
        }

        if let Some(message) = value
            .get("non_field_errors")
            .and_then(Value::as_array)
            .and_then(|errors| errors.first())
            .and_then(Value::as_str)
        {
            return Self::Rejected {
                status,
                message: message.to_string(),
            };
        }

        if let Some(fields) = value.as_object() {
            for (field, errors) in fields {
                let message = errors
                    .as_array()
                    .and_then(|list| list.first())
                    .and_then(Value::as_str)
                    .or_else(|| errors.as_str());
                if let Some(message) = message {
                    return Self::Rejected {
                        status,
                        message: format!("{field}: {message}"),
                    };
                }
            }
        }

        Self::Status { status }
    }

    /// Returns the message a view should show the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network { .. } => {
                "Could not reach the server. Check your connection.".to_string()
            }
            Self::Status { status } => format!("Request failed (HTTP {status})"),
            Self::Rejected { message, .. } => message.clone(),
            Self::Decode { .. } => "Unexpected response from the server.".to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network { reason } => {
                write!(f, "network error: {reason}")
            }
            Self::Status { status } => {
                write!(f, "server returned HTTP {status}")
            }
            Self::Rejected { status, message } => {
                write!(f, "server rejected request (HTTP {status}): {message}")
            }
            Self::Decode { reason } => {
                write!(f, "failed to decode response: {reason}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_response_reads_detail_field() {
        let err = ApiError::from_response(
            401,
            r#"{"detail": "Authentication credentials were not provided."}"#,
        );
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 401,
                message: "Authentication credentials were not provided.".to_string(),
            }
        );
    }

    #[test]
    fn from_response_reads_non_field_errors() {
        let err = ApiError::from_response(400, r#"{"non_field_errors": ["Invalid credentials"]}"#);
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 400,
                message: "Invalid credentials".to_string(),
            }
        );
    }

    #[test]
    fn from_response_reads_field_errors() {
        let err =
            ApiError::from_response(400, r#"{"email": ["user with this email already exists."]}"#);
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 400,
                message: "email: user with this email already exists.".to_string(),
            }
        );
    }

    #[test]
    fn from_response_falls_back_on_plain_text() {
        let err = ApiError::from_response(502, "Bad Gateway");
        assert_eq!(err, ApiError::Status { status: 502 });
    }

    #[test]
    fn from_response_falls_back_on_empty_body() {
        let err = ApiError::from_response(500, "");
        assert_eq!(err, ApiError::Status { status: 500 });
    }

    #[test]
    fn user_message_shows_rejection_verbatim() {
        let err = ApiError::Rejected {
            status: 400,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.user_message(), "Invalid credentials");
    }

    #[test]
    fn user_message_is_generic_for_network_errors() {
        let err = ApiError::Network {
            reason: "dns failure".to_string(),
        };
        assert!(!err.user_message().contains("dns"));
    }

    #[test]
    fn display_includes_status() {
        let err = ApiError::Status { status: 503 };
        assert!(err.to_string().contains("503"));
    }
}

//! API error taxonomy.
//!
//! Absence of a session is never an error; these cover explicit request
//! failures only. `Unauthorized` is special-cased so callers can route it
//! through the forced session invalidation path.

use std::collections::BTreeMap;

use super::types::ApiErrorBody;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// 401 on any authenticated request. The session is no longer valid.
    #[error("session is no longer valid")]
    Unauthorized,

    /// Any other non-2xx response, with the server's message and optional
    /// field-level validation errors.
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        fields: BTreeMap<String, String>,
    },

    /// Request never produced a response (offline, DNS, CORS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// 2xx response whose body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Build the non-401 error for a failed response.
    pub fn from_status(status: u16, body: ApiErrorBody) -> Self {
        let message = body
            .message
            .unwrap_or_else(|| format!("request failed with status {status}"));
        ApiError::Api {
            status,
            message,
            fields: body.errors.unwrap_or_default(),
        }
    }

    /// Message suitable for a toast.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Your session has expired. Please sign in again.".to_owned(),
            ApiError::Api { message, .. } => message.clone(),
            ApiError::Network(_) => "Could not reach the server. Check your connection.".to_owned(),
            ApiError::Decode(_) => "Unexpected response from the server.".to_owned(),
        }
    }
}

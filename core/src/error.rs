//! Error types for the items API client.
//!
//! # Design
//! Every non-2xx response becomes `RequestFailed`, whatever the status. The
//! status and body are kept on the error so callers can classify it, but the
//! client never branches on them. Transport failures are a separate variant
//! because no status exists for them.

use std::fmt;

use thiserror::Error;

/// Result alias for client operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// The logical operation an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Static failure message for this operation.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::List => "Failed to fetch items",
            Operation::Get => "Failed to fetch item",
            Operation::Create => "Failed to create item",
            Operation::Update => "Failed to update item",
            Operation::Delete => "Failed to delete item",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}

/// Errors returned by `ItemClient` and `ItemApi`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{operation} (HTTP {status})")]
    RequestFailed {
        operation: Operation,
        status: u16,
        body: String,
    },

    /// No response was received.
    #[error("{operation}: {message}")]
    Transport { operation: Operation, message: String },

    /// A 2xx body could not be decoded into the expected type.
    #[error("{operation}: deserialization failed: {message}")]
    Deserialization { operation: Operation, message: String },

    /// The request payload could not be encoded as JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The client configuration is invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Operation that produced this error, if any.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::RequestFailed { operation, .. }
            | Self::Transport { operation, .. }
            | Self::Deserialization { operation, .. } => Some(*operation),
            Self::Serialization(_) | Self::Config(_) => None,
        }
    }

    /// HTTP status for `RequestFailed`.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_request_failed(&self) -> bool {
        matches!(self, Self::RequestFailed { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// 4xx
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(s) if (400..500).contains(&s))
    }

    /// 5xx
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(s) if s >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(operation: Operation, status: u16) -> ApiError {
        ApiError::RequestFailed {
            operation,
            status,
            body: String::new(),
        }
    }

    #[test]
    fn display_leads_with_operation_message() {
        assert_eq!(
            failed(Operation::List, 500).to_string(),
            "Failed to fetch items (HTTP 500)"
        );
        assert_eq!(
            failed(Operation::Create, 422).to_string(),
            "Failed to create item (HTTP 422)"
        );
        let err = ApiError::Transport {
            operation: Operation::Delete,
            message: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to delete item: connection refused");
    }

    #[test]
    fn status_classification() {
        let not_found = failed(Operation::Update, 404);
        assert!(not_found.is_not_found());
        assert!(not_found.is_client_error());
        assert!(!not_found.is_server_error());

        let server = failed(Operation::Get, 503);
        assert!(server.is_server_error());
        assert!(!server.is_client_error());
        assert_eq!(server.operation(), Some(Operation::Get));
    }

    #[test]
    fn transport_has_no_status() {
        let err = ApiError::Transport {
            operation: Operation::List,
            message: "timed out".to_string(),
        };
        assert!(err.is_transport());
        assert!(!err.is_request_failed());
        assert_eq!(err.status(), None);
        assert!(!err.is_client_error());
    }
}

use axum::http::StatusCode;
use thiserror::Error;

/// Failures rendered by the hosting layer. The status route itself never fails.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    MethodNotAllowed(String),
    /// Any other 4xx the router or an extractor produced.
    #[error("{message}")]
    Client { status: StatusCode, message: String },
    #[error("{message}")]
    Server { status: StatusCode, message: String },
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Server {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    /// Classifies an error status. Non-error statuses are treated as 500.
    pub fn from_status(status: StatusCode, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            StatusCode::NOT_FOUND => Self::NotFound(message),
            StatusCode::METHOD_NOT_ALLOWED => Self::MethodNotAllowed(message),
            _ if status.is_client_error() => Self::Client { status, message },
            _ if status.is_server_error() => Self::Server { status, message },
            _ => Self::internal(message),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(message)
            | Self::MethodNotAllowed(message)
            | Self::Client { message, .. }
            | Self::Server { message, .. } => message.as_str(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Client { status, .. } | Self::Server { status, .. } => *status,
        }
    }
}

use axum::{Json, Router, routing::get};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub message: &'static str,
}

/// Body served on every `GET /`.
pub const API_OK: StatusMessage = StatusMessage { message: "API OK" };

pub fn router() -> Router {
    Router::new().route("/", get(handler))
}

async fn handler() -> Json<StatusMessage> {
    Json(API_OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_ok_serializes_to_fixed_bytes() {
        let body = serde_json::to_string(&API_OK).expect("serialize");
        assert_eq!(body, r#"{"message":"API OK"}"#);
    }
}

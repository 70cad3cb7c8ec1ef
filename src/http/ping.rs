//! Liveness-check handlers.

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Body returned by `GET /ping`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingResponse {
    pub message: String,
}

impl PingResponse {
    pub fn pong() -> Self {
        Self {
            message: "pong".to_string(),
        }
    }
}

/// Any method on `/ping`. Only `GET` gets the pong; HEAD included, every
/// other method is a bare `404` with no `Allow` header.
pub async fn ping(method: Method) -> Response {
    if method == Method::GET {
        Json(PingResponse::pong()).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

/// Every path other than `/ping`: `404` with an empty body.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[tokio::test]
    async fn test_get_returns_pong() {
        let response = ping(Method::GET).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_non_get_is_bare_404() {
        for method in [Method::HEAD, Method::POST, Method::OPTIONS] {
            let response = ping(method.clone()).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", method);
            assert!(response.headers().is_empty(), "{}", method);
        }
    }

    #[test]
    fn test_pong_serializes_to_single_key() {
        let value = serde_json::to_value(PingResponse::pong()).unwrap();
        assert_eq!(value, serde_json::json!({ "message": "pong" }));
    }

    #[tokio::test]
    async fn test_not_found_status() {
        assert_eq!(not_found().await, StatusCode::NOT_FOUND);
    }
}

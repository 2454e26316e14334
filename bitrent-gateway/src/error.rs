//! HTTP mapping of gateway failures

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use stacks_rpc::RpcError;
use tracing::error;

/// Uniform error envelope
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors a route can end in
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Rpc(#[from] RpcError),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

fn envelope(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(message) => envelope(StatusCode::BAD_REQUEST, message),
            ApiError::Rpc(err @ RpcError::MalformedHex(_)) => envelope(StatusCode::BAD_REQUEST, err.to_string()),
            // Forwarded as-is so clients can parse the node's own error format
            ApiError::Rpc(RpcError::Upstream { status, body, content_type }) => {
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                let content_type = content_type
                    .and_then(|ct| HeaderValue::from_str(&ct).ok())
                    .unwrap_or_else(|| HeaderValue::from_static("text/plain; charset=utf-8"));
                (status, [(header::CONTENT_TYPE, content_type)], body).into_response()
            }
            ApiError::Rpc(err) => {
                error!("upstream failure: {}", err);
                envelope(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_is_bad_request() {
        let response = ApiError::Validation("rawTx (hex string) is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_status_forwarded() {
        let response = ApiError::Rpc(RpcError::Upstream {
            status: 404,
            body: b"NoSuchContract".to_vec(),
            content_type: None,
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/plain; charset=utf-8");
    }

    #[test]
    fn test_upstream_content_type_forwarded() {
        let response = ApiError::Rpc(RpcError::Upstream {
            status: 400,
            body: br#"{"error":"transaction rejected"}"#.to_vec(),
            content_type: Some("application/json".to_string()),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_invalid_upstream_status_is_bad_gateway() {
        let response = ApiError::Rpc(RpcError::Upstream {
            status: 42,
            body: Vec::new(),
            content_type: None,
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_other_failures_are_internal() {
        let response = ApiError::Rpc(RpcError::Timeout).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ApiError::Rpc(RpcError::Codec("bad".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

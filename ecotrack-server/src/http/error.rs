//! API error type with IntoResponse
//!
//! Every failure surfaces as `{success: false, message}`. Store and decoding
//! failures are passed through verbatim with status 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::responses::Ack;
use crate::db::repos::DbError;

/// Message returned for a failed login
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Username/password did not match (401)
    InvalidCredentials,

    /// Query failed (500, raw message)
    Database(DbError),

    /// Body or path could not be decoded (500, raw message)
    Rejection { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Database(_) | Self::Rejection { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::InvalidCredentials => INVALID_CREDENTIALS.to_owned(),
            Self::Database(e) => e.to_string(),
            Self::Rejection { message } => message.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!("SERVER ERROR: {}", message);
        }

        (status, Json(Ack::failure(message))).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn invalid_credentials_is_401() {
        let response = ApiError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "success": false, "message": "Invalid credentials" })
        );
    }

    #[tokio::test]
    async fn database_error_is_500_with_raw_message() {
        let err = ApiError::from(DbError::Sqlx(sqlx::Error::RowNotFound));
        let expected = sqlx::Error::RowNotFound.to_string();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], expected);
    }

    #[tokio::test]
    async fn rejection_is_500() {
        let err = ApiError::Rejection {
            message: "bad body".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["message"], "bad body");
    }
}

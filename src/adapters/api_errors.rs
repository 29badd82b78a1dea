use crate::domain::error::SubscriptionError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Newtype over the domain error so axum can render it.
#[derive(Debug)]
pub struct ApiError(pub SubscriptionError);

impl From<SubscriptionError> for ApiError {
    fn from(err: SubscriptionError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(SubscriptionError::Validation(rejection.body_text()))
    }
}

// Every failure is a 400 with the same envelope; the step only shows up in logs.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            SubscriptionError::Validation(msg) => {
                tracing::warn!(error = %msg, "rejected request");
            }
            SubscriptionError::Provider { step, source } => {
                tracing::warn!(
                    %step,
                    provider_status = ?source.http_status,
                    error = %source,
                    "provider call failed"
                );
            }
        }

        let body = serde_json::json!({
            "error": { "message": self.0.to_string() },
        });

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

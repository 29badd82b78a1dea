use {
    crate::{
        AppState,
        adapters::api_errors::ApiError,
        domain::subscription::CreateSubscriptionRequest,
        services::subscription_flow,
    },
    axum::{
        Json,
        extract::{State, rejection::JsonRejection},
    },
};

#[tracing::instrument(
    name = "create_subscription",
    skip_all,
    fields(request_id = %uuid::Uuid::now_v7(), customer_id = tracing::field::Empty)
)]
pub async fn create_subscription_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateSubscriptionRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(payload) = payload?;
    let request = payload.validate()?;

    tracing::Span::current().record("customer_id", tracing::field::display(&request.customer));

    let subscription =
        subscription_flow::create_subscription(&*state.provider, &state.price_id, &request).await?;

    Ok(Json(subscription))
}

pub async fn health() -> &'static str {
    "ok"
}

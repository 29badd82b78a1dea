#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use std::sync::{Arc, Mutex};
use sub_gateway::AppState;
use sub_gateway::domain::error::ProviderError;
use sub_gateway::domain::id::{CustomerId, PaymentMethodId, PriceId};
use sub_gateway::domain::provider::{ProviderFuture, SubscriptionProvider};
use tower::ServiceExt;

pub const PRICE_ID: &str = "price_test_monthly";

/// One recorded provider call, with the identifiers it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Attach { payment_method: String, customer: String },
    SetDefault { customer: String, payment_method: String },
    Create { customer: String, price: String },
}

/// In-memory provider that records every call. Each step succeeds unless a failure
/// message was configured for it.
#[derive(Default)]
pub struct FakeProvider {
    pub calls: Mutex<Vec<Call>>,
    pub fail_attach: Option<String>,
    pub fail_set_default: Option<String>,
    pub fail_create: Option<String>,
    /// Returned by `create_subscription`. When unset, a fresh `sub_<n>` object is minted per call.
    pub subscription: Option<serde_json::Value>,
}

impl FakeProvider {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> usize {
        let mut calls = self.calls.lock().unwrap();
        calls.push(call);
        calls.len()
    }
}

fn outcome(failure: &Option<String>) -> Result<(), ProviderError> {
    match failure {
        Some(msg) => Err(ProviderError::new(msg.clone()).with_status(400)),
        None => Ok(()),
    }
}

impl SubscriptionProvider for FakeProvider {
    fn attach_payment_method<'a>(
        &'a self,
        payment_method: &'a PaymentMethodId,
        customer: &'a CustomerId,
    ) -> ProviderFuture<'a, ()> {
        self.record(Call::Attach {
            payment_method: payment_method.to_string(),
            customer: customer.to_string(),
        });
        Box::pin(async move { outcome(&self.fail_attach) })
    }

    fn set_default_payment_method<'a>(
        &'a self,
        customer: &'a CustomerId,
        payment_method: &'a PaymentMethodId,
    ) -> ProviderFuture<'a, ()> {
        self.record(Call::SetDefault {
            customer: customer.to_string(),
            payment_method: payment_method.to_string(),
        });
        Box::pin(async move { outcome(&self.fail_set_default) })
    }

    fn create_subscription<'a>(
        &'a self,
        customer: &'a CustomerId,
        price: &'a PriceId,
    ) -> ProviderFuture<'a, serde_json::Value> {
        let n = self.record(Call::Create {
            customer: customer.to_string(),
            price: price.to_string(),
        });
        Box::pin(async move {
            outcome(&self.fail_create)?;
            Ok(self.subscription.clone().unwrap_or_else(|| {
                serde_json::json!({"id": format!("sub_{n}"), "status": "active"})
            }))
        })
    }
}

pub fn static_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/static")
}

pub fn test_app(provider: Arc<FakeProvider>) -> Router {
    let state = AppState {
        provider,
        price_id: PriceId::new(PRICE_ID).unwrap(),
    };
    sub_gateway::app(state, static_dir())
}

/// POST a raw JSON body to `/create-subscription`, returning status and parsed body.
pub async fn post_raw(app: Router, body: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/create-subscription")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub async fn post_subscription(
    app: Router,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    post_raw(app, &body.to_string()).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

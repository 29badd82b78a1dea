use {
    crate::domain::{
        error::SubscriptionError,
        id::PriceId,
        provider::SubscriptionProvider,
        subscription::{SubscriptionStep, ValidatedRequest},
    },
    tracing::info,
};

/// Attach the payment method, make it the customer's default, then subscribe the
/// customer to `price`. Steps run strictly in order and the first failure aborts the
/// rest. Completed steps are not undone: a failure in step 3 leaves the payment
/// method attached and set as default.
pub async fn create_subscription(
    provider: &dyn SubscriptionProvider,
    price: &PriceId,
    request: &ValidatedRequest,
) -> Result<serde_json::Value, SubscriptionError> {
    let ValidatedRequest {
        payment_method,
        customer,
    } = request;

    provider
        .attach_payment_method(payment_method, customer)
        .await
        .map_err(|source| SubscriptionError::Provider {
            step: SubscriptionStep::AttachPaymentMethod,
            source,
        })?;
    info!(%payment_method, "payment method attached");

    provider
        .set_default_payment_method(customer, payment_method)
        .await
        .map_err(|source| SubscriptionError::Provider {
            step: SubscriptionStep::SetDefaultPaymentMethod,
            source,
        })?;
    info!(%payment_method, "default payment method set");

    let subscription = provider
        .create_subscription(customer, price)
        .await
        .map_err(|source| SubscriptionError::Provider {
            step: SubscriptionStep::CreateSubscription,
            source,
        })?;
    info!(
        subscription_id = subscription.get("id").and_then(|v| v.as_str()).unwrap_or("unknown"),
        %price,
        "subscription created"
    );

    Ok(subscription)
}

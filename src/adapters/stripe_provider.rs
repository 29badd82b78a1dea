use {
    crate::domain::{
        error::ProviderError,
        id::{CustomerId, PaymentMethodId, PriceId},
        provider::{ProviderFuture, SubscriptionProvider},
    },
    serde::Serialize,
};

/// [`SubscriptionProvider`] backed by the Stripe API. Built once at startup; the
/// underlying client pools its connections.
///
/// Requests go through the untyped form endpoints: ids reach Stripe exactly as the
/// caller sent them, and the subscription comes back as Stripe's raw JSON.
pub struct StripeProvider {
    client: stripe::Client,
}

impl StripeProvider {
    pub fn new(secret_key: &str) -> Self {
        Self::with_client(stripe::Client::new(secret_key))
    }

    pub fn with_client(client: stripe::Client) -> Self {
        Self { client }
    }
}

#[derive(Serialize)]
struct AttachForm<'a> {
    customer: &'a str,
}

#[derive(Serialize)]
struct UpdateCustomerForm<'a> {
    invoice_settings: InvoiceSettingsForm<'a>,
}

#[derive(Serialize)]
struct InvoiceSettingsForm<'a> {
    default_payment_method: &'a str,
}

#[derive(Serialize)]
struct CreateSubscriptionForm<'a> {
    customer: &'a str,
    items: [SubscriptionItemForm<'a>; 1],
}

#[derive(Serialize)]
struct SubscriptionItemForm<'a> {
    price: &'a str,
}

impl SubscriptionProvider for StripeProvider {
    fn attach_payment_method<'a>(
        &'a self,
        payment_method: &'a PaymentMethodId,
        customer: &'a CustomerId,
    ) -> ProviderFuture<'a, ()> {
        Box::pin(async move {
            let path = format!(
                "/payment_methods/{}/attach",
                urlencoding::encode(payment_method.as_str())
            );
            self.client
                .post_form::<serde_json::Value, _>(
                    &path,
                    AttachForm {
                        customer: customer.as_str(),
                    },
                )
                .await
                .map_err(map_stripe_error)?;
            Ok(())
        })
    }

    fn set_default_payment_method<'a>(
        &'a self,
        customer: &'a CustomerId,
        payment_method: &'a PaymentMethodId,
    ) -> ProviderFuture<'a, ()> {
        Box::pin(async move {
            let path = format!("/customers/{}", urlencoding::encode(customer.as_str()));
            self.client
                .post_form::<serde_json::Value, _>(
                    &path,
                    UpdateCustomerForm {
                        invoice_settings: InvoiceSettingsForm {
                            default_payment_method: payment_method.as_str(),
                        },
                    },
                )
                .await
                .map_err(map_stripe_error)?;
            Ok(())
        })
    }

    fn create_subscription<'a>(
        &'a self,
        customer: &'a CustomerId,
        price: &'a PriceId,
    ) -> ProviderFuture<'a, serde_json::Value> {
        Box::pin(async move {
            self.client
                .post_form::<serde_json::Value, _>(
                    "/subscriptions",
                    CreateSubscriptionForm {
                        customer: customer.as_str(),
                        items: [SubscriptionItemForm {
                            price: price.as_str(),
                        }],
                    },
                )
                .await
                .map_err(map_stripe_error)
        })
    }
}

/// API errors keep Stripe's own message; anything else reports the client error text.
pub fn map_stripe_error(error: stripe::StripeError) -> ProviderError {
    match error {
        stripe::StripeError::Stripe(request_error) => ProviderError::new(
            request_error
                .message
                .unwrap_or_else(|| "Unknown error".to_string()),
        )
        .with_status(request_error.http_status),
        other => ProviderError::new(other.to_string()),
    }
}

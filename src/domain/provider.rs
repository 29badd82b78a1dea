use {
    super::error::ProviderError,
    super::id::{CustomerId, PaymentMethodId, PriceId},
    std::{future::Future, pin::Pin},
};

pub type ProviderFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ProviderError>> + Send + 'a>>;

/// The three remote operations a subscription signup needs.
pub trait SubscriptionProvider: Send + Sync {
    fn attach_payment_method<'a>(
        &'a self,
        payment_method: &'a PaymentMethodId,
        customer: &'a CustomerId,
    ) -> ProviderFuture<'a, ()>;

    /// Makes the payment method the customer's default for invoices.
    fn set_default_payment_method<'a>(
        &'a self,
        customer: &'a CustomerId,
        payment_method: &'a PaymentMethodId,
    ) -> ProviderFuture<'a, ()>;

    /// Returns the provider's subscription object as-is.
    fn create_subscription<'a>(
        &'a self,
        customer: &'a CustomerId,
        price: &'a PriceId,
    ) -> ProviderFuture<'a, serde_json::Value>;
}

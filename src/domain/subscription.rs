use {
    super::{
        error::SubscriptionError,
        id::{CustomerId, PaymentMethodId},
    },
    derive_more::Display,
    serde::Deserialize,
};

/// Body of `POST /create-subscription`. Fields default to empty so that a missing
/// field and a blank one are rejected the same way by [`CreateSubscriptionRequest::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionRequest {
    #[serde(default)]
    pub payment_method_id: String,
    #[serde(default)]
    pub customer_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub payment_method: PaymentMethodId,
    pub customer: CustomerId,
}

impl CreateSubscriptionRequest {
    pub fn validate(self) -> Result<ValidatedRequest, SubscriptionError> {
        Ok(ValidatedRequest {
            payment_method: PaymentMethodId::new(self.payment_method_id)?,
            customer: CustomerId::new(self.customer_id)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SubscriptionStep {
    #[display("attach_payment_method")]
    AttachPaymentMethod,
    #[display("set_default_payment_method")]
    SetDefaultPaymentMethod,
    #[display("create_subscription")]
    CreateSubscription,
}

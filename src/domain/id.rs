use derive_more::Display;

use super::error::SubscriptionError;

fn non_blank(id: String, what: &str) -> Result<String, SubscriptionError> {
    if id.trim().is_empty() {
        return Err(SubscriptionError::Validation(format!("missing {what}")));
    }
    Ok(id)
}

/// Payment method identifier (`pm_xxx`, or a legacy card/source id).
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct PaymentMethodId(String);

impl PaymentMethodId {
    pub fn new(id: impl Into<String>) -> Result<Self, SubscriptionError> {
        non_blank(id.into(), "paymentMethodId").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Customer identifier (`cus_xxx`).
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn new(id: impl Into<String>) -> Result<Self, SubscriptionError> {
        non_blank(id.into(), "customerId").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Price identifier (`price_xxx`). Comes from process configuration, never from a request.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct PriceId(String);

impl PriceId {
    pub fn new(id: impl Into<String>) -> Result<Self, SubscriptionError> {
        non_blank(id.into(), "price id").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

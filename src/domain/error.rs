use {super::subscription::SubscriptionStep, thiserror::Error};

#[derive(Debug, Error)]
pub enum SubscriptionError {
    #[error("{0}")]
    Validation(String),

    /// Display is the provider's message, verbatim.
    #[error("{source}")]
    Provider {
        step: SubscriptionStep,
        #[source]
        source: ProviderError,
    },
}

/// Failure reported by the payment provider, or by the transport in front of it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ProviderError {
    pub message: String,
    pub http_status: Option<u16>,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            http_status: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

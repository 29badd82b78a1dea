use {
    crate::domain::{error::ConfigError, id::PriceId},
    std::{env, net::SocketAddr, path::PathBuf},
};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Clone)]
pub struct Config {
    pub stripe_secret_key: String,
    pub price_id: PriceId,
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
}

// Keeps the secret key out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("stripe_secret_key", &"<redacted>")
            .field("price_id", &self.price_id)
            .field("bind_addr", &self.bind_addr)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let stripe_secret_key =
            get("STRIPE_SECRET_KEY").ok_or(ConfigError::Missing("STRIPE_SECRET_KEY"))?;
        let price_id = get("STRIPE_PRICE_ID")
            .ok_or(ConfigError::Missing("STRIPE_PRICE_ID"))
            .and_then(|id| {
                PriceId::new(id).map_err(|e| ConfigError::Invalid {
                    name: "STRIPE_PRICE_ID",
                    reason: e.to_string(),
                })
            })?;

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let static_dir = get("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            stripe_secret_key,
            price_id,
            bind_addr,
            static_dir,
        })
    }
}

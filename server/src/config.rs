//! Configuration management for the server.

use std::env;

/// Admin key used when `ADMIN_KEY` is not set.
pub const DEFAULT_ADMIN_KEY: &str = "secret123";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Key required by admin-only endpoints; `None` leaves them open
    pub admin_key: Option<String>,
    /// Whether the product catalog starts with the demo products
    pub seed_products: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            admin_key: Some(DEFAULT_ADMIN_KEY.to_string()),
            seed_products: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 3000,
        };

        // An explicitly empty ADMIN_KEY disables the check
        let admin_key = match lookup("ADMIN_KEY") {
            Some(key) if key.is_empty() => None,
            Some(key) => Some(key),
            None => Some(DEFAULT_ADMIN_KEY.to_string()),
        };

        let seed_products = match lookup("SEED_PRODUCTS") {
            Some(raw) => parse_bool("SEED_PRODUCTS", &raw)?,
            None => true,
        };

        Ok(Self {
            host,
            port,
            admin_key,
            seed_products,
        })
    }

    /// `host:port` for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: raw.to_string(),
        }),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),

    #[error("Invalid boolean for {var}: {value}")]
    InvalidBool { var: &'static str, value: String },
}

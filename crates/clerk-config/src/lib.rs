//! # clerk-config
//!
//! Environment-driven configuration for the Clerk admin tools using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CLERK_SECRET_KEY`, `CLERK_API_URL`)
//! 2. Built-in defaults
//!
//! There is no config file. [`ClerkConfig::load_with_dotenv`] additionally
//! reads a `.env` file from the current directory into the process
//! environment before the figment is built; variables that are already set
//! are not overridden.
//!
//! # Usage
//!
//! ```no_run
//! use clerk_config::ClerkConfig;
//!
//! let config = ClerkConfig::load_with_dotenv().expect("config");
//! if !config.is_configured() {
//!     eprintln!("CLERK_SECRET_KEY is not set");
//! }
//! ```

mod error;

pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Base URL of the Clerk Backend API.
pub const DEFAULT_API_URL: &str = "https://api.clerk.com/v1";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClerkConfig {
    /// Clerk secret key (`sk_...`). Empty when not configured.
    #[serde(default)]
    pub secret_key: String,

    /// Backend API base URL, without a trailing slash.
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for ClerkConfig {
    fn default() -> Self {
        Self {
            secret_key: String::new(),
            api_url: default_api_url(),
        }
    }
}

impl ClerkConfig {
    /// Load configuration from defaults and environment variables.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if extraction fails, or
    /// [`ConfigError::InvalidValue`] if `api_url` is not an http(s) URL.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config: Self = Self::figment().extract()?;
        config.api_url = config.api_url.trim().to_string();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is the common case.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Env::prefixed("CLERK_").only(&["secret_key", "api_url"]))
    }

    /// Whether a non-blank secret key is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.secret_key.trim().is_empty()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api_url.as_str();
        if url.starts_with("https://") || url.starts_with("http://") {
            return Ok(());
        }
        Err(ConfigError::InvalidValue {
            field: "api_url".to_string(),
            reason: format!("expected an http(s) URL, got '{}'", self.api_url),
        })
    }
}

//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `UPLIFT_BASKET_FILE` - Path of the basket storage file
//!   (default: `uplift-basket.json` in the working directory)

use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, String),
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Basket storage file (the durable key-value namespace).
    pub basket_file: PathBuf,
}

impl CliConfig {
    /// Storage file used when `UPLIFT_BASKET_FILE` is unset.
    pub const DEFAULT_BASKET_FILE: &'static str = "uplift-basket.json";

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `UPLIFT_BASKET_FILE` is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let basket_file = match std::env::var("UPLIFT_BASKET_FILE") {
            Ok(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    "UPLIFT_BASKET_FILE",
                    "path is empty".to_owned(),
                ));
            }
            Ok(value) => PathBuf::from(value),
            Err(_) => PathBuf::from(Self::DEFAULT_BASKET_FILE),
        };

        Ok(Self { basket_file })
    }
}

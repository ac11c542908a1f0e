//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! and an optional config file using the `config` and `dotenvy` crates. Environment
//! variables use the `NEGOTIATION_ANALYTICS` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use negotiation_analytics::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Grid resolution: {}", config.engine.grid_resolution);
//! ```

mod engine;
mod error;
mod logging;
mod worker;

pub use engine::{EngineConfig, MAX_COMBINATION_CAP, MAX_GRID_RESOLUTION};
pub use error::{ConfigError, ValidationError};
pub use logging::{Environment, LoggingConfig};
pub use worker::{WorkerConfig, MAX_CONCURRENT_JOBS_LIMIT};

use serde::Deserialize;
use std::path::Path;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "NEGOTIATION_ANALYTICS";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    /// Analytics engine tuning (grid, caps, thresholds)
    #[serde(default)]
    pub engine: EngineConfig,

    /// Logging configuration (environment, filter, format)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Job worker configuration
    #[serde(default)]
    pub worker: WorkerConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `NEGOTIATION_ANALYTICS__ENGINE__GRID_RESOLUTION=21` -> `engine.grid_resolution = 21`
    /// - `NEGOTIATION_ANALYTICS__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from an optional file, then environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads the config file, if given (format inferred from extension)
    /// 3. Overlays environment variables with the `NEGOTIATION_ANALYTICS` prefix
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or values cannot be parsed
    pub fn load_from(file: Option<&Path>) -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.logging.validate()?;
        self.worker.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.logging.is_production()
    }
}

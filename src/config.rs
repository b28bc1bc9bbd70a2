use std::env;

use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Default address the HTTP server binds to when `ADDRESS` is not set.
const DEFAULT_ADDRESS: &str = "127.0.0.1";

/// Default port the HTTP server binds to when `PORT` is not set.
const DEFAULT_PORT: u16 = 8080;

/// Errors raised while assembling the application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is absent.
    #[error("environment variable `{0}` is not set")]
    Missing(&'static str),
    /// A numeric environment variable holds a non-numeric value.
    #[error("environment variable `{name}` must be a valid integer, got `{value}`")]
    InvalidNumber { name: &'static str, value: String },
    /// Field-level validation failures.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationErrors),
}

/// Application configuration resolved from the process environment.
#[derive(Debug, Clone, Validate)]
pub struct AppConfig {
    /// Location of the warehouse database.
    #[validate(length(min = 1))]
    pub database_url: String,
    /// Address the HTTP server binds to.
    #[validate(length(min = 1))]
    pub bind_address: String,
    /// Port the HTTP server binds to.
    pub bind_port: u16,
}

impl AppConfig {
    /// Resolve the configuration from the process environment.
    ///
    /// `DATABASE_URL` is required; `ADDRESS` and `PORT` fall back to
    /// `127.0.0.1:8080`. A present but non-numeric `PORT` is rejected.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolve the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let bind_address = lookup("ADDRESS").unwrap_or_else(|| DEFAULT_ADDRESS.to_string());
        let bind_port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidNumber {
                    name: "PORT",
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        let config = Self {
            database_url,
            bind_address,
            bind_port,
        };
        config.validate()?;

        Ok(config)
    }
}

//! Server configuration parsed from environment variables.
//!
//! - `PORT`: listen port, default 3000
//! - `CLAIMS_API_BASE`: scoring backend origin published to the browser,
//!   default `http://localhost:8000`
//!
//! A `.env` file in the working directory is loaded first when present.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use claims::DEFAULT_API_BASE;

pub const DEFAULT_PORT: u16 = 3000;
pub const PORT_VAR: &str = "PORT";
pub const API_BASE_VAR: &str = "CLAIMS_API_BASE";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {PORT_VAR} value: {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub api_base: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, api_base: DEFAULT_API_BASE.to_owned() }
    }
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a port
    /// number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = std::env::var(PORT_VAR).ok();
        let api_base = std::env::var(API_BASE_VAR).ok();
        Self::from_values(port.as_deref(), api_base.as_deref())
    }

    /// Build config from raw variable values; `None` means unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] for a non-numeric or out-of-range
    /// port.
    pub fn from_values(port: Option<&str>, api_base: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port.map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
        };
        let api_base = api_base
            .map(|raw| raw.trim().trim_end_matches('/'))
            .filter(|raw| !raw.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .to_owned();
        Ok(Self { port, api_base })
    }
}

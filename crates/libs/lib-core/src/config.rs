//! # Application Configuration
//!
//! This module manages server configuration loaded from environment variables.
//! All configuration is validated on startup to fail fast if misconfigured.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `SITE_BIND_ADDRESS` | `127.0.0.1:8080` |
//! | `SITE_DIST_DIR` | `dist` |
//! | `SITE_ALLOWED_ORIGINS` | local development origins |
//! | `CONTACT_MAX_MESSAGE_LEN` | `5000` |
//!
//! ## Global Config Access
//!
//! The config is initialized once at application startup using [`init_config()`],
//! which also loads a `.env` file when present. Afterwards [`core_config()`]
//! returns the same instance.
//!
//! ```rust,no_run
//! use lib_core::config::init_config;
//!
//! let config = init_config()?;
//! println!("serving {}", config.dist_dir.display());
//! # Ok::<(), String>(())
//! ```

use lib_utils::envs::{self, get_env_list, get_env_or, get_env_parse};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::OnceLock;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_DIST_DIR: &str = "dist";
pub const DEFAULT_MAX_MESSAGE_LEN: usize = 5000;

/// Upper bound accepted for `CONTACT_MAX_MESSAGE_LEN`.
const MAX_MESSAGE_LEN_LIMIT: usize = 20_000;

/// Server configuration loaded from environment variables.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Socket address the HTTP server listens on.
    pub bind_address: String,

    /// Directory holding the compiled front end (`index.html`, wasm, assets).
    pub dist_dir: PathBuf,

    /// Origins allowed to call the API from another host.
    pub allowed_origins: Vec<String>,

    /// Longest contact message accepted, in characters.
    pub max_message_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
            allowed_origins: default_origins(),
            max_message_len: DEFAULT_MAX_MESSAGE_LEN,
        }
    }
}

fn default_origins() -> Vec<String> {
    [
        "http://localhost:8080",
        "http://127.0.0.1:8080",
        "http://localhost:3000",
        "http://127.0.0.1:3000",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let bind_address = get_env_or("SITE_BIND_ADDRESS", DEFAULT_BIND_ADDRESS);
        let dist_dir = PathBuf::from(get_env_or("SITE_DIST_DIR", DEFAULT_DIST_DIR));
        let allowed_origins = get_env_list("SITE_ALLOWED_ORIGINS").unwrap_or_else(default_origins);

        let max_message_len = match get_env_parse::<usize>("CONTACT_MAX_MESSAGE_LEN") {
            Ok(len) => len,
            Err(envs::Error::MissingEnv(_)) => DEFAULT_MAX_MESSAGE_LEN,
            Err(e) => return Err(format!("CONTACT_MAX_MESSAGE_LEN must be a valid number: {e}")),
        };

        Ok(Self {
            bind_address,
            dist_dir,
            allowed_origins,
            max_message_len,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.bind_address.parse::<SocketAddr>().is_err() {
            return Err(format!(
                "SITE_BIND_ADDRESS must be a socket address such as {DEFAULT_BIND_ADDRESS}, got '{}'",
                self.bind_address
            ));
        }

        if self.dist_dir.as_os_str().is_empty() {
            return Err("SITE_DIST_DIR must not be empty".to_string());
        }

        if let Some(origin) = self
            .allowed_origins
            .iter()
            .find(|o| !(o.starts_with("http://") || o.starts_with("https://")))
        {
            return Err(format!(
                "SITE_ALLOWED_ORIGINS entries must start with http:// or https://, got '{origin}'"
            ));
        }

        if self.max_message_len == 0 || self.max_message_len > MAX_MESSAGE_LEN_LIMIT {
            return Err(format!(
                "CONTACT_MAX_MESSAGE_LEN must be between 1 and {MAX_MESSAGE_LEN_LIMIT}"
            ));
        }

        Ok(())
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Initialize the global configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Environment variables are invalid
/// - Configuration validation fails
/// - Config has already been initialized
pub fn init_config() -> Result<&'static Config, String> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| "Config has already been initialized".to_string())?;
    core_config().ok_or_else(|| "Config was not stored".to_string())
}

/// The global configuration, or `None` before [`init_config()`] ran.
pub fn core_config() -> Option<&'static Config> {
    CONFIG.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();

        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.max_message_len, 5000);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert!(config
            .allowed_origins
            .contains(&"http://localhost:8080".to_string()));
    }

    #[test]
    fn test_rejects_bad_bind_address() {
        let config = Config {
            bind_address: "localhost".to_string(),
            ..Config::default()
        };

        let err = config.validate().unwrap_err();

        assert!(err.contains("SITE_BIND_ADDRESS"));
    }

    #[test]
    fn test_rejects_origin_without_scheme() {
        let config = Config {
            allowed_origins: vec!["example.com".to_string()],
            ..Config::default()
        };

        assert!(config.validate().unwrap_err().contains("example.com"));
    }

    #[test]
    fn test_message_limit_bounds() {
        let zero = Config {
            max_message_len: 0,
            ..Config::default()
        };
        let huge = Config {
            max_message_len: MAX_MESSAGE_LEN_LIMIT + 1,
            ..Config::default()
        };

        assert!(zero.validate().is_err());
        assert!(huge.validate().is_err());
    }
}

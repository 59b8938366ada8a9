//! Configuration
//!
//! Settings come from a TOML file, then environment variables override
//! individual keys. A missing file is not an error; defaults apply.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Default image upload endpoint
pub const DEFAULT_UPLOAD_URL: &str = "https://api.cloudinary.com/v1_1/dnadrpuex/image/upload";
/// Default unsigned upload preset
pub const DEFAULT_UPLOAD_PRESET: &str = "mern-esate";
/// Default listing backend
pub const DEFAULT_API_URL: &str = "http://localhost:3000";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Object-storage upload endpoint
    pub upload_url: String,
    /// Upload preset sent with every image
    pub upload_preset: String,
    /// Base URL of the listing backend
    pub api_base_url: String,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
    /// User id used when `LISTER_USER_ID` is not set
    pub user_id: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upload_url: DEFAULT_UPLOAD_URL.to_string(),
            upload_preset: DEFAULT_UPLOAD_PRESET.to_string(),
            api_base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_id: None,
        }
    }
}

impl Config {
    /// Default config file location (`<config dir>/estate-lister/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("estate-lister").join("config.toml"))
    }

    /// Load configuration from `path` (or the default location), then apply
    /// environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).or_else(Self::default_path);
        let mut config = match path {
            Some(ref p) if p.exists() => {
                debug!(path = %p.display(), "reading config file");
                Self::from_toml(&std::fs::read_to_string(p)?)?
            }
            _ => {
                debug!("no config file found, using defaults");
                Self::default()
            }
        };
        config.apply_env()?;
        config.check()?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(v) = env::var("LISTER_UPLOAD_URL") {
            self.upload_url = v.trim().to_string();
        }
        if let Ok(v) = env::var("LISTER_UPLOAD_PRESET") {
            self.upload_preset = v.trim().to_string();
        }
        if let Ok(v) = env::var("LISTER_API_URL") {
            self.api_base_url = v.trim().to_string();
        }
        if let Ok(v) = env::var("LISTER_TIMEOUT_SECS") {
            self.timeout_secs = v.trim().parse().map_err(|_| {
                Error::Config(format!("LISTER_TIMEOUT_SECS must be a number, got: {v}"))
            })?;
        }
        Ok(())
    }

    fn check(&self) -> Result<()> {
        Url::parse(&self.upload_url)
            .map_err(|e| Error::Config(format!("invalid upload_url '{}': {e}", self.upload_url)))?;
        Url::parse(&self.api_base_url).map_err(|e| {
            Error::Config(format!("invalid api_base_url '{}': {e}", self.api_base_url))
        })?;
        if self.upload_preset.is_empty() {
            return Err(Error::Config("upload_preset must not be empty".to_string()));
        }
        Ok(())
    }

    /// HTTP timeout as a [`Duration`]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Absolute URL of a path on the listing backend
    pub fn api_url(&self, path: &str) -> Result<Url> {
        let base = Url::parse(&self.api_base_url)
            .map_err(|e| Error::Config(format!("invalid api_base_url: {e}")))?;
        base.join(path)
            .map_err(|e| Error::Config(format!("cannot join '{path}' onto api_base_url: {e}")))
    }
}

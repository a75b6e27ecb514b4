//! Configuration for the ryuboard client.
//!
//! Layers a TOML config file and environment variables over built-in
//! defaults, then turns the result into an immutable [`ClientConfig`] from
//! which the single [`RyuClient`] is built. Precedence, lowest first:
//! defaults, config file, `RYUBOARD_*` variables, `API_BASE_URL`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use url::Url;

use ryuboard_api::{RyuClient, TlsMode, TransportConfig};

/// Deployment-time variable carrying the backend base URL.
pub const BASE_URL_ENV: &str = "API_BASE_URL";

/// Ryu's WSGI server listens on 8080 and mounts the REST API under `/api`.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080/api";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config ─────────────────────────────────────────────────────

/// On-disk / environment configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Backend API root, including any path prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds. Unset means no timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    /// Accept self-signed controller certificates.
    #[serde(default)]
    pub insecure: bool,

    /// Path to a custom CA certificate (PEM).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: None,
            insecure: false,
            ca_cert: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("org", "ryuboard", "ryuboard").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("ryuboard");
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Config loading ──────────────────────────────────────────────────

/// The provider stack for a given config file.
pub fn figment_for(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("RYUBOARD_"))
        .merge(Env::raw().only(&[BASE_URL_ENV]).map(|_| "base_url".into()))
}

/// Load config from the canonical path plus environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config from `path` plus environment. A missing file is not an error.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config");
    Ok(figment_for(path).extract()?)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to the canonical path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(&path, cfg)?;
    Ok(path)
}

pub fn save_config_to(path: &Path, cfg: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Client config ───────────────────────────────────────────────────

/// Validated, immutable client settings, read once at startup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub transport: TransportConfig,
}

impl ClientConfig {
    /// Validate a loaded [`Config`].
    pub fn from_config(cfg: &Config) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(&cfg.base_url)?;

        let tls = if cfg.insecure {
            TlsMode::DangerAcceptInvalid
        } else if let Some(ref ca_path) = cfg.ca_cert {
            TlsMode::CustomCa(ca_path.clone())
        } else {
            TlsMode::System
        };

        Ok(Self {
            base_url,
            transport: TransportConfig {
                tls,
                timeout: cfg.timeout.map(Duration::from_secs),
            },
        })
    }

    /// Build the one client the application shares.
    pub fn build_client(&self) -> Result<RyuClient, ryuboard_api::Error> {
        RyuClient::new(self.base_url.clone(), &self.transport)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::Validation {
        field: "base_url".into(),
        reason: format!("invalid URL '{raw}': {e}"),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Validation {
            field: "base_url".into(),
            reason: format!("expected an http or https URL, got '{raw}'"),
        });
    }
    Ok(url)
}

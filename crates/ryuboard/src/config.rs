//! CLI configuration: `ryuboard_config` plus `GlobalOpts` flag overrides.

use std::path::PathBuf;

use ryuboard_config::{ClientConfig, Config, config_path, load_config, load_config_from};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// The config file in effect: `--config` / `RYUBOARD_CONFIG`, else the
/// platform default.
pub fn effective_path(global: &GlobalOpts) -> PathBuf {
    global.config.clone().unwrap_or_else(config_path)
}

/// Load file + env config, then apply CLI flags on top.
pub fn effective_config(global: &GlobalOpts) -> Result<Config, CliError> {
    let mut cfg = match global.config {
        Some(ref path) => load_config_from(path)?,
        None => load_config()?,
    };

    if let Some(ref url) = global.base_url {
        cfg.base_url.clone_from(url);
    }
    if let Some(timeout) = global.timeout {
        cfg.timeout = Some(timeout);
    }
    if global.insecure {
        cfg.insecure = true;
    }
    Ok(cfg)
}

/// Resolve the validated client settings for this invocation.
pub fn resolve_client_config(global: &GlobalOpts) -> Result<ClientConfig, CliError> {
    let cfg = effective_config(global)?;
    Ok(ClientConfig::from_config(&cfg)?)
}

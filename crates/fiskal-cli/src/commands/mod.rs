//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod items;
pub mod process;

use std::path::{Path, PathBuf};

use tracing::debug;

use fiskal_core::FiskalConfig;

/// Location of the user's config file under the platform config dir.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fiskal")
        .join("config.json")
}

/// The `--config` path when given, the user's config file otherwise.
pub fn config_file(config_path: Option<&str>) -> PathBuf {
    config_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path)
}

/// Load the active configuration.
///
/// An explicit `--config` file must exist. Without one, the user's config
/// file is read if present and built-in defaults are used otherwise.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<FiskalConfig> {
    if let Some(path) = config_path {
        return Ok(FiskalConfig::from_file(Path::new(path))?);
    }

    let path = default_config_path();
    if path.exists() {
        debug!("Loading configuration from {}", path.display());
        Ok(FiskalConfig::from_file(&path)?)
    } else {
        Ok(FiskalConfig::default())
    }
}

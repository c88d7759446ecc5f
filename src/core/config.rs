use std::path::Path;
use tracing::info;

use crate::error::UserDirError;
use crate::models::Config;

/// Load configuration with CLI overrides
///
/// An explicit `config_file` must exist; otherwise `userdir.toml` in
/// `working_dir` is used when present, and defaults when not.
pub fn load_config(
    working_dir: &Path,
    config_file: Option<&Path>,
    url: Option<String>,
    timeout: Option<u64>,
) -> Result<Config, UserDirError> {
    let config = match config_file {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_from_dir(working_dir)?,
    };
    let config = config.with_overrides(url, timeout);

    info!(
        "Configuration loaded: url={}, timeout={}",
        config.api.collection_url(),
        config
            .api
            .timeout_seconds
            .map(|t| format!("{}s", t))
            .unwrap_or_else(|| "default".to_string())
    );

    Ok(config)
}

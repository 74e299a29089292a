use crate::conf::error::ConfigError;
use crate::conf::types::TunnelGateConfig;
use crate::conf::validation::{ValidatedConfig, validate_config};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "tunnelgate.hcl";

/// Load and validate a config.
///
/// `path` may name the file directly or a directory holding `tunnelgate.hcl`.
pub fn load_config(path: &Path) -> Result<ValidatedConfig, ConfigError> {
    let file = resolve_config_path(path);
    let raw = fs::read_to_string(&file).map_err(|e| ConfigError::read_file(&file, e))?;
    let config = parse_config(&file, &raw)?;

    Ok(validate_config(config))
}

pub fn parse_config(origin: &Path, raw: &str) -> Result<TunnelGateConfig, ConfigError> {
    hcl::from_str(raw).map_err(|e| ConfigError::parse(origin, e))
}

fn resolve_config_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(CONFIG_FILE_NAME)
    } else {
        path.to_path_buf()
    }
}

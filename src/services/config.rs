use crate::backend::BackendConfig;
use crate::cli::DEFAULT_API_BASE;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_TEAM_NAME: &str = "My Team";
pub const DEFAULT_SPORT: &str = "cricket";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Optional `~/.config/jerseykraft/config.toml`. Every field is optional;
/// a missing file means all defaults.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub sport: Option<String>,
}

pub fn load_config() -> anyhow::Result<ConfigFile> {
    let home = std::env::var("HOME")?;
    let path = PathBuf::from(home).join(".config/jerseykraft/config.toml");
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// Resolves the backend endpoint: CLI flag (or its env fallback) wins over
/// the config file, which wins over the built-in default.
pub fn resolve_backend(cli_api_base: Option<&str>, file: &ConfigFile) -> BackendConfig {
    let base_url = cli_api_base
        .map(str::to_string)
        .or_else(|| file.api_base.clone())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    BackendConfig {
        base_url,
        timeout_ms: file.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS),
    }
}

/// Team metadata sent with roster uploads, with the demo defaults as the
/// last resort.
pub fn resolve_team_metadata(
    cli_team_name: Option<&str>,
    cli_sport: Option<&str>,
    file: &ConfigFile,
) -> (String, String) {
    let team_name = cli_team_name
        .map(str::to_string)
        .or_else(|| file.team_name.clone())
        .unwrap_or_else(|| DEFAULT_TEAM_NAME.to_string());
    let sport = cli_sport
        .map(str::to_string)
        .or_else(|| file.sport.clone())
        .unwrap_or_else(|| DEFAULT_SPORT.to_string());
    (team_name, sport)
}

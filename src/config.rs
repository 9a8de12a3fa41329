use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub imdb_search_url: String,
    pub imdb_base_url: String,
    pub rotten_base_url: String,
    pub rotten_search_limit: u32,
    pub timeout_seconds: u64,
    pub output_dir: String,
    /// When false the IMDB adapter reports score as unsupported instead of scraping.
    pub imdb_score_enabled: bool,
    /// Empty means the built-in browser list.
    pub user_agents: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            imdb_search_url: "https://v2.sg.media-imdb.com/suggests/".into(),
            imdb_base_url: "https://www.imdb.com/".into(),
            rotten_base_url: "https://www.rottentomatoes.com".into(),
            rotten_search_limit: 5,
            timeout_seconds: 10,
            output_dir: "data".into(),
            imdb_score_enabled: true,
            user_agents: Vec::new(),
        }
    }
}

/// Loads the config at `path`. A missing file falls back to defaults unless
/// the caller asked for that file explicitly.
pub fn load_config(path: &str, required: bool) -> Result<AppConfig, ConfigError> {
    if !required && !Path::new(path).exists() {
        return Ok(AppConfig::default());
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_string(),
        source,
    })?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

//! Configuration for the operations layer.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use mashup_core::GenerationConfig;
use serde::{Deserialize, Serialize};

use crate::error::{OpsError, OpsResult};

/// Configuration for idea mashup operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding `elements.json` and `ideas.json`.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Categories included by server-side generation unless overridden.
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Largest batch a single request may generate.
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,

    /// Page size when listing ideas without an explicit limit.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Upper bound on a single generation call.
    #[serde(default = "default_generation_timeout_secs")]
    pub generation_timeout_secs: u64,

    /// Bearer token to user id.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub api_tokens: BTreeMap<String, String>,
}

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", "idea-mashup", "mashup")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".mashup"))
}

fn default_max_batch_size() -> usize {
    20
}

fn default_page_size() -> usize {
    20
}

fn default_generation_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            generation: GenerationConfig::default(),
            max_batch_size: default_max_batch_size(),
            default_page_size: default_page_size(),
            generation_timeout_secs: default_generation_timeout_secs(),
            api_tokens: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from disk with environment overrides.
    ///
    /// The result carries values from the environment and must not be
    /// saved; use [`Config::load_file`] for anything written back.
    pub fn load() -> OpsResult<Self> {
        Self::load_file()?.with_env_overrides()
    }

    /// Load only what the config file holds.
    pub fn load_file() -> OpsResult<Self> {
        match Self::config_file_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    fn from_file(path: &Path) -> OpsResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Apply `MASHUP_*` environment variables on top of this config.
    pub fn with_env_overrides(mut self) -> OpsResult<Self> {
        if let Ok(dir) = std::env::var("MASHUP_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Ok(tokens) = std::env::var("MASHUP_API_TOKENS") {
            self.api_tokens.extend(parse_token_list(&tokens)?);
        }
        if let Ok(size) = std::env::var("MASHUP_MAX_BATCH_SIZE") {
            self.max_batch_size = size
                .parse()
                .map_err(|_| OpsError::Config(format!("Invalid MASHUP_MAX_BATCH_SIZE: {}", size)))?;
        }
        Ok(self)
    }

    /// Save configuration to disk.
    pub fn save(&self) -> OpsResult<()> {
        if let Some(path) = Self::config_file_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let contents = serde_json::to_string_pretty(self)?;
            std::fs::write(&path, contents)?;
        }
        Ok(())
    }

    /// Get the path to the configuration file.
    pub fn config_file_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "idea-mashup", "mashup")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Get a configuration value by key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data_dir" => Some(self.data_dir.display().to_string()),
            "max_batch_size" => Some(self.max_batch_size.to_string()),
            "default_page_size" => Some(self.default_page_size.to_string()),
            "generation_timeout_secs" => Some(self.generation_timeout_secs.to_string()),
            "include_formats" => Some(self.generation.include_formats.to_string()),
            "include_channels" => Some(self.generation.include_channels.to_string()),
            "include_action_verbs" => Some(self.generation.include_action_verbs.to_string()),
            "include_trends" => Some(self.generation.include_trends.to_string()),
            "api_tokens" => Some(
                self.api_tokens
                    .values()
                    .map(|user| format!("***={}", user))
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            _ => None,
        }
    }

    /// Set a configuration value by key.
    pub fn set(&mut self, key: &str, value: &str) -> OpsResult<()> {
        match key {
            "data_dir" => self.data_dir = PathBuf::from(value),
            "max_batch_size" => self.max_batch_size = parse_number(value)?,
            "default_page_size" => self.default_page_size = parse_number(value)?,
            "generation_timeout_secs" => self.generation_timeout_secs = parse_number(value)?,
            "include_formats" => self.generation.include_formats = parse_bool(value)?,
            "include_channels" => self.generation.include_channels = parse_bool(value)?,
            "include_action_verbs" => self.generation.include_action_verbs = parse_bool(value)?,
            "include_trends" => self.generation.include_trends = parse_bool(value)?,
            "api_token" => self.api_tokens.extend(parse_token_list(value)?),
            _ => {
                return Err(OpsError::Config(format!("Unknown config key: {}", key)));
            }
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(value: &str) -> OpsResult<T> {
    value
        .parse()
        .map_err(|_| OpsError::Config(format!("Invalid number: {}", value)))
}

fn parse_bool(value: &str) -> OpsResult<bool> {
    value
        .parse()
        .map_err(|_| OpsError::Config(format!("Invalid boolean: {}", value)))
}

/// Parse `token=user,token=user` pairs.
fn parse_token_list(value: &str) -> OpsResult<Vec<(String, String)>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((token, user)) if !token.is_empty() && !user.is_empty() => {
                Ok((token.to_string(), user.to_string()))
            }
            _ => Err(OpsError::Config(format!(
                "Invalid token entry (expected token=user): {}",
                pair
            ))),
        })
        .collect()
}

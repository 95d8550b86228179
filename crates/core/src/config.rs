//! Configuration management for chunkwise.
//!
//! Configuration is merged from several sources, later ones winning:
//! - Built-in defaults
//! - A YAML config file (`--config`, `CHUNKWISE_CONFIG`, or `./.chunkwise.yaml`)
//! - Environment variables
//! - Command-line flags
//!
//! The chunking section is kept as plain data here; the splitter crate turns
//! it into a validated splitter configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Config file looked up in the current directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = ".chunkwise.yaml";

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Config file the settings were read from, if any
    pub config_file: Option<PathBuf>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,

    /// Chunking settings
    pub chunking: ChunkingConfig,
}

/// Chunking settings as written in the config file.
///
/// Every field is optional; unset fields fall back to the defaults of the
/// selected language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkingConfig {
    /// Language tag selecting a separator table ("python", "markdown", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Splitting strategy ("recursive" or "adaptive")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,

    /// Length metric ("chars", "bytes" or "graphemes")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,

    /// Maximum chunk size in metric units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_size: Option<usize>,

    /// Overlap appended from the next chunk, in characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlap: Option<usize>,

    /// Keep matched separators as their own pieces
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_separator: Option<bool>,

    /// Custom separators; replaces the language table when non-empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub separators: Vec<SeparatorConfig>,
}

/// A custom separator entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeparatorConfig {
    pub pattern: String,

    #[serde(default)]
    pub regex: bool,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    logging: Option<LoggingConfig>,
    chunking: Option<ChunkingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl AppConfig {
    /// Load configuration from the config file and environment variables.
    ///
    /// Environment variables:
    /// - `CHUNKWISE_CONFIG`: Path to config file (when `config_file` is `None`)
    /// - `CHUNKWISE_LANGUAGE`, `CHUNKWISE_STRATEGY`: chunking overrides
    /// - `CHUNKWISE_CHUNK_SIZE`, `CHUNKWISE_OVERLAP`: numeric overrides
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// # Example
    /// ```no_run
    /// use chunkwise_core::config::AppConfig;
    ///
    /// let config = AppConfig::load(None).expect("Failed to load config");
    /// println!("Chunk size: {:?}", config.chunking.chunk_size);
    /// ```
    pub fn load(config_file: Option<&Path>) -> AppResult<Self> {
        let mut config = Self::default();

        let explicit = config_file
            .map(Path::to_path_buf)
            .or_else(|| std::env::var("CHUNKWISE_CONFIG").ok().map(PathBuf::from));

        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "Config file does not exist: {:?}",
                        path
                    )));
                }
                config.merge_yaml(&path)?;
            }
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    config.merge_yaml(&path)?;
                }
            }
        }

        config.apply_env(|key| std::env::var(key).ok())?;

        Ok(config)
    }

    /// Merge a YAML configuration file into this config.
    pub fn merge_yaml(&mut self, path: &Path) -> AppResult<()> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                self.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                self.no_color = !color;
            }
        }

        if let Some(chunking) = config_file.chunking {
            self.chunking = chunking;
        }

        self.config_file = Some(path.to_path_buf());
        tracing::debug!("Merged config file {:?}", path);

        Ok(())
    }

    /// Apply environment overrides using the given lookup.
    pub fn apply_env<F>(&mut self, var: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(language) = var("CHUNKWISE_LANGUAGE") {
            self.chunking.language = Some(language);
        }

        if let Some(strategy) = var("CHUNKWISE_STRATEGY") {
            self.chunking.strategy = Some(strategy);
        }

        if let Some(size) = var("CHUNKWISE_CHUNK_SIZE") {
            self.chunking.chunk_size = Some(parse_usize("CHUNKWISE_CHUNK_SIZE", &size)?);
        }

        if let Some(overlap) = var("CHUNKWISE_OVERLAP") {
            self.chunking.overlap = Some(parse_usize("CHUNKWISE_OVERLAP", &overlap)?);
        }

        if let Some(level) = var("RUST_LOG") {
            self.log_level = Some(level);
        }

        if var("NO_COLOR").is_some() {
            self.no_color = true;
        }

        Ok(())
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// Command-line flags take precedence over the file and environment.
    pub fn with_overrides(mut self, log_level: Option<String>, verbose: bool, no_color: bool) -> Self {
        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Write the chunking section to a YAML config file.
    pub fn save_chunking(&self, path: &Path) -> AppResult<()> {
        let file = ConfigFile {
            logging: None,
            chunking: Some(self.chunking.clone()),
        };
        let yaml = serde_yaml::to_string(&file)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, yaml)?;

        tracing::debug!("Saved chunking config to {:?}", path);
        Ok(())
    }
}

fn parse_usize(key: &str, value: &str) -> AppResult<usize> {
    value
        .trim()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid value for {}: '{}' ({})", key, value, e)))
}

//! Configuration module for the alecci CLI.
//!
//! This module handles loading, saving, and managing the `alecci.toml`
//! settings that control how sources are lexed and how tokens are printed.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use alecci_lex::{LexerOptions, StringStyle};

use crate::commands::common::OutputFormat;
use crate::error::{Result, ToolError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "alecci.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Lexer settings.
    #[serde(default)]
    pub lexer: LexerConfig,

    /// Token output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[lexer]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LexerConfig {
    /// How double-quoted strings are tokenized.
    #[serde(default)]
    pub strings: StringsSetting,

    /// Classify built-in function names before the naming convention.
    #[serde(default)]
    pub builtins_first: bool,
}

/// `[output]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Default format of `alecci tokens`.
    #[serde(default)]
    pub format: OutputFormat,

    /// Print whitespace tokens too.
    #[serde(default)]
    pub show_whitespace: bool,
}

/// String style as spelled in the configuration file.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StringsSetting {
    #[default]
    QuoteOnly,
    Delimited,
}

impl From<StringsSetting> for StringStyle {
    fn from(setting: StringsSetting) -> Self {
        match setting {
            StringsSetting::QuoteOnly => StringStyle::QuoteOnly,
            StringsSetting::Delimited => StringStyle::Delimited,
        }
    }
}

impl LexerConfig {
    /// Lexer options described by this section.
    pub fn to_options(&self) -> LexerOptions {
        LexerOptions::default()
            .with_strings(self.strings.into())
            .with_builtins_first(self.builtins_first)
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/alecci/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ToolError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to a specific path, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ToolError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("alecci").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("alecci").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

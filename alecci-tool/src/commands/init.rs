//! Init command implementation.
//!
//! Writes a default `alecci.toml` into a directory.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::commands::common::error_messages;
use crate::commands::traits::{Command, CommandDescription};
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{Result, ToolError};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Overwrite an existing configuration file.
    pub force: bool,
    /// Directory to initialize (default: current directory).
    pub path: Option<PathBuf>,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    fn target_dir(&self) -> PathBuf {
        self.args
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn validate_directory(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            info!("Creating directory: {}", path.display());
            std::fs::create_dir_all(path)?;
            return Ok(());
        }

        if !path.is_dir() {
            return Err(ToolError::Validation(format!(
                "{} {}",
                error_messages::TARGET_NOT_DIR,
                path.display()
            )));
        }
        Ok(())
    }
}

impl Command for InitCommand {
    type Args = InitArgs;
    /// Path of the written configuration file
    type Output = PathBuf;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let target = self.target_dir();
        self.validate_directory(&target)?;

        let config_path = target.join(CONFIG_FILE_NAME);
        if config_path.exists() && !self.args.force {
            return Err(ToolError::Validation(format!(
                "{} {}",
                error_messages::CONFIG_EXISTS,
                config_path.display()
            )));
        }

        Config::default().save_to_path(&config_path)?;
        info!("Created {}", config_path.display());
        Ok(config_path)
    }

    fn name() -> &'static str {
        "init"
    }
}

impl CommandDescription for InitCommand {
    fn description() -> &'static str {
        "Write a default alecci.toml"
    }

    fn help() -> &'static str {
        "Creates alecci.toml with the default lexer and output settings in \
         the specified or current directory."
    }
}

/// Run the init command.
pub fn run_init(args: InitArgs) -> Result<()> {
    debug!(command = InitCommand::name(), "running command");
    InitCommand::new(args).execute().map(|_| ())
}

//! `lexkit init`: write a default `lexkit.toml`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::commands::common::{error_messages, output_messages};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{CliError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Overwrite an existing configuration file.
    pub force: bool,
    /// Directory to write into (default: current directory).
    pub path: Option<PathBuf>,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    /// Write the configuration file and return its path.
    pub fn run(&self) -> Result<PathBuf> {
        let target = self.target_dir();
        self.validate_directory(&target)?;

        let config_path = target.join(CONFIG_FILE_NAME);
        if config_path.exists() && !self.args.force {
            return Err(CliError::Validation(format!(
                "{} {}",
                error_messages::CONFIG_EXISTS,
                config_path.display()
            )));
        }

        Config::default().save_to_path(&config_path)?;
        println!("{} {}", output_messages::CREATED_FILE, config_path.display());
        Ok(config_path)
    }

    fn target_dir(&self) -> PathBuf {
        self.args
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn validate_directory(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            if self.args.verbose {
                eprintln!("Creating directory: {}", path.display());
            }
            std::fs::create_dir_all(path).map_err(|e| {
                CliError::FileOperation(format!(
                    "Failed to create directory {}: {}",
                    path.display(),
                    e
                ))
            })?;
            return Ok(());
        }

        if !path.is_dir() {
            return Err(CliError::Validation(format!(
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
    type Output = PathBuf;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "init"
    }
}

impl CommandDescription for InitCommand {
    fn description() -> &'static str {
        "Write a default lexkit.toml"
    }

    fn help() -> &'static str {
        "Creates lexkit.toml with every setting at its default value in the \
         given directory, or the current one. Refuses to overwrite an \
         existing file unless --force is given."
    }
}

/// Run the init command.
pub fn run_init(args: InitArgs) -> Result<PathBuf> {
    debug!(command = InitCommand::name(), "starting");
    InitCommand::new(args).execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args_for(dir: &Path, force: bool) -> InitArgs {
        InitArgs {
            verbose: false,
            force,
            path: Some(dir.to_path_buf()),
        }
    }

    #[test]
    fn test_init_args_default() {
        let args = InitArgs::default();
        assert!(!args.verbose);
        assert!(!args.force);
        assert!(args.path.is_none());
    }

    #[test]
    fn test_init_command_name() {
        assert_eq!(<InitCommand as Command>::name(), "init");
        assert_eq!(
            <InitCommand as CommandDescription>::description(),
            "Write a default lexkit.toml"
        );
    }

    #[test]
    fn test_init_writes_default_config() {
        let temp_dir = TempDir::new().unwrap();

        let path = run_init(args_for(temp_dir.path(), false)).unwrap();

        assert_eq!(path, temp_dir.path().join(CONFIG_FILE_NAME));
        assert_eq!(Config::load_from_path(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("a").join("b");

        run_init(args_for(&target, false)).unwrap();

        assert!(target.join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_init_refuses_existing_without_force() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "# mine").unwrap();

        let result = run_init(args_for(temp_dir.path(), false));

        match result {
            Err(CliError::Validation(msg)) => assert!(msg.contains("already exists")),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_init_overwrites_with_force() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "# mine").unwrap();

        run_init(args_for(temp_dir.path(), true)).unwrap();

        assert_eq!(Config::load_from_path(&config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_target_is_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain.txt");
        std::fs::write(&file, "").unwrap();

        let result = run_init(args_for(&file, false));
        assert!(matches!(result, Err(CliError::Validation(_))));
    }
}

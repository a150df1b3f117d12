//! Command execution context

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::backup::BackupManager;
use crate::buffer::LineBuffer;
use crate::cli::args::Cli;
use crate::model::AppConfig;
use crate::store;

/// Common context for command execution: resolved file path, app config,
/// and the write path (backup + atomic replace).
pub struct Context {
    pub config: AppConfig,
    pub rc_file: PathBuf,
    pub assume_yes: bool,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = AppConfig::load()?;
        let rc_file = cli.file.clone().unwrap_or_else(default_rc_path);

        Ok(Self {
            config,
            rc_file,
            assume_yes: cli.yes,
        })
    }

    /// Read the RC file into a line buffer.
    pub fn load_buffer(&self) -> Result<LineBuffer> {
        let content = store::read_file(&self.rc_file)?;
        Ok(LineBuffer::parse(content.as_str()))
    }

    /// Persist the buffer: timestamped backup of the current file, then an
    /// atomic write of the new content.
    pub fn write_buffer(&self, buffer: &LineBuffer) -> Result<()> {
        if self.rc_file.exists() {
            BackupManager::new(&self.config).create_backup(&self.rc_file)?;
        }
        store::write_file(&self.rc_file, &buffer.to_content())?;
        Ok(())
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Print an error message
    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }
}

fn default_rc_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("~"))
        .join(".bashrc")
}

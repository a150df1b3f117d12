//! `git` command family: canonical view and edits over git-config files
//!
//! Unlike the RC-file commands this path is not line-preserving: the file
//! is parsed to the structured model and written back canonically.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::backup::BackupManager;
use crate::cli::args::GitCommand;
use crate::cli::Context;
use crate::gitconfig::GitConfig;
use crate::store;

pub fn execute(ctx: &Context, file: Option<&Path>, command: &GitCommand) -> Result<()> {
    let path = file.map(Path::to_path_buf).unwrap_or_else(default_git_path);

    match command {
        GitCommand::List => {
            let config = load(&path)?;
            print!("{}", config.serialize());
        }
        GitCommand::Get {
            section,
            key,
            subsection,
        } => {
            let config = load(&path)?;
            match config.get(section, subsection.as_deref(), key) {
                Some(value) => println!("{}", value),
                None => anyhow::bail!(
                    "no value for {}{}.{}",
                    section,
                    subsection
                        .as_deref()
                        .map(|s| format!(".{}", s))
                        .unwrap_or_default(),
                    key
                ),
            }
        }
        GitCommand::Set {
            section,
            key,
            value,
            subsection,
        } => {
            let mut config = load_or_empty(&path)?;
            config.set(section, subsection.as_deref(), key, value);
            write(ctx, &path, &config)?;
            ctx.print_success(&format!("Set {}.{}", section, key));
        }
        GitCommand::Unset {
            section,
            key,
            subsection,
        } => {
            let mut config = load(&path)?;
            if !config.remove(section, subsection.as_deref(), key) {
                anyhow::bail!("no value for {}.{}", section, key);
            }
            write(ctx, &path, &config)?;
            ctx.print_success(&format!("Unset {}.{}", section, key));
        }
    }

    Ok(())
}

fn load(path: &Path) -> Result<GitConfig> {
    Ok(GitConfig::parse(&store::read_file(path)?))
}

/// `set` on a file that does not exist yet starts from an empty model.
fn load_or_empty(path: &Path) -> Result<GitConfig> {
    if path.exists() {
        load(path)
    } else {
        Ok(GitConfig::new())
    }
}

fn write(ctx: &Context, path: &Path, config: &GitConfig) -> Result<()> {
    if path.exists() {
        BackupManager::new(&ctx.config).create_backup(path)?;
    }
    store::write_file(path, &config.serialize())?;
    Ok(())
}

fn default_git_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("~"))
        .join(".gitconfig")
}

//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Round-trip-safe shell RC file and git-config editor
#[derive(Parser, Debug)]
#[command(name = "dotrc", version, about)]
pub struct Cli {
    /// Shell RC file to operate on (defaults to ~/.bashrc)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Skip confirmation prompts
    #[arg(short = 'y', long)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List recognized entities (alias, func, env, path, source)
    List {
        /// Show only one kind of entity
        kind: Option<String>,
    },

    /// Check for duplicate definitions and missing paths
    Check,

    /// Append a new alias at the end of the file
    AddAlias {
        name: String,
        expansion: String,
    },

    /// Disable an enabled alias by commenting it out, or re-enable a
    /// disabled one, in place
    Toggle {
        name: String,
    },

    /// Remove an entity and its whole line range
    Remove {
        /// Entity kind (alias, func, env, source)
        kind: String,
        name: String,
    },

    /// Inspect and edit a git-config style file
    Git {
        /// Config file to operate on (defaults to ~/.gitconfig)
        #[arg(short, long)]
        file: Option<PathBuf>,

        #[command(subcommand)]
        command: GitCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum GitCommand {
    /// Print the canonical form of the whole file
    List,

    /// Print one value
    Get {
        section: String,
        key: String,
        /// Subsection discriminator, e.g. the remote name
        #[arg(short, long)]
        subsection: Option<String>,
    },

    /// Set one value, creating the section if needed
    Set {
        section: String,
        key: String,
        value: String,
        #[arg(short, long)]
        subsection: Option<String>,
    },

    /// Remove one key
    Unset {
        section: String,
        key: String,
        #[arg(short, long)]
        subsection: Option<String>,
    },
}

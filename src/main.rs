//! dotrc - Round-trip-safe shell RC file and git-config editor

use anyhow::Result;
use clap::Parser;

use dotrc::cli::{commands, Cli, Command, Context};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = Context::from_cli(&cli)?;

    match &cli.command {
        Command::List { kind } => commands::list::execute(&ctx, kind.as_deref()),
        Command::Check => commands::check::execute(&ctx),
        Command::AddAlias { name, expansion } => commands::alias::add(&ctx, name, expansion),
        Command::Toggle { name } => commands::alias::toggle(&ctx, name),
        Command::Remove { kind, name } => commands::alias::remove(&ctx, kind, name),
        Command::Git { file, command } => commands::git_cmd::execute(&ctx, file.as_deref(), command),
    }
}

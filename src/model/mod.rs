//! Data model: recognized entities and application configuration

mod config;
mod entity;

pub use config::{AppConfig, BackupConfig};
pub use entity::{
    Alias, Entity, EntityKind, ExportedVariable, Function, PathEntry, SourceDirective,
};

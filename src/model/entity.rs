//! Typed entities extracted from shell configuration lines
//!
//! Every entity carries the zero-based line index (or closed line range for
//! functions) it was recognized at. Those indices are a snapshot: they stay
//! valid only until the next mutation batch is applied, after which the
//! caller re-parses the buffer.

use serde::{Deserialize, Serialize};

/// Entity kind, used for CLI filtering and grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Alias,
    Function,
    ExportedVariable,
    PathEntry,
    SourceDirective,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Alias => write!(f, "alias"),
            EntityKind::Function => write!(f, "func"),
            EntityKind::ExportedVariable => write!(f, "env"),
            EntityKind::PathEntry => write!(f, "path"),
            EntityKind::SourceDirective => write!(f, "source"),
        }
    }
}

impl std::str::FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alias" => Ok(EntityKind::Alias),
            "func" | "function" => Ok(EntityKind::Function),
            "env" | "export" | "var" => Ok(EntityKind::ExportedVariable),
            "path" => Ok(EntityKind::PathEntry),
            "source" => Ok(EntityKind::SourceDirective),
            _ => Err(format!("Unknown entity kind: {}", s)),
        }
    }
}

/// An `alias NAME=VALUE` line, enabled, or its fully commented disabled
/// form `# alias NAME=VALUE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    pub name: String,
    pub expansion: String,
    pub enabled: bool,
    pub source_line: usize,
}

/// A multi-line (or single-line) shell function definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    /// Body lines between the opening and closing brace, joined with `\n`,
    /// indentation preserved.
    pub body: String,
    /// Closed interval from the starting line to the closing-brace line.
    pub line_range: (usize, usize),
}

/// An `export NAME=VALUE` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedVariable {
    pub name: String,
    pub value: String,
    /// True when the value is a keychain command substitution rather than a
    /// literal secret. The command is recognized syntactically, never run.
    pub keychain_backed: bool,
    pub source_line: usize,
}

/// One directory from a PATH assignment or prepend line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    pub directory: String,
    /// Position of the directory within its line's `:`-separated list.
    pub order: usize,
    pub source_line: usize,
}

/// A `source FILE` / `. FILE` line, optionally behind a `[ -f ... ] &&`
/// guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDirective {
    /// Target with `~`, `$HOME`, and `${HOME}` expanded.
    pub target: String,
    /// Target exactly as written in the file.
    pub raw_target: String,
    pub guarded: bool,
    pub source_line: usize,
}

/// A recognized entity plus its originating position in the line buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    Alias(Alias),
    Function(Function),
    ExportedVariable(ExportedVariable),
    PathEntry(PathEntry),
    SourceDirective(SourceDirective),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Alias(_) => EntityKind::Alias,
            Entity::Function(_) => EntityKind::Function,
            Entity::ExportedVariable(_) => EntityKind::ExportedVariable,
            Entity::PathEntry(_) => EntityKind::PathEntry,
            Entity::SourceDirective(_) => EntityKind::SourceDirective,
        }
    }

    /// Display name for listings and duplicate checks.
    pub fn name(&self) -> &str {
        match self {
            Entity::Alias(a) => &a.name,
            Entity::Function(f) => &f.name,
            Entity::ExportedVariable(e) => &e.name,
            Entity::PathEntry(p) => &p.directory,
            Entity::SourceDirective(s) => &s.raw_target,
        }
    }

    /// Closed line interval this entity was recognized over.
    pub fn line_range(&self) -> (usize, usize) {
        match self {
            Entity::Alias(a) => (a.source_line, a.source_line),
            Entity::Function(f) => f.line_range,
            Entity::ExportedVariable(e) => (e.source_line, e.source_line),
            Entity::PathEntry(p) => (p.source_line, p.source_line),
            Entity::SourceDirective(s) => (s.source_line, s.source_line),
        }
    }
}

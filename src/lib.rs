//! dotrc - Round-trip-safe shell RC file and git-config editor
//!
//! A library (plus thin CLI) for editing shell startup files without ever
//! disturbing lines the user did not explicitly change.
//!
//! # Features
//!
//! - Parse aliases, functions, exported variables, PATH entries, and source
//!   directives out of a shell RC file
//! - Apply declarative line edits through a batch mutation engine that
//!   preserves every untouched line byte-for-byte
//! - Parse and canonically re-serialize git-config style files
//! - Check for duplicate definitions and missing paths
//! - Automatic backups and atomic file writes
//!
//! # Staleness contract
//!
//! Entity line indices are a snapshot of the buffer at parse time. They are
//! valid only until the next [`mutation::apply`] call; after every write the
//! caller must re-run [`parser::recognize`] instead of patching indices.

pub mod backup;
pub mod buffer;
pub mod checker;
pub mod cli;
pub mod error;
pub mod gitconfig;
pub mod model;
pub mod mutation;
pub mod parser;
pub mod store;
pub mod utils;

pub use buffer::LineBuffer;
pub use checker::check_all;
pub use error::{MutationError, StoreError};
pub use gitconfig::GitConfig;
pub use model::{AppConfig, Entity, EntityKind};
pub use mutation::{apply, Modification};
pub use parser::recognize;

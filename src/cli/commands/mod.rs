//! Command implementations
//!
//! Every mutating command follows the same shape: parse the file into a
//! buffer, recognize entities, translate the intent into a modification
//! batch against those snapshot indices, apply, write, and re-parse on the
//! next invocation rather than reusing stale indices.

pub mod alias;
pub mod check;
pub mod git_cmd;
pub mod list;

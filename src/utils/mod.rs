//! Shared utilities: quote-aware string scanning and path expansion

pub mod path;
pub mod strings;

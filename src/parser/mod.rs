//! # Entity Recognizer
//!
//! Turns a [`LineBuffer`] into a list of typed entities referencing line
//! positions.
//!
//! ## Architecture Overview
//!
//! ```text
//! parser/
//! ├── mod.rs          - This file: recognize() driver + function extents
//! ├── patterns.rs     - Regex definitions (ALIAS_RE, FUNC_*, etc.)
//! └── recognize.rs    - Per-line try_parse_* matchers
//! ```
//!
//! ## Recognition Order
//!
//! Patterns are tried in a fixed order and the first full match wins:
//!
//! 1. Function start (then brace-depth accumulation consumes the body)
//! 2. Alias, enabled or disabled
//! 3. PATH assignment or prepend (before plain exports, so `export PATH=`
//!    yields path entries instead of a variable)
//! 4. Exported variable
//! 5. Source directive, bare or guarded
//!
//! Blank lines, comments, and anything else match nothing and remain
//! opaque in the buffer. Recognition failure is never an error.
//!
//! ## Staleness
//!
//! Returned line indices describe the buffer as passed in. Apply a
//! mutation batch and they are stale; re-run [`recognize`] instead of
//! patching them.

pub mod patterns;
pub mod recognize;

use crate::buffer::LineBuffer;
use crate::model::{Entity, Function};
use crate::utils::strings::brace_depth_delta;

use recognize::{
    detect_function_start, try_parse_alias, try_parse_export, try_parse_path, try_parse_source,
};

/// Extract every recognizable entity from the buffer.
pub fn recognize(buffer: &LineBuffer) -> Vec<Entity> {
    let mut entities = Vec::new();
    let lines = buffer.lines();
    let mut index = 0;

    while index < lines.len() {
        let trimmed = lines[index].trim();

        if let Some(name) = detect_function_start(trimmed) {
            match function_extent(lines, index) {
                Some(end) => {
                    entities.push(Entity::Function(build_function(lines, name, index, end)));
                    index = end + 1;
                    continue;
                }
                // Unterminated definition: leave everything opaque.
                None => {
                    index += 1;
                    continue;
                }
            }
        }

        if let Some(alias) = try_parse_alias(trimmed, index) {
            entities.push(Entity::Alias(alias));
        } else if let Some(path_entries) = try_parse_path(trimmed, index) {
            entities.extend(path_entries.into_iter().map(Entity::PathEntry));
        } else if let Some(var) = try_parse_export(trimmed, index) {
            entities.push(Entity::ExportedVariable(var));
        } else if let Some(source) = try_parse_source(trimmed, index) {
            entities.push(Entity::SourceDirective(source));
        }

        index += 1;
    }

    entities
}

/// Find the closing-brace line of a function starting at `start`.
///
/// Brace depth is tracked quote-aware across lines; nested braces in the
/// body are balanced out rather than assumed single-line-closed. Returns
/// `None` when the definition never returns to depth zero.
fn function_extent(lines: &[String], start: usize) -> Option<usize> {
    let mut depth = brace_depth_delta(&lines[start]);
    if depth <= 0 {
        // Opened and closed on the starting line.
        return Some(start);
    }

    for (offset, line) in lines[start + 1..].iter().enumerate() {
        depth += brace_depth_delta(line);
        if depth <= 0 {
            return Some(start + 1 + offset);
        }
    }

    None
}

fn build_function(lines: &[String], name: String, start: usize, end: usize) -> Function {
    let body = if end == start {
        // Single-line form: content between the outermost braces.
        let line = &lines[start];
        match (line.find('{'), line.rfind('}')) {
            (Some(open), Some(close)) if close > open => line[open + 1..close].trim().to_string(),
            _ => String::new(),
        }
    } else {
        lines[start + 1..end].join("\n")
    };

    Function {
        name,
        body,
        line_range: (start, end),
    }
}

//! # Mutation Engine
//!
//! Applies a batch of declarative line edits to a [`LineBuffer`].
//!
//! ## Ordering discipline
//!
//! Every index in a batch refers to the buffer *before* the batch is
//! applied. The engine sorts index-bearing operations by descending index
//! and applies them in that order, so an insert or delete never shifts a
//! position that a not-yet-applied lower-indexed operation still needs.
//! `AppendLine` operations carry no index and run last, in the order given.
//!
//! ## Overlap policy
//!
//! A batch in which two index-bearing operations reference the same line is
//! ambiguous (`DeleteLine(3)` + `UpdateLine(3, ..)` has no single sensible
//! outcome). Such batches are rejected with
//! [`MutationError::OverlappingEdits`] before any line is touched, as are
//! batches referencing an index past the end of the buffer. Callers that
//! build batches from one parse snapshot never produce overlaps.

use std::collections::HashSet;

use crate::buffer::LineBuffer;
use crate::error::MutationError;

/// One declarative edit against a line buffer.
///
/// All indices are zero-based positions in the buffer as it was when the
/// batch was constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modification {
    /// Replace the text of exactly one line, keeping its position.
    UpdateLine { index: usize, text: String },
    /// Insert one or more new lines immediately after the given line.
    InsertAfter { index: usize, lines: Vec<String> },
    /// Remove exactly the referenced line.
    DeleteLine { index: usize },
    /// Add a line at the end of the buffer.
    AppendLine { text: String },
}

impl Modification {
    /// The pre-batch index this operation targets, if it has one.
    pub fn index(&self) -> Option<usize> {
        match self {
            Modification::UpdateLine { index, .. }
            | Modification::InsertAfter { index, .. }
            | Modification::DeleteLine { index } => Some(*index),
            Modification::AppendLine { .. } => None,
        }
    }
}

/// Apply a batch of modifications to the buffer in place.
///
/// Validation runs first; on any [`MutationError`] the buffer is untouched.
/// The order the batch was constructed in does not affect the result for
/// non-overlapping operations.
pub fn apply(buffer: &mut LineBuffer, batch: &[Modification]) -> Result<(), MutationError> {
    validate(buffer, batch)?;

    let mut indexed: Vec<&Modification> = batch.iter().filter(|m| m.index().is_some()).collect();
    indexed.sort_by(|a, b| b.index().cmp(&a.index()));

    for modification in indexed {
        match modification {
            Modification::UpdateLine { index, text } => buffer.set_line(*index, text.clone()),
            Modification::InsertAfter { index, lines } => {
                buffer.insert_after(*index, lines.clone());
            }
            Modification::DeleteLine { index } => buffer.delete_line(*index),
            // Filtered out above; appends run after the indexed pass.
            Modification::AppendLine { .. } => {}
        }
    }

    for modification in batch {
        if let Modification::AppendLine { text } = modification {
            buffer.append_line(text.clone());
        }
    }

    Ok(())
}

fn validate(buffer: &LineBuffer, batch: &[Modification]) -> Result<(), MutationError> {
    let mut seen = HashSet::new();
    for modification in batch {
        if let Some(index) = modification.index() {
            if index >= buffer.len() {
                return Err(MutationError::IndexOutOfBounds {
                    index,
                    len: buffer.len(),
                });
            }
            if !seen.insert(index) {
                return Err(MutationError::OverlappingEdits { index });
            }
        }
    }
    Ok(())
}

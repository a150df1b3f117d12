//! # Line Buffer
//!
//! The ordered, in-memory representation of a text file's lines and the
//! single source of truth for serialization.
//!
//! ## Round-trip guarantee
//!
//! `LineBuffer::parse(s).to_content() == s` for any input. Rust's
//! `str::lines()` cannot provide this: `"a\n\n".lines()` yields only
//! `["a", ""]` and loses the distinction between a terminating newline and
//! a trailing blank line. The buffer splits on `\n` itself and records
//! whether the original content ended with a newline.
//!
//! ## Mutation
//!
//! Only the [`mutation`](crate::mutation) engine rewrites lines; everything
//! else reads. Entities produced by the recognizer hold indices into this
//! buffer that become stale after the next apply.

/// Ordered sequence of raw text lines plus trailing-newline state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
    trailing_newline: bool,
}

impl LineBuffer {
    /// Create an empty buffer (serializes to the empty string).
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            trailing_newline: false,
        }
    }

    /// Split raw file content into lines, preserving trailing blank lines.
    pub fn parse(content: &str) -> Self {
        if content.is_empty() {
            return Self::new();
        }

        let mut lines: Vec<String> = content.split('\n').map(str::to_string).collect();
        let trailing_newline = content.ends_with('\n');

        // split('\n') produces one empty element after a final '\n'; that
        // element is the line terminator, not a line.
        if trailing_newline {
            lines.pop();
        }

        Self {
            lines,
            trailing_newline,
        }
    }

    /// Number of lines in the buffer.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line at a zero-based index, if it exists.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// All lines in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Reassemble the exact file content.
    pub fn to_content(&self) -> String {
        if self.lines.is_empty() {
            return String::new();
        }
        let mut content = self.lines.join("\n");
        if self.trailing_newline {
            content.push('\n');
        }
        content
    }

    // Line-level mutators, reserved for the mutation engine.

    pub(crate) fn set_line(&mut self, index: usize, text: String) {
        self.lines[index] = text;
    }

    pub(crate) fn insert_after(&mut self, index: usize, new_lines: Vec<String>) {
        let at = index + 1;
        for (offset, line) in new_lines.into_iter().enumerate() {
            self.lines.insert(at + offset, line);
        }
    }

    pub(crate) fn delete_line(&mut self, index: usize) {
        self.lines.remove(index);
    }

    pub(crate) fn append_line(&mut self, text: String) {
        self.lines.push(text);
        // A buffer that gains content ends with a proper terminator.
        self.trailing_newline = true;
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

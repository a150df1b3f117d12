//! # Git-Config Codec
//!
//! Parser and serializer for the git-config INI dialect. Unlike the shell
//! RC path, this codec does not preserve original formatting: it parses to
//! a fully structured model and regenerates canonical text on write.
//!
//! ## Logical sections
//!
//! Two headers with the same `(name, subsection)` pair are semantically one
//! section; their entries are concatenated in file order under the
//! first-seen header. Section names compare case-insensitively (git
//! semantics), subsections are case-sensitive. Original comments,
//! blank-line placement, and duplicate-header interleaving are not
//! reproduced — only the logical key/value content is stable.
//!
//! ## Canonical output
//!
//! One header per logical section in first-seen order, tab-indented
//! `key = value` entries, one blank line between sections, single trailing
//! newline. Values that would be misread on re-parse (inline `#`/`;`,
//! embedded `"`, leading or trailing whitespace) are re-quoted, with
//! embedded quotes and backslashes escaped, so that
//! `parse(serialize(parse(x)))` equals `parse(x)`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::strings::find_unquoted;

lazy_static! {
    /// Matches a section header: `[name]` or `[name "subsection"]`
    ///
    /// Captures:
    /// - Group 1: section name
    /// - Group 2: subsection (without quotes), if present
    ///
    /// Headers with unbalanced subsection quoting do not match and are
    /// skipped non-fatally.
    static ref HEADER_RE: Regex = Regex::new(
        r#"^\[([A-Za-z0-9.-]+)(?:\s+"([^"]*)")?\]$"#
    ).unwrap();
}

/// One `key = value` pair. Keys are case-preserving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
}

/// A logical section: all entries ever associated with one
/// `(name, subsection)` pair, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub subsection: Option<String>,
    pub entries: Vec<ConfigEntry>,
}

impl Section {
    fn matches(&self, name: &str, subsection: Option<&str>) -> bool {
        self.name.eq_ignore_ascii_case(name) && self.subsection.as_deref() == subsection
    }
}

/// In-memory model of a git-config document, sections in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitConfig {
    sections: Vec<Section>,
}

impl GitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse git-config text into the structured model.
    ///
    /// Blank lines and `#`/`;` comment lines are skipped. Malformed
    /// headers and entries with an empty key are dropped without aborting
    /// the parse; entries before any header are dropped too.
    pub fn parse(content: &str) -> Self {
        let mut config = Self::new();
        let mut current: Option<usize> = None;

        for raw_line in content.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') {
                current = match HEADER_RE.captures(line) {
                    Some(caps) => {
                        let name = caps[1].to_string();
                        let subsection = caps.get(2).map(|m| m.as_str().to_string());
                        Some(config.section_index_or_insert(name, subsection))
                    }
                    // Unbalanced or garbled header: skip it, and drop the
                    // entries that follow until the next valid header.
                    None => None,
                };
                continue;
            }

            if let Some(section) = current {
                if let Some(entry) = parse_entry(line) {
                    config.sections[section].entries.push(entry);
                }
            }
        }

        config
    }

    /// Regenerate canonical text from the model.
    pub fn serialize(&self) -> String {
        let mut out = String::new();

        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            match &section.subsection {
                Some(sub) => out.push_str(&format!("[{} \"{}\"]\n", section.name, sub)),
                None => out.push_str(&format!("[{}]\n", section.name)),
            }
            for entry in &section.entries {
                out.push_str(&format!("\t{} = {}\n", entry.key, quote_value(&entry.value)));
            }
        }

        out
    }

    /// All logical sections in first-seen order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// First value for a key within a logical section.
    pub fn get(&self, name: &str, subsection: Option<&str>, key: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.matches(name, subsection))?
            .entries
            .iter()
            .find(|e| e.key.eq_ignore_ascii_case(key))
            .map(|e| e.value.as_str())
    }

    /// Set a key within a logical section, creating the section on demand.
    /// An existing entry with the same key is replaced in place.
    pub fn set(&mut self, name: &str, subsection: Option<&str>, key: &str, value: &str) {
        let index = self.section_index_or_insert(
            name.to_string(),
            subsection.map(str::to_string),
        );
        let entries = &mut self.sections[index].entries;
        match entries.iter_mut().find(|e| e.key.eq_ignore_ascii_case(key)) {
            Some(entry) => entry.value = value.to_string(),
            None => entries.push(ConfigEntry {
                key: key.to_string(),
                value: value.to_string(),
            }),
        }
    }

    /// Remove a key from a logical section. Returns whether anything was
    /// removed; a section left empty is dropped.
    pub fn remove(&mut self, name: &str, subsection: Option<&str>, key: &str) -> bool {
        let Some(index) = self
            .sections
            .iter()
            .position(|s| s.matches(name, subsection))
        else {
            return false;
        };
        let entries = &mut self.sections[index].entries;
        let before = entries.len();
        entries.retain(|e| !e.key.eq_ignore_ascii_case(key));
        let removed = entries.len() != before;
        if self.sections[index].entries.is_empty() {
            self.sections.remove(index);
        }
        removed
    }

    fn section_index_or_insert(&mut self, name: String, subsection: Option<String>) -> usize {
        if let Some(index) = self
            .sections
            .iter()
            .position(|s| s.matches(&name, subsection.as_deref()))
        {
            return index;
        }
        self.sections.push(Section {
            name,
            subsection,
            entries: Vec::new(),
        });
        self.sections.len() - 1
    }
}

/// Parse one `key = value` line.
///
/// Inline comments are stripped only when the `#`/`;` sits outside quotes;
/// a matching pair of surrounding double quotes is then removed once. A
/// line with no `=` is a bare key with an empty value; an empty key is
/// skipped.
fn parse_entry(line: &str) -> Option<ConfigEntry> {
    let uncommented = match find_unquoted(line, &['#', ';']) {
        Some(pos) => &line[..pos],
        None => line,
    };

    let (key, value) = match uncommented.split_once('=') {
        Some((key, value)) => (key.trim(), unquote(value.trim())),
        None => (uncommented.trim(), String::new()),
    };

    if key.is_empty() {
        return None;
    }

    Some(ConfigEntry {
        key: key.to_string(),
        value,
    })
}

fn unquote(value: &str) -> String {
    if value.len() < 2 || !value.starts_with('"') || !value.ends_with('"') {
        return value.to_string();
    }
    let inner = &value[1..value.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            // `\"` and `\\` produced by quote_value; a trailing lone
            // backslash is kept as-is.
            out.push(chars.next().unwrap_or('\\'));
        } else {
            out.push(c);
        }
    }
    out
}

/// Quote a value whose raw form would be misread on re-parse. Embedded
/// `"` and `\` are backslash-escaped so the quoted region stays balanced.
fn quote_value(value: &str) -> String {
    let needs_quoting = !value.is_empty()
        && (value.contains('#')
            || value.contains(';')
            || value.contains('"')
            || value.starts_with(char::is_whitespace)
            || value.ends_with(char::is_whitespace));
    if needs_quoting {
        let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
        format!("\"{}\"", escaped)
    } else {
        value.to_string()
    }
}

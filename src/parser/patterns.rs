//! # Shell Line Patterns
//!
//! Regex patterns for the fixed set of line shapes the recognizer knows.
//! Anything that matches none of these is opaque text and stays untouched.
//!
//! ## Pattern Notes
//!
//! Quote handling is deliberately not in the regexes: each pattern captures
//! the raw right-hand side and the caller strips one pair of matching
//! quotes, so unbalanced quoting falls through unharmed.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches an enabled alias: `alias name=value`
    ///
    /// Captures:
    /// - Group 1: alias name (allows special chars like `.`, `~`, `-`)
    /// - Group 2: raw value, quotes included
    pub static ref ALIAS_RE: Regex = Regex::new(
        r"^alias\s+([^\s=]+)=(.*)$"
    ).unwrap();

    /// Matches a disabled alias: `# alias name=value`
    ///
    /// The whole line must be a commented alias; a trailing comment on an
    /// active alias does not match.
    ///
    /// Captures:
    /// - Group 1: alias name
    /// - Group 2: raw value, quotes included
    pub static ref DISABLED_ALIAS_RE: Regex = Regex::new(
        r"^#\s*alias\s+([^\s=]+)=(.*)$"
    ).unwrap();

    /// Matches an export statement: `export VAR=value`
    ///
    /// Captures:
    /// - Group 1: variable name (word characters only)
    /// - Group 2: raw value, quotes included
    pub static ref EXPORT_RE: Regex = Regex::new(
        r"^export\s+(\w+)=(.*)$"
    ).unwrap();

    /// Matches a PATH prepend without `export`: `PATH="dir:$PATH"`
    ///
    /// Captures:
    /// - Group 1: raw value, quotes included
    pub static ref PATH_PREPEND_RE: Regex = Regex::new(
        r"^PATH=(.*)$"
    ).unwrap();

    /// Matches a source statement: `source file` or `. file`
    ///
    /// Captures:
    /// - Group 1: file path (rest of the line)
    pub static ref SOURCE_RE: Regex = Regex::new(
        r"^(?:source|\.)\s+(.+)$"
    ).unwrap();

    /// Matches an existence-guarded command: `[ -f file ] && cmd` or the
    /// `[[ ... ]] && cmd` form. The guard is stripped; only the trailing
    /// command is parsed further.
    ///
    /// Captures:
    /// - Group 1: the command after `&&`
    pub static ref GUARDED_RE: Regex = Regex::new(
        r"^\[\[?[^\]]+\]\]?\s*&&\s*(.+)$"
    ).unwrap();

    /// Matches a function start: `name() {` or `function name() {`
    ///
    /// Captures:
    /// - Group 1: function name
    pub static ref FUNC_PAREN_RE: Regex = Regex::new(
        r"^(?:function\s+)?([A-Za-z_][\w-]*)\s*\(\s*\)\s*\{"
    ).unwrap();

    /// Matches a function start with the `function` keyword and no
    /// parentheses: `function name {`
    ///
    /// Captures:
    /// - Group 1: function name
    pub static ref FUNC_KEYWORD_RE: Regex = Regex::new(
        r"^function\s+([A-Za-z_][\w-]*)\s*\{"
    ).unwrap();

    /// Matches a keychain lookup command substitution inside a value:
    /// `$(security find-generic-password -s SERVICE -a USER -w)`
    ///
    /// Values containing this are keychain-backed references, not literal
    /// secrets. The command itself is never executed.
    pub static ref KEYCHAIN_LOOKUP_RE: Regex = Regex::new(
        r"\$\(\s*security\s+find-generic-password\b[^)]*\)"
    ).unwrap();
}

//! # Per-line Matchers
//!
//! Pure functions mapping one trimmed line to zero-or-one typed entity.
//! Each takes the zero-based index the line sits at so the entity can point
//! back into the buffer.
//!
//! ## Method Naming Convention
//!
//! - `try_parse_*` - Returns `Option<...>`, non-consuming
//! - `detect_function_start` - Start detection for the multi-line case,
//!   which the driver in `mod.rs` finishes with brace counting

use super::patterns::*;
use crate::model::{Alias, ExportedVariable, PathEntry, SourceDirective};
use crate::utils::path::expand_home;
use crate::utils::strings::{find_unquoted, strip_matching_quotes};

/// Drop a trailing `# comment` from a value, quote-aware.
///
/// The `#` must sit outside quotes and be preceded by whitespace (or start
/// the value); `y#z` stays intact, matching how the shell tokenizes.
pub(crate) fn strip_trailing_comment(value: &str) -> &str {
    let mut rest = value;
    let mut base = 0;
    while let Some(pos) = find_unquoted(&rest[base..], &['#']) {
        let at = base + pos;
        let at_word_start = at == 0
            || rest[..at]
                .chars()
                .next_back()
                .map(char::is_whitespace)
                .unwrap_or(false);
        if at_word_start {
            rest = &rest[..at];
            break;
        }
        base = at + 1;
    }
    rest.trim_end()
}

/// Unquote a captured right-hand side: trailing comment off, then one pair
/// of matching quotes.
fn clean_value(raw: &str) -> String {
    strip_matching_quotes(strip_trailing_comment(raw))
}

/// Try to parse an alias, enabled (`alias ll='ls -la'`) or disabled
/// (`# alias ll='ls -la'`). Both carry the same name and expansion.
pub fn try_parse_alias(line: &str, index: usize) -> Option<Alias> {
    if let Some(caps) = ALIAS_RE.captures(line) {
        return Some(Alias {
            name: caps[1].to_string(),
            expansion: clean_value(&caps[2]),
            enabled: true,
            source_line: index,
        });
    }
    if let Some(caps) = DISABLED_ALIAS_RE.captures(line) {
        return Some(Alias {
            name: caps[1].to_string(),
            expansion: clean_value(&caps[2]),
            enabled: false,
            source_line: index,
        });
    }
    None
}

/// Try to parse an `export NAME=VALUE` line.
///
/// Values containing a keychain lookup substitution are flagged as
/// keychain-backed; the substitution text itself is kept verbatim.
pub fn try_parse_export(line: &str, index: usize) -> Option<ExportedVariable> {
    let caps = EXPORT_RE.captures(line)?;
    let value = clean_value(&caps[2]);
    let keychain_backed = KEYCHAIN_LOOKUP_RE.is_match(&value);
    Some(ExportedVariable {
        name: caps[1].to_string(),
        value,
        keychain_backed,
        source_line: index,
    })
}

/// Try to parse a PATH line, either form:
///
/// - `export PATH=...` (full assignment)
/// - `PATH="dir:$PATH"` (prepend)
///
/// The directory list is split on `:` in order; `$PATH`/`${PATH}`
/// self-references are not directories and yield no entry.
pub fn try_parse_path(line: &str, index: usize) -> Option<Vec<PathEntry>> {
    let raw = if let Some(caps) = EXPORT_RE.captures(line) {
        if &caps[1] != "PATH" {
            return None;
        }
        caps[2].to_string()
    } else if let Some(caps) = PATH_PREPEND_RE.captures(line) {
        caps[1].to_string()
    } else {
        return None;
    };

    let list = clean_value(&raw);
    let mut entries = Vec::new();
    for segment in list.split(':') {
        let directory = segment.trim();
        if directory.is_empty() || directory == "$PATH" || directory == "${PATH}" {
            continue;
        }
        entries.push(PathEntry {
            directory: directory.to_string(),
            order: entries.len(),
            source_line: index,
        });
    }
    Some(entries)
}

/// Try to parse a `source FILE` / `. FILE` line, including the guarded
/// `[ -f FILE ] && source FILE` and `[[ ... ]] && ...` forms.
///
/// The guard is stripped and only the trailing command is parsed. The
/// resolved target has `~`, `$HOME`, and `${HOME}` expanded.
pub fn try_parse_source(line: &str, index: usize) -> Option<SourceDirective> {
    let (command, guarded) = match GUARDED_RE.captures(line) {
        Some(caps) => (caps.get(1).map(|m| m.as_str().trim().to_string())?, true),
        None => (line.to_string(), false),
    };

    let caps = SOURCE_RE.captures(&command)?;
    let raw_target = clean_value(&caps[1]);
    let target = expand_home(&raw_target);
    Some(SourceDirective {
        target,
        raw_target,
        guarded,
        source_line: index,
    })
}

/// Detect if a line starts a function definition.
///
/// Matches `name() {`, `function name() {`, and `function name {`. The
/// driver takes over from here with brace-depth tracking.
pub fn detect_function_start(line: &str) -> Option<String> {
    if let Some(caps) = FUNC_PAREN_RE.captures(line) {
        return Some(caps[1].to_string());
    }
    if let Some(caps) = FUNC_KEYWORD_RE.captures(line) {
        return Some(caps[1].to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_enabled() {
        let alias = try_parse_alias("alias ll='ls -la'", 3).unwrap();
        assert_eq!(alias.name, "ll");
        assert_eq!(alias.expansion, "ls -la");
        assert!(alias.enabled);
        assert_eq!(alias.source_line, 3);
    }

    #[test]
    fn test_alias_disabled_same_fields() {
        let alias = try_parse_alias("# alias ll='ls -la'", 0).unwrap();
        assert_eq!(alias.name, "ll");
        assert_eq!(alias.expansion, "ls -la");
        assert!(!alias.enabled);
    }

    #[test]
    fn test_alias_double_quoted() {
        let alias = try_parse_alias(r#"alias gs="git status""#, 0).unwrap();
        assert_eq!(alias.expansion, "git status");
    }

    #[test]
    fn test_alias_unquoted() {
        let alias = try_parse_alias("alias v=nvim", 0).unwrap();
        assert_eq!(alias.expansion, "nvim");
    }

    #[test]
    fn test_alias_mismatched_quotes_untouched() {
        let alias = try_parse_alias(r#"alias odd='broken""#, 0).unwrap();
        assert_eq!(alias.expansion, r#"'broken""#);
    }

    #[test]
    fn test_alias_trailing_comment() {
        let alias = try_parse_alias("alias ll='ls -la' # list long", 0).unwrap();
        assert_eq!(alias.expansion, "ls -la");
    }

    #[test]
    fn test_alias_hash_inside_quotes_kept() {
        let alias = try_parse_alias("alias x='echo # literal'", 0).unwrap();
        assert_eq!(alias.expansion, "echo # literal");
    }

    #[test]
    fn test_export_basic() {
        let var = try_parse_export("export EDITOR=nvim", 7).unwrap();
        assert_eq!(var.name, "EDITOR");
        assert_eq!(var.value, "nvim");
        assert!(!var.keychain_backed);
        assert_eq!(var.source_line, 7);
    }

    #[test]
    fn test_export_keychain_backed() {
        let var = try_parse_export(
            r#"export GITHUB_TOKEN="$(security find-generic-password -s github -a alice -w)""#,
            0,
        )
        .unwrap();
        assert!(var.keychain_backed);
        assert!(var.value.contains("find-generic-password"));
    }

    #[test]
    fn test_path_full_assignment() {
        let entries =
            try_parse_path(r#"export PATH="/usr/local/bin:$HOME/bin:$PATH""#, 2).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].directory, "/usr/local/bin");
        assert_eq!(entries[0].order, 0);
        assert_eq!(entries[1].directory, "$HOME/bin");
        assert_eq!(entries[1].order, 1);
        assert_eq!(entries[1].source_line, 2);
    }

    #[test]
    fn test_path_prepend_form() {
        let entries = try_parse_path(r#"PATH="$HOME/.cargo/bin:$PATH""#, 0).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].directory, "$HOME/.cargo/bin");
    }

    #[test]
    fn test_path_ignores_other_exports() {
        assert!(try_parse_path("export EDITOR=nvim", 0).is_none());
    }

    #[test]
    fn test_source_plain() {
        let src = try_parse_source("source ~/.aliases", 4).unwrap();
        assert_eq!(src.raw_target, "~/.aliases");
        assert!(!src.target.starts_with('~'));
        assert!(!src.guarded);
    }

    #[test]
    fn test_source_dot_form() {
        let src = try_parse_source(". ~/.profile", 0).unwrap();
        assert_eq!(src.raw_target, "~/.profile");
    }

    #[test]
    fn test_source_guarded() {
        let src = try_parse_source("[ -f ~/.fzf.bash ] && source ~/.fzf.bash", 9).unwrap();
        assert!(src.guarded);
        assert_eq!(src.raw_target, "~/.fzf.bash");
    }

    #[test]
    fn test_source_double_bracket_guard() {
        let src = try_parse_source("[[ -s ~/.nvm/nvm.sh ]] && . ~/.nvm/nvm.sh", 0).unwrap();
        assert!(src.guarded);
        assert_eq!(src.raw_target, "~/.nvm/nvm.sh");
    }

    #[test]
    fn test_guard_with_non_source_command() {
        assert!(try_parse_source("[ -x /usr/bin/fortune ] && /usr/bin/fortune", 0).is_none());
    }

    #[test]
    fn test_strip_trailing_comment_word_boundary() {
        assert_eq!(strip_trailing_comment("y#z"), "y#z");
        assert_eq!(strip_trailing_comment("y #z"), "y");
        assert_eq!(strip_trailing_comment("'a # b'"), "'a # b'");
    }

    #[test]
    fn test_detect_function_start() {
        assert_eq!(detect_function_start("greet() {"), Some("greet".into()));
        assert_eq!(
            detect_function_start("function hello() {"),
            Some("hello".into())
        );
        assert_eq!(detect_function_start("function mkcd {"), Some("mkcd".into()));
        assert_eq!(detect_function_start("echo hello"), None);
    }
}

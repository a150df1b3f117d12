//! Quote-aware string scanning helpers
//!
//! Shell and git-config lines both need the same primitive: walk the
//! characters of a line while tracking whether the cursor sits inside a
//! quoted region, so that `#`, `;`, braces, and `:` inside quotes are not
//! treated as syntax.

/// Strip one pair of matching surrounding quotes (`'...'` or `"..."`).
///
/// Quotes are removed exactly once; mismatched or unbalanced quote
/// characters leave the value untouched (apart from trimming).
///
/// ```
/// use dotrc::utils::strings::strip_matching_quotes;
///
/// assert_eq!(strip_matching_quotes("'ls -la'"), "ls -la");
/// assert_eq!(strip_matching_quotes("\"git status\""), "git status");
/// assert_eq!(strip_matching_quotes("'unbalanced\""), "'unbalanced\"");
/// assert_eq!(strip_matching_quotes("''"), "");
/// ```
pub fn strip_matching_quotes(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.len() >= 2
        && ((trimmed.starts_with('\'') && trimmed.ends_with('\''))
            || (trimmed.starts_with('"') && trimmed.ends_with('"')))
    {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.to_string()
    }
}

/// Net brace depth change of a line, ignoring braces inside single or
/// double quotes.
///
/// Used to find the closing line of a function body: a definition is
/// complete when the accumulated delta returns to zero.
pub fn brace_depth_delta(line: &str) -> i32 {
    let mut in_single = false;
    let mut in_double = false;
    let mut delta = 0;

    for c in line.chars() {
        match c {
            '\'' if !in_double => in_single = !in_single,
            '"' if !in_single => in_double = !in_double,
            '{' if !in_single && !in_double => delta += 1,
            '}' if !in_single && !in_double => delta -= 1,
            _ => {}
        }
    }

    delta
}

/// Position of the first occurrence of any of `needles` outside quotes.
///
/// Double quotes toggle an inside-quote flag unless preceded by a
/// backslash; single quotes toggle their own flag. Returns a byte offset
/// suitable for slicing.
pub fn find_unquoted(line: &str, needles: &[char]) -> Option<usize> {
    let mut in_single = false;
    let mut in_double = false;
    let mut escaped = false;

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '\'' if !in_double => in_single = !in_single,
            '"' if !in_single => in_double = !in_double,
            c if needles.contains(&c) && !in_single && !in_double => return Some(i),
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_matching_quotes_single() {
        assert_eq!(strip_matching_quotes("'hello'"), "hello");
    }

    #[test]
    fn test_strip_matching_quotes_double() {
        assert_eq!(strip_matching_quotes("\"hello\""), "hello");
    }

    #[test]
    fn test_strip_matching_quotes_none() {
        assert_eq!(strip_matching_quotes("hello"), "hello");
    }

    #[test]
    fn test_strip_matching_quotes_mismatched() {
        assert_eq!(strip_matching_quotes("'hello\""), "'hello\"");
    }

    #[test]
    fn test_strip_matching_quotes_exactly_once() {
        assert_eq!(strip_matching_quotes("''nested''"), "'nested'");
    }

    #[test]
    fn test_strip_matching_quotes_lone_quote() {
        // A single quote character is not a matched pair.
        assert_eq!(strip_matching_quotes("'"), "'");
    }

    #[test]
    fn test_brace_delta_simple() {
        assert_eq!(brace_depth_delta("greet() {"), 1);
        assert_eq!(brace_depth_delta("}"), -1);
        assert_eq!(brace_depth_delta("if true; then { :; }"), 0);
    }

    #[test]
    fn test_brace_delta_quoted_braces_ignored() {
        assert_eq!(brace_depth_delta(r#"  echo "hi {nested}""#), 0);
        assert_eq!(brace_depth_delta("echo '{ also ignored }'"), 0);
    }

    #[test]
    fn test_find_unquoted_basic() {
        assert_eq!(find_unquoted("a = b # c", &['#', ';']), Some(6));
        assert_eq!(find_unquoted("a = b ; c", &['#', ';']), Some(6));
    }

    #[test]
    fn test_find_unquoted_respects_quotes() {
        assert_eq!(find_unquoted(r#""a # b""#, &['#', ';']), None);
        assert_eq!(find_unquoted(r#""a # b" # real"#, &['#', ';']), Some(8));
    }

    #[test]
    fn test_find_unquoted_escaped_quote() {
        // The escaped quote does not close the string.
        assert_eq!(find_unquoted(r#""a \" # b""#, &['#']), None);
    }
}

//! Home-directory expansion for paths found in shell configuration
//!
//! Only `${HOME}`, `$HOME`, and a leading `~` are expanded; globs, other
//! variables, and command substitutions are left alone.

use std::path::Path;

/// Replace `${HOME}` and `$HOME` tokens, then a leading `~`, with the
/// given home directory.
pub fn expand_home_with(path: &str, home: &Path) -> String {
    let home_str = home.to_string_lossy();
    let expanded = path
        .replace("${HOME}", &home_str)
        .replace("$HOME", &home_str);

    if let Some(stripped) = expanded.strip_prefix('~') {
        // `~user` forms are someone else's home; leave them alone.
        if stripped.is_empty() {
            return home_str.into_owned();
        }
        if stripped.starts_with('/') {
            return format!("{}{}", home_str, stripped);
        }
    }

    expanded
}

/// Expand home references against the current user's home directory.
///
/// If no home directory can be determined the path is returned unchanged.
pub fn expand_home(path: &str) -> String {
    match dirs::home_dir() {
        Some(home) => expand_home_with(path, &home),
        None => path.to_string(),
    }
}

/// Replace a leading home-directory prefix with `~` for display.
pub fn contract_home(path: &str) -> String {
    if let Some(home) = dirs::home_dir() {
        let home_str = home.to_string_lossy();
        if let Some(rest) = path.strip_prefix(home_str.as_ref()) {
            if rest.is_empty() {
                return "~".to_string();
            }
            if rest.starts_with('/') {
                return format!("~{}", rest);
            }
        }
    }
    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn home() -> PathBuf {
        PathBuf::from("/home/alice")
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(
            expand_home_with("~/.bashrc", &home()),
            "/home/alice/.bashrc"
        );
    }

    #[test]
    fn test_expand_bare_tilde() {
        assert_eq!(expand_home_with("~", &home()), "/home/alice");
    }

    #[test]
    fn test_expand_home_var() {
        assert_eq!(
            expand_home_with("$HOME/bin", &home()),
            "/home/alice/bin"
        );
    }

    #[test]
    fn test_expand_braced_home_var() {
        assert_eq!(
            expand_home_with("${HOME}/.config", &home()),
            "/home/alice/.config"
        );
    }

    #[test]
    fn test_other_user_tilde_untouched() {
        assert_eq!(expand_home_with("~bob/.bashrc", &home()), "~bob/.bashrc");
    }

    #[test]
    fn test_other_variables_untouched() {
        assert_eq!(
            expand_home_with("$XDG_CONFIG_HOME/app", &home()),
            "$XDG_CONFIG_HOME/app"
        );
    }

    #[test]
    fn test_absolute_path_untouched() {
        assert_eq!(expand_home_with("/usr/local/bin", &home()), "/usr/local/bin");
    }
}

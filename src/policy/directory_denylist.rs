/// Accepts directory entries (paths ending in `/`) unless a denylist rule
/// rejects them.
///
/// With the default lists only the `.tekton/` prefix can reject anything:
/// the exact names and the `.md` suffix never end in `/`. They stay in the
/// denylist as written and only take effect when a config replaces them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryDenylist {
    exact: Vec<String>,
    prefixes: Vec<String>,
    suffixes: Vec<String>,
}

impl Default for DirectoryDenylist {
    fn default() -> Self {
        Self::with_overrides(None, None, None)
    }
}

impl DirectoryDenylist {
    pub const DEFAULT_EXACT: &'static [&'static str] = &[".gitignore", "OWNERS", "LICENSE"];
    pub const DEFAULT_PREFIXES: &'static [&'static str] = &[".tekton/"];
    pub const DEFAULT_SUFFIXES: &'static [&'static str] = &[".md"];

    pub fn new(exact: Vec<String>, prefixes: Vec<String>, suffixes: Vec<String>) -> Self {
        Self {
            exact,
            prefixes,
            suffixes,
        }
    }

    /// Build from optional lists; a missing list falls back to its default
    pub fn with_overrides(
        exact: Option<Vec<String>>,
        prefixes: Option<Vec<String>>,
        suffixes: Option<Vec<String>>,
    ) -> Self {
        Self::new(
            exact.unwrap_or_else(|| owned(Self::DEFAULT_EXACT)),
            prefixes.unwrap_or_else(|| owned(Self::DEFAULT_PREFIXES)),
            suffixes.unwrap_or_else(|| owned(Self::DEFAULT_SUFFIXES)),
        )
    }

    /// Returns the matched span (the whole path) when the path is accepted.
    pub fn evaluate<'a>(&self, path: &'a str) -> Option<&'a str> {
        if !path.ends_with('/') || self.is_denied(path) {
            return None;
        }
        Some(path)
    }

    fn is_denied(&self, path: &str) -> bool {
        self.exact.iter().any(|name| path == name)
            || self.prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
            || self.suffixes.iter().any(|suffix| path.ends_with(suffix.as_str()))
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_directories() {
        let policy = DirectoryDenylist::default();
        assert_eq!(policy.evaluate("docs/"), Some("docs/"));
        assert_eq!(policy.evaluate("internal/handlers/"), Some("internal/handlers/"));
        assert_eq!(policy.evaluate("OWNERS_dir/"), Some("OWNERS_dir/"));
    }

    #[test]
    fn test_rejects_non_directories() {
        let policy = DirectoryDenylist::default();
        for path in ["LICENSE", "OWNERS", ".gitignore", "README.md", "main.go", "docs"] {
            assert_eq!(policy.evaluate(path), None, "{} should not match", path);
        }
    }

    #[test]
    fn test_rejects_tekton_prefix() {
        let policy = DirectoryDenylist::default();
        assert_eq!(policy.evaluate(".tekton/"), None);
        assert_eq!(policy.evaluate(".tekton/pipelines/"), None);
        // Only the exact prefix counts
        assert_eq!(policy.evaluate(".tektonx/"), Some(".tektonx/"));
    }

    #[test]
    fn test_empty_path() {
        assert_eq!(DirectoryDenylist::default().evaluate(""), None);
    }

    #[test]
    fn test_custom_lists_apply_to_directories() {
        let policy = DirectoryDenylist::new(
            vec!["vendor/".to_string()],
            vec!["build/".to_string()],
            vec![".cache/".to_string()],
        );
        assert_eq!(policy.evaluate("vendor/"), None);
        assert_eq!(policy.evaluate("vendor/modules/"), Some("vendor/modules/"));
        assert_eq!(policy.evaluate("build/out/"), None);
        assert_eq!(policy.evaluate("tools/.cache/"), None);
        // Replaced lists drop the defaults
        assert_eq!(policy.evaluate(".tekton/"), Some(".tekton/"));
    }
}

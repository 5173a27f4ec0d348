pub mod directory_denylist;
pub mod known_paths;

pub use directory_denylist::DirectoryDenylist;
pub use known_paths::KnownPaths;

use crate::config::Config;
use crate::errors::Result;
use clap::ValueEnum;
use serde::Deserialize;

/// Named filtering policy selectable from the command line or config
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    /// Any directory entry except a fixed denylist
    DirectoryDenylist,
    /// A fixed allowlist of project scaffolding paths
    KnownPaths,
}

/// Compiled filtering policy. Evaluation is pure and total.
#[derive(Debug, Clone)]
pub enum Policy {
    DirectoryDenylist(DirectoryDenylist),
    KnownPaths(KnownPaths),
}

impl Policy {
    /// Build the selected policy, taking list overrides from the config
    pub fn build(kind: PolicyKind, config: &Config) -> Result<Self> {
        match kind {
            PolicyKind::DirectoryDenylist => {
                let section = &config.directory_denylist;
                Ok(Policy::DirectoryDenylist(DirectoryDenylist::with_overrides(
                    section.exact.clone(),
                    section.prefixes.clone(),
                    section.suffixes.clone(),
                )))
            }
            PolicyKind::KnownPaths => match &config.known_paths.patterns {
                Some(patterns) => Ok(Policy::KnownPaths(KnownPaths::compile(patterns.as_slice())?)),
                None => Ok(Policy::KnownPaths(KnownPaths::with_defaults()?)),
            },
        }
    }

    pub fn kind(&self) -> PolicyKind {
        match self {
            Policy::DirectoryDenylist(_) => PolicyKind::DirectoryDenylist,
            Policy::KnownPaths(_) => PolicyKind::KnownPaths,
        }
    }

    /// Evaluate a normalized path, returning the matched span if any
    pub fn evaluate<'a>(&self, normalized: &'a str) -> Option<&'a str> {
        match self {
            Policy::DirectoryDenylist(policy) => policy.evaluate(normalized),
            Policy::KnownPaths(policy) => policy.evaluate(normalized),
        }
    }

    #[cfg(test)]
    pub fn matches(&self, normalized: &str) -> bool {
        self.evaluate(normalized).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(kind: PolicyKind) -> Policy {
        Policy::build(kind, &Config::default()).unwrap()
    }

    #[test]
    fn test_build_defaults() {
        assert_eq!(
            policy(PolicyKind::DirectoryDenylist).kind(),
            PolicyKind::DirectoryDenylist
        );
        assert_eq!(policy(PolicyKind::KnownPaths).kind(), PolicyKind::KnownPaths);
    }

    #[test]
    fn test_directory_denylist_examples() {
        let policy = policy(PolicyKind::DirectoryDenylist);
        assert!(policy.matches("docs/"));
        assert!(!policy.matches(".tekton/pipelines/"));
        assert!(!policy.matches("LICENSE"));
        assert!(!policy.matches("README.md"));
    }

    #[test]
    fn test_known_paths_examples() {
        let policy = policy(PolicyKind::KnownPaths);
        assert!(policy.matches("pkg/foo.go"));
        assert!(policy.matches("main.go"));
        assert!(policy.matches("Dockerfile.worker"));
        assert!(!policy.matches("README.md"));
        assert!(!policy.matches("internal"));
    }

    #[test]
    fn test_empty_string_matches_neither_policy() {
        assert!(!policy(PolicyKind::DirectoryDenylist).matches(""));
        assert!(!policy(PolicyKind::KnownPaths).matches(""));
    }

    #[test]
    fn test_evaluation_is_repeatable() {
        let inputs = ["docs/", "pkg/a.go", "", ".tekton/", "go.mod", "weird path/"];
        for kind in [PolicyKind::DirectoryDenylist, PolicyKind::KnownPaths] {
            let policy = policy(kind);
            for input in inputs {
                assert_eq!(policy.evaluate(input), policy.evaluate(input));
            }
        }
    }

    #[test]
    fn test_directory_denylist_only_matches_trailing_separator() {
        let policy = policy(PolicyKind::DirectoryDenylist);
        for input in ["a", "a/b", "dir/file.txt", "x.md", ".gitignore", "OWNERS"] {
            assert!(!policy.matches(input), "{} should not match", input);
        }
        for input in ["a/", "a/b/", "hack/", "weird name/"] {
            assert!(policy.matches(input), "{} should match", input);
        }
    }

    #[test]
    fn test_config_overrides_lists() {
        let config: Config = toml::from_str(
            r#"
            [known-paths]
            patterns = ["src/*", "Cargo.toml"]

            [directory-denylist]
            prefixes = ["target/"]
            "#,
        )
        .unwrap();

        let known = Policy::build(PolicyKind::KnownPaths, &config).unwrap();
        assert!(known.matches("src/main.rs"));
        assert!(known.matches("Cargo.toml"));
        assert!(!known.matches("main.go"));

        let denylist = Policy::build(PolicyKind::DirectoryDenylist, &config).unwrap();
        assert!(!denylist.matches("target/debug/"));
        assert!(denylist.matches(".tekton/"));
    }
}

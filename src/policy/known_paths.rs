use crate::errors::{AppError, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

/// Allowlist of expected project scaffolding, matched against the whole
/// normalized path. `*` spans any characters, separators included.
#[derive(Debug, Clone)]
pub struct KnownPaths {
    patterns: Vec<String>,
    globset: GlobSet,
}

impl KnownPaths {
    pub const DEFAULT_PATTERNS: &'static [&'static str] = &[
        "deploy/*",
        "hack/*",
        "integration_test/*",
        "internal/*",
        "packages/*",
        "pkg/*",
        "rpm-prefetching/*",
        "Dockerfile.*",
        "Makefile",
        "go.mod",
        "go.sum",
        ".dockerignore",
        "build_deploy.sh",
        "main.go",
        "renovate.json",
    ];

    pub fn with_defaults() -> Result<Self> {
        Self::compile(Self::DEFAULT_PATTERNS)
    }

    /// Compile allowlist patterns into a single glob set
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let glob = GlobBuilder::new(pattern)
                .literal_separator(false)
                .case_insensitive(false)
                .build()
                .map_err(|e| AppError::InvalidPattern(format!("'{}': {}", pattern, e)))?;
            builder.add(glob);
        }
        let globset = builder.build().map_err(|e| {
            AppError::InvalidPattern(format!("failed to build allowlist: {}", e))
        })?;

        Ok(Self {
            patterns: patterns.iter().map(|p| p.as_ref().to_string()).collect(),
            globset,
        })
    }

    #[cfg(test)]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Returns the matched span (the whole path) when the path is allowlisted.
    pub fn evaluate<'a>(&self, path: &'a str) -> Option<&'a str> {
        if path.is_empty() || !self.globset.is_match(path) {
            return None;
        }
        Some(path)
    }
}

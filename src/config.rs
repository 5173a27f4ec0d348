use crate::errors::{AppError, Result};
use crate::policy::PolicyKind;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the root directory
pub const LOCAL_CONFIG_NAME: &str = ".pathcheck.toml";

/// Overrides the per-user config directory (normally `<config_dir>/pathcheck`)
pub const CONFIG_DIR_ENV: &str = "PATHCHECK_CONFIG_DIR";

/// Config file name inside the per-user config directory
pub const USER_CONFIG_NAME: &str = "config.toml";

/// Optional policy overrides loaded from TOML.
///
/// Every list is optional; a missing list keeps the built-in default and a
/// present list replaces it entirely.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Policy used when `--policy` is not given
    pub policy: Option<PolicyKind>,
    pub directory_denylist: DirectoryDenylistConfig,
    pub known_paths: KnownPathsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DirectoryDenylistConfig {
    pub exact: Option<Vec<String>>,
    pub prefixes: Option<Vec<String>>,
    pub suffixes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KnownPathsConfig {
    pub patterns: Option<Vec<String>>,
}

impl Config {
    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the config to use.
    ///
    /// An explicit path must exist. Otherwise `.pathcheck.toml` in the root
    /// is used, then `config.toml` in `user_dir`. Returns the default config
    /// when nothing is found.
    pub fn discover(
        explicit: Option<&Path>,
        root: &Path,
        user_dir: Option<&Path>,
    ) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        let mut candidates = vec![root.join(LOCAL_CONFIG_NAME)];
        if let Some(dir) = user_dir {
            candidates.push(dir.join(USER_CONFIG_NAME));
        }

        for candidate in candidates {
            if candidate.is_file() {
                return Ok((Self::load(&candidate)?, Some(candidate)));
            }
        }

        Ok((Self::default(), None))
    }

    /// Per-user config directory: `$PATHCHECK_CONFIG_DIR` when set and
    /// non-empty, else `pathcheck` under the platform config directory.
    pub fn user_dir() -> Option<PathBuf> {
        match std::env::var_os(CONFIG_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
            _ => dirs::config_dir().map(|dir| dir.join("pathcheck")),
        }
    }
}

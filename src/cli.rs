use crate::lister::{ListerKind, DEFAULT_MAX_DEPTH};
use crate::policy::PolicyKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "pathcheck")]
#[command(version)]
#[command(about = "Lists a directory tree and reports which paths a filtering policy accepts")]
#[command(
    long_about = "Lists the entries of a directory tree up to a fixed depth and prints, for each \
path, whether the selected policy accepts it.\n\nEach path is printed with its leading './' \
removed, followed by True or False. Set RUST_LOG=debug for per-path logging."
)]
pub struct Args {
    /// Filtering policy (defaults to the config file's policy, then directory-denylist)
    #[arg(short = 'p', long = "policy", value_enum)]
    pub policy: Option<PolicyKind>,

    /// Maximum listing depth below the root
    #[arg(short = 'L', long = "max-depth", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// How entries are listed
    #[arg(long = "lister", value_enum, default_value = "walk")]
    pub lister: ListerKind,

    /// Read raw paths from stdin (newline-delimited) instead of listing
    #[arg(long = "stdin", conflicts_with = "lister")]
    pub stdin: bool,

    /// Sort walked entries by file name
    #[arg(long = "sort")]
    pub sort: bool,

    /// TOML file overriding the policy lists
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Only print the `<path>, <True|False>` line for each path
    #[arg(long = "no-diagnostics")]
    pub no_diagnostics: bool,

    /// Directory to list (defaults to current directory)
    #[arg(default_value = ".")]
    pub directory: PathBuf,
}

impl Args {
    /// CLI flag wins, then the config file, then directory-denylist
    pub fn effective_policy(&self, configured: Option<PolicyKind>) -> PolicyKind {
        self.policy
            .or(configured)
            .unwrap_or(PolicyKind::DirectoryDenylist)
    }
}

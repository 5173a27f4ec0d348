pub mod find;
pub mod stdin;
pub mod walk;

pub use find::FindLister;
pub use stdin::StdinLister;
pub use walk::WalkLister;

use crate::errors::{AppError, Result};
use clap::ValueEnum;
use std::fs;
use std::io;
use std::path::Path;

/// Default listing depth below the root
pub const DEFAULT_MAX_DEPTH: usize = 2;

/// Source of raw path lines, one per entry, in emission order
pub trait PathLister {
    fn list(&mut self, root: &Path, max_depth: usize) -> Result<Vec<String>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListerKind {
    /// Walk the directory in-process, marking directories with a trailing `/`
    Walk,
    /// Run `find ./ -maxdepth N` inside the root
    Find,
}

/// Fail early when the root is missing, not a directory, or unreadable
pub(crate) fn ensure_root(root: &Path) -> Result<()> {
    let metadata = fs::metadata(root).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AppError::RootNotFound(root.to_path_buf()),
        _ => AppError::Io(e),
    })?;
    if !metadata.is_dir() {
        return Err(AppError::NotADirectory(root.to_path_buf()));
    }
    fs::read_dir(root)?;
    Ok(())
}

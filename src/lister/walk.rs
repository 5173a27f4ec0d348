use super::{ensure_root, PathLister};
use crate::errors::{AppError, Result};
use crate::util::path::{relative_to, to_listed};
use ignore::WalkBuilder;
use std::path::Path;

/// In-process lister built on `ignore::WalkBuilder` with every filter off,
/// so hidden and gitignored entries are listed like `find` would.
#[derive(Debug, Clone, Default)]
pub struct WalkLister {
    sort: bool,
}

impl WalkLister {
    pub fn new(sort: bool) -> Self {
        Self { sort }
    }
}

impl PathLister for WalkLister {
    fn list(&mut self, root: &Path, max_depth: usize) -> Result<Vec<String>> {
        ensure_root(root)?;

        let mut walker = WalkBuilder::new(root);
        walker
            .hidden(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .parents(false)
            .ignore(false)
            .follow_links(false)
            .max_depth(Some(max_depth));
        if self.sort {
            walker.sort_by_file_name(|a, b| a.cmp(b));
        }

        let mut listed = Vec::new();
        for entry in walker.build() {
            let entry = match entry {
                Ok(e) => e,
                // Nothing listed yet means the root itself failed
                Err(e) if listed.is_empty() => return Err(AppError::Walk(e)),
                Err(e) => {
                    log::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            let rel = relative_to(entry.path(), root);
            let rel_str = match rel.to_str() {
                Some(s) => s,
                None => {
                    log::warn!("Skipping non-UTF8 path: {:?}", entry.path());
                    continue;
                }
            };

            let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
            listed.push(to_listed(rel_str, is_dir));
        }

        log::debug!("walk listed {} entries under {}", listed.len(), root.display());
        Ok(listed)
    }
}

use super::PathLister;
use crate::errors::Result;
use std::io::{self, BufRead};
use std::path::Path;

/// Reads raw path lines from a reader (standard input by default) instead
/// of listing the filesystem. Root and depth are ignored; blank lines are
/// skipped and everything else is passed through untouched.
pub struct StdinLister<R> {
    reader: R,
}

impl StdinLister<io::StdinLock<'static>> {
    pub fn from_stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> StdinLister<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> PathLister for StdinLister<R> {
    fn list(&mut self, _root: &Path, _max_depth: usize) -> Result<Vec<String>> {
        let mut listed = Vec::new();
        for line in (&mut self.reader).lines() {
            let line = line?;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            listed.push(line.to_string());
        }
        log::debug!("read {} paths from stdin", listed.len());
        Ok(listed)
    }
}

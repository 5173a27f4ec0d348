use super::{ensure_root, PathLister};
use crate::errors::{AppError, Result};
use std::path::Path;
use std::process::Command;

/// Lists entries by running `find ./ -maxdepth N` inside the root.
///
/// Lines are returned verbatim: `find` does not mark directories with a
/// trailing `/`, so only the root entry (`./`) carries one.
#[derive(Debug, Clone)]
pub struct FindLister {
    program: String,
}

impl Default for FindLister {
    fn default() -> Self {
        Self::with_program("find")
    }
}

impl FindLister {
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn args(max_depth: usize) -> Vec<String> {
        vec!["./".to_string(), "-maxdepth".to_string(), max_depth.to_string()]
    }
}

impl PathLister for FindLister {
    fn list(&mut self, root: &Path, max_depth: usize) -> Result<Vec<String>> {
        ensure_root(root)?;

        let args = Self::args(max_depth);
        let command = format!("{} {}", self.program, args.join(" "));
        log::debug!("running `{}` in {}", command, root.display());

        let output = Command::new(&self.program)
            .args(&args)
            .current_dir(root)
            .output()?;

        if !output.status.success() {
            return Err(AppError::ListerFailed {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}

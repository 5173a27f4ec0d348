use crate::errors::Result;
use crate::lister::PathLister;
use crate::policy::Policy;
use crate::record::PathRecord;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy)]
pub struct DriverOptions {
    pub max_depth: usize,
    /// Print the matched-span line before each verdict
    pub diagnostics: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub matched: usize,
}

/// List, evaluate, and print every path in listing order
pub fn run<L, W>(
    lister: &mut L,
    root: &Path,
    policy: &Policy,
    options: DriverOptions,
    out: &mut W,
) -> Result<Summary>
where
    L: PathLister + ?Sized,
    W: Write,
{
    let listed = lister.list(root, options.max_depth)?;

    let mut summary = Summary::default();
    for raw in listed {
        let record = PathRecord::evaluate(raw, policy);
        log::debug!(
            "{:?} -> {:?} matched={}",
            record.raw(),
            record.normalized(),
            record.matched()
        );

        if options.diagnostics {
            writeln!(out, "{}", record.diagnostic())?;
        }
        writeln!(out, "{}", record)?;

        summary.total += 1;
        if record.matched() {
            summary.matched += 1;
        }
    }
    out.flush()?;

    Ok(summary)
}

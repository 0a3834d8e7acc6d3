//! `sfv create <paths>... -o <file>` – write a new SFV manifest.

use anyhow::Result;
use sfv_core::session;
use sfv_core::verify::VerifyOptions;
use std::path::{Path, PathBuf};

use crate::cli::output::with_progress;

pub fn run_create(paths: &[PathBuf], output: &Path, opts: VerifyOptions) -> Result<()> {
    let results = with_progress(|tx| session::create_manifest(paths, output, &opts, tx))?;
    let skipped = paths.len().saturating_sub(results.len());
    println!("Wrote {} entries to {}", results.len(), output.display());
    if skipped > 0 {
        eprintln!("{skipped} path(s) skipped (unreadable or the output itself)");
    }
    Ok(())
}

//! `sfv check <manifest>` – verify the files a manifest lists.

use anyhow::{Context, Result};
use sfv_core::session;
use sfv_core::verify::VerifyOptions;
use std::path::Path;

use crate::cli::output::{print_results, with_progress};

/// Returns false on any mismatch or unreadable listed file.
pub fn run_check(manifest: &Path, opts: VerifyOptions, json: bool) -> Result<bool> {
    let report = with_progress(|tx| session::check_manifest(manifest, &opts, tx))
        .with_context(|| format!("check {}", manifest.display()))?;
    print_results(&report.results, json)?;
    for name in &report.missing {
        eprintln!("missing: {name}");
    }
    Ok(report.summary().all_ok() && report.missing.is_empty())
}

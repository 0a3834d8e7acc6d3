//! `sfv verify <paths>...` – checksum files against a manifest among the paths.

use anyhow::Result;
use sfv_core::config::SfvConfig;
use sfv_core::session;
use sfv_core::verify::VerifyOptions;
use std::path::PathBuf;

use crate::cli::output::{print_results, with_progress};

/// Returns whether every checked file matched.
pub fn run_verify(
    cfg: &SfvConfig,
    paths: &[PathBuf],
    opts: VerifyOptions,
    json: bool,
) -> Result<bool> {
    let report = with_progress(|tx| session::verify_paths(paths, cfg, &opts, tx));
    if let Some(err) = &report.manifest_error {
        eprintln!("warning: {err}; files are reported as not checked");
    }
    print_results(&report.results, json)?;
    Ok(report.summary().all_ok())
}

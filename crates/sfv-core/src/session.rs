//! One verification run as a front end drives it: split inputs, read the
//! manifest if any, checksum the data files.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

use anyhow::{Context, Result};

use crate::config::SfvConfig;
use crate::error::ManifestError;
use crate::inputs;
use crate::manifest::{self, ManifestEntry};
use crate::verify::{self, BatchSummary, VerificationResult, VerifyOptions, VerifyProgress};

/// Outcome of a run. Results are in input order.
#[derive(Debug)]
pub struct SessionReport {
    pub manifest: Option<PathBuf>,
    /// Set when the manifest was given but could not be read; the run
    /// then proceeds without expected values.
    pub manifest_error: Option<ManifestError>,
    pub results: Vec<VerificationResult>,
    /// Manifest filenames with no result (only filled by `check_manifest`).
    pub missing: Vec<String>,
}

impl SessionReport {
    pub fn summary(&self) -> BatchSummary {
        BatchSummary::from_results(&self.results)
    }
}

/// Verify data files, using the first manifest among `paths` (by extension)
/// for expected values. An unreadable manifest is recorded, not fatal.
pub fn verify_paths(
    paths: &[PathBuf],
    cfg: &SfvConfig,
    opts: &VerifyOptions,
    progress: Option<Sender<VerifyProgress>>,
) -> SessionReport {
    let split = inputs::partition(paths.iter().cloned(), &cfg.manifest_extension);

    let (parsed, manifest_error) = match &split.manifest {
        Some(p) => match manifest::read_manifest(p) {
            Ok(m) => (Some(m), None),
            Err(e) => {
                tracing::warn!("continuing without expected values: {}", e);
                (None, Some(e))
            }
        },
        None => (None, None),
    };

    let results = verify::verify_batch_with(&split.data, parsed.as_ref(), opts, progress);
    SessionReport {
        manifest: split.manifest,
        manifest_error,
        results,
        missing: Vec::new(),
    }
}

/// Verify every file a manifest lists, resolved against the manifest's
/// directory, in the manifest's first-seen order. Names may include
/// subdirectories; expected values are matched by the listed name.
pub fn check_manifest(
    manifest_path: &Path,
    opts: &VerifyOptions,
    progress: Option<Sender<VerifyProgress>>,
) -> Result<SessionReport, ManifestError> {
    let parsed = manifest::read_manifest(manifest_path)?;
    let base = manifest_path.parent().unwrap_or_else(|| Path::new(""));
    let listed: Vec<(PathBuf, ManifestEntry)> = parsed
        .iter()
        .map(|e| (base.join(&e.filename), e))
        .collect();
    let data: Vec<PathBuf> = listed.iter().map(|(p, _)| p.clone()).collect();
    let expected: HashMap<&Path, u32> = listed
        .iter()
        .map(|(p, e)| (p.as_path(), e.expected_crc32))
        .collect();

    let mut results = verify::verify_batch_with(&data, None, opts, progress);
    for r in &mut results {
        r.expected_crc32 = expected.get(r.path.as_path()).copied();
    }

    let found: HashSet<&Path> = results.iter().map(|r| r.path.as_path()).collect();
    let missing: Vec<String> = listed
        .iter()
        .filter(|(p, _)| !found.contains(p.as_path()))
        .map(|(_, e)| e.filename.clone())
        .collect();
    for name in &missing {
        tracing::warn!(file = %name, "listed in manifest but not readable");
    }
    Ok(SessionReport {
        manifest: Some(manifest_path.to_path_buf()),
        manifest_error: None,
        results,
        missing,
    })
}

/// Checksum `paths` and write them to `out` as an SFV manifest in input
/// order. `out` itself is skipped if it appears among the inputs.
pub fn create_manifest(
    paths: &[PathBuf],
    out: &Path,
    opts: &VerifyOptions,
    progress: Option<Sender<VerifyProgress>>,
) -> Result<Vec<VerificationResult>> {
    let data: Vec<PathBuf> = paths
        .iter()
        .filter(|p| !same_file(p, out))
        .cloned()
        .collect();
    let results = verify::verify_batch_with(&data, None, opts, progress);
    manifest::write_manifest(
        out,
        results
            .iter()
            .map(|r| (r.filename.as_str(), r.computed_crc32)),
    )
    .with_context(|| format!("write manifest {}", out.display()))?;
    tracing::info!(path = %out.display(), entries = results.len(), "created manifest");
    Ok(results)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

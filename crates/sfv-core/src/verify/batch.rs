//! Batch verification over a list of paths.
//!
//! Unreadable files are dropped from the result list. Results always come
//! back in input order, whether the batch ran on one thread or several.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Mutex;
use std::thread;

use super::progress::VerifyProgress;
use super::result::VerificationResult;
use crate::checksum::{self, BUF_SIZE};
use crate::error::ChecksumError;
use crate::inputs::basename;
use crate::manifest::Manifest;

/// Tuning for `verify_batch_with`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyOptions {
    /// Worker threads; 1 runs on the calling thread.
    pub jobs: usize,
    /// Read buffer size per file.
    pub buf_size: usize,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            jobs: 1,
            buf_size: BUF_SIZE,
        }
    }
}

/// Checksum one file and look its basename up in `manifest`.
/// Returns the result and the number of bytes read.
pub fn verify_one(
    path: &Path,
    manifest: Option<&Manifest>,
    buf_size: usize,
) -> Result<(VerificationResult, u64), ChecksumError> {
    let (computed_crc32, size) = checksum::crc32_path_sized(path, buf_size)?;
    let filename = basename(path);
    let expected_crc32 = manifest.and_then(|m| m.get(&filename));
    Ok((
        VerificationResult {
            path: path.to_path_buf(),
            filename,
            computed_crc32,
            expected_crc32,
        },
        size,
    ))
}

/// Sequential batch with default options and no progress reporting.
pub fn verify_batch(paths: &[PathBuf], manifest: Option<&Manifest>) -> Vec<VerificationResult> {
    verify_batch_with(paths, manifest, &VerifyOptions::default(), None)
}

/// Shared counters; one lock so every snapshot is consistent.
#[derive(Default)]
struct Tally {
    files_done: usize,
    bytes_done: u64,
    skipped: usize,
}

impl Tally {
    fn record(&mut self, outcome: Result<u64, ()>, files_total: usize) -> VerifyProgress {
        self.files_done += 1;
        match outcome {
            Ok(bytes) => self.bytes_done += bytes,
            Err(()) => self.skipped += 1,
        }
        VerifyProgress {
            files_done: self.files_done,
            files_total,
            bytes_done: self.bytes_done,
            skipped: self.skipped,
        }
    }
}

fn run_file(
    path: &Path,
    manifest: Option<&Manifest>,
    buf_size: usize,
) -> (Option<VerificationResult>, Result<u64, ()>) {
    match verify_one(path, manifest, buf_size) {
        Ok((result, size)) => {
            tracing::debug!(
                path = %path.display(),
                crc = %format!("{:08X}", result.computed_crc32),
                status = ?result.status(),
                "verified"
            );
            (Some(result), Ok(size))
        }
        Err(e) => {
            tracing::warn!("skipping unreadable file: {}", e);
            (None, Err(()))
        }
    }
}

/// Verify `paths` against `manifest`. With `opts.jobs > 1` files are
/// checksummed on that many scoped worker threads. A progress snapshot is
/// sent after each file; a closed receiver is ignored.
pub fn verify_batch_with(
    paths: &[PathBuf],
    manifest: Option<&Manifest>,
    opts: &VerifyOptions,
    progress: Option<Sender<VerifyProgress>>,
) -> Vec<VerificationResult> {
    let files_total = paths.len();
    let workers = opts.jobs.max(1).min(files_total.max(1));
    tracing::info!(files = files_total, workers, "verifying batch");

    if workers == 1 {
        let mut tally = Tally::default();
        let mut results = Vec::with_capacity(files_total);
        for path in paths {
            let (result, outcome) = run_file(path, manifest, opts.buf_size);
            results.extend(result);
            let snapshot = tally.record(outcome, files_total);
            if let Some(tx) = &progress {
                let _ = tx.send(snapshot);
            }
        }
        return results;
    }

    let next = AtomicUsize::new(0);
    let slots: Mutex<Vec<Option<VerificationResult>>> = Mutex::new(vec![None; files_total]);
    let tally = Mutex::new(Tally::default());

    thread::scope(|s| {
        for _ in 0..workers {
            let tx = progress.clone();
            let (next, slots, tally) = (&next, &slots, &tally);
            s.spawn(move || loop {
                let i = next.fetch_add(1, Ordering::Relaxed);
                let Some(path) = paths.get(i) else {
                    break;
                };
                let (result, outcome) = run_file(path, manifest, opts.buf_size);
                if let Some(r) = result {
                    if let Ok(mut slots) = slots.lock() {
                        slots[i] = Some(r);
                    }
                }
                let snapshot = match tally.lock() {
                    Ok(mut t) => t.record(outcome, files_total),
                    Err(_) => continue,
                };
                if let Some(tx) = &tx {
                    let _ = tx.send(snapshot);
                }
            });
        }
    });

    slots
        .into_inner()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .into_iter()
        .flatten()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::crc32;
    use crate::manifest::ManifestEntry;
    use crate::verify::Status;
    use std::fs;
    use std::sync::mpsc;

    fn write(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
        let p = dir.join(name);
        fs::write(&p, data).unwrap();
        p
    }

    fn manifest(entries: &[(&str, u32)]) -> Manifest {
        entries
            .iter()
            .map(|(n, c)| ManifestEntry {
                filename: n.to_string(),
                expected_crc32: *c,
            })
            .collect()
    }

    #[test]
    fn match_mismatch_not_checked() {
        let dir = tempfile::tempdir().unwrap();
        let p1 = write(dir.path(), "file1", b"alpha");
        let p2 = write(dir.path(), "file2", b"beta");
        let p3 = write(dir.path(), "file3", b"gamma");
        let m = manifest(&[("file1", crc32(b"alpha")), ("file2", crc32(b"beta") ^ 1)]);

        let results = verify_batch(&[p1.clone(), p2, p3], Some(&m));
        let statuses: Vec<Status> = results.iter().map(|r| r.status()).collect();
        assert_eq!(
            statuses,
            vec![Status::Match, Status::Mismatch, Status::NotChecked]
        );
        assert_eq!(results[0].path, p1);
        assert_eq!(results[0].filename, "file1");
        assert_eq!(results[0].computed_crc32, crc32(b"alpha"));
    }

    #[test]
    fn no_manifest_means_not_checked() {
        let dir = tempfile::tempdir().unwrap();
        let p = write(dir.path(), "x", b"data");
        let results = verify_batch(&[p], None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status(), Status::NotChecked);
        assert_eq!(results[0].expected_crc32, None);
    }

    #[test]
    fn unreadable_files_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a", b"1");
        let missing = dir.path().join("missing");
        let b = write(dir.path(), "b", b"2");
        let results = verify_batch(&[a.clone(), missing, b.clone()], None);
        let paths: Vec<_> = results.iter().map(|r| r.path.clone()).collect();
        assert_eq!(paths, vec![a, b]);
    }

    #[test]
    fn repeated_paths_yield_repeated_results() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a", b"same");
        let results = verify_batch(&[a.clone(), a.clone()], None);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0], results[1]);
    }

    #[test]
    fn parallel_preserves_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let paths: Vec<PathBuf> = (0..40)
            .map(|i| {
                let size = (40 - i) * 997;
                let data: Vec<u8> = (0..size).map(|b| (b * 31 + i) as u8).collect();
                write(dir.path(), &format!("f{i:02}"), &data)
            })
            .collect();
        let sequential = verify_batch(&paths, None);
        let opts = VerifyOptions {
            jobs: 4,
            buf_size: 512,
        };
        let parallel = verify_batch_with(&paths, None, &opts, None);
        assert_eq!(parallel, sequential);
        let names: Vec<_> = parallel.iter().map(|r| r.filename.clone()).collect();
        let expected: Vec<_> = (0..40).map(|i| format!("f{i:02}")).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn progress_reports_every_file() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a", b"12345");
        let b = write(dir.path(), "b", b"123");
        let missing = dir.path().join("gone");
        let (tx, rx) = mpsc::channel();
        let opts = VerifyOptions {
            jobs: 2,
            ..VerifyOptions::default()
        };
        let results = verify_batch_with(&[a, missing, b], None, &opts, Some(tx));
        assert_eq!(results.len(), 2);

        let snapshots: Vec<VerifyProgress> = rx.iter().collect();
        assert_eq!(snapshots.len(), 3);
        let last = snapshots.iter().max_by_key(|p| p.files_done).unwrap();
        assert_eq!(last.files_done, 3);
        assert_eq!(last.files_total, 3);
        assert_eq!(last.bytes_done, 8);
        assert_eq!(last.skipped, 1);
        assert!(last.is_finished());
    }

    #[test]
    fn empty_batch() {
        assert!(verify_batch(&[], None).is_empty());
        let opts = VerifyOptions {
            jobs: 8,
            ..VerifyOptions::default()
        };
        assert!(verify_batch_with(&[], None, &opts, None).is_empty());
    }
}

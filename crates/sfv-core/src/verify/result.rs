//! Per-file verification result and batch summary.

use super::status::{classify, Status};
use serde::Serialize;
use std::path::PathBuf;

/// Outcome for one data file. `status()` is computed, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    pub path: PathBuf,
    /// Basename of `path`; the manifest lookup key.
    pub filename: String,
    pub computed_crc32: u32,
    pub expected_crc32: Option<u32>,
}

impl VerificationResult {
    pub fn status(&self) -> Status {
        classify(self.computed_crc32, self.expected_crc32)
    }
}

/// Counts per status over a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub matched: usize,
    pub mismatched: usize,
    pub not_checked: usize,
}

impl BatchSummary {
    pub fn from_results(results: &[VerificationResult]) -> Self {
        let mut s = Self::default();
        for r in results {
            match r.status() {
                Status::Match => s.matched += 1,
                Status::Mismatch => s.mismatched += 1,
                Status::NotChecked => s.not_checked += 1,
            }
        }
        s
    }

    pub fn total(&self) -> usize {
        self.matched + self.mismatched + self.not_checked
    }

    /// True when nothing mismatched.
    pub fn all_ok(&self) -> bool {
        self.mismatched == 0
    }
}

#[derive(Serialize)]
struct ResultRecord<'a> {
    path: String,
    filename: &'a str,
    computed: String,
    expected: Option<String>,
    status: Status,
}

#[derive(Serialize)]
struct Report<'a> {
    results: Vec<ResultRecord<'a>>,
    summary: BatchSummary,
}

/// JSON report: one record per result (CRCs as 8-digit hex) plus the summary.
pub fn results_to_json(results: &[VerificationResult]) -> serde_json::Result<String> {
    let records = results
        .iter()
        .map(|r| ResultRecord {
            path: r.path.display().to_string(),
            filename: &r.filename,
            computed: format!("{:08X}", r.computed_crc32),
            expected: r.expected_crc32.map(|e| format!("{e:08X}")),
            status: r.status(),
        })
        .collect();
    serde_json::to_string_pretty(&Report {
        results: records,
        summary: BatchSummary::from_results(results),
    })
}

//! SFV manifest codec.
//!
//! One entry per line: `<filename> <crc32 hex>`. The filename may contain
//! spaces; the checksum is whatever follows the last space.

mod parse;
mod write;

pub use parse::{parse, parse_line, read_manifest, LineOutcome, SkipReason};
pub use write::{format_line, serialize, write_manifest, TEMP_SUFFIX};

use std::collections::HashMap;

/// One parsed manifest line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub filename: String,
    pub expected_crc32: u32,
}

/// Parsed manifest: filename to expected CRC-32. Last entry for a name wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: HashMap<String, u32>,
    /// Filenames in first-seen order, for callers that walk the manifest itself.
    order: Vec<String>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the expected checksum for `filename`.
    pub fn insert(&mut self, entry: ManifestEntry) {
        if self
            .entries
            .insert(entry.filename.clone(), entry.expected_crc32)
            .is_none()
        {
            self.order.push(entry.filename);
        }
    }

    pub fn get(&self, filename: &str) -> Option<u32> {
        self.entries.get(filename).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the order their filename first appeared.
    pub fn iter(&self) -> impl Iterator<Item = ManifestEntry> + '_ {
        self.order.iter().map(|name| ManifestEntry {
            filename: name.clone(),
            expected_crc32: self.entries[name],
        })
    }

    pub fn as_map(&self) -> &HashMap<String, u32> {
        &self.entries
    }
}

impl FromIterator<ManifestEntry> for Manifest {
    fn from_iter<I: IntoIterator<Item = ManifestEntry>>(iter: I) -> Self {
        let mut m = Manifest::new();
        for e in iter {
            m.insert(e);
        }
        m
    }
}

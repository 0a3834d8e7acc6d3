//! Line-by-line SFV parsing. Malformed lines are classified and skipped.

use super::{Manifest, ManifestEntry};
use crate::error::ManifestError;
use std::fs;
use std::path::Path;

/// Why a line contributed no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Empty,
    /// No space separating filename and checksum.
    NoSeparator,
    /// Token after the last space is not a 32-bit hex number.
    BadChecksum,
}

/// Result of classifying one manifest line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Entry(ManifestEntry),
    Skip(SkipReason),
}

/// Classify a single line (without its line terminator).
pub fn parse_line(line: &str) -> LineOutcome {
    if line.is_empty() {
        return LineOutcome::Skip(SkipReason::Empty);
    }
    let Some((filename, token)) = line.rsplit_once(' ') else {
        return LineOutcome::Skip(SkipReason::NoSeparator);
    };
    match parse_hex_u32(token) {
        Some(expected_crc32) => LineOutcome::Entry(ManifestEntry {
            filename: filename.to_string(),
            expected_crc32,
        }),
        None => LineOutcome::Skip(SkipReason::BadChecksum),
    }
}

/// Hex digits only: no `0x`, no sign. Leading zeros are fine as long as
/// the value fits in 32 bits.
fn parse_hex_u32(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(token, 16).ok()
}

/// Parse manifest text. Never fails; bad lines are skipped.
/// Accepts `\n`, `\r\n` and bare `\r` line endings.
pub fn parse(content: &str) -> Manifest {
    let mut manifest = Manifest::new();
    for (lineno, line) in content.split(['\n', '\r']).enumerate() {
        match parse_line(line) {
            LineOutcome::Entry(entry) => manifest.insert(entry),
            LineOutcome::Skip(SkipReason::Empty) => {}
            LineOutcome::Skip(reason) => {
                tracing::trace!(lineno, ?reason, "skipping manifest line");
            }
        }
    }
    manifest
}

/// Read and parse a manifest file as UTF-8.
pub fn read_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    let bytes = fs::read(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| ManifestError::Encoding {
        path: path.to_path_buf(),
    })?;
    // Some writers prepend a BOM.
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    let manifest = parse(text);
    tracing::debug!(path = %path.display(), entries = manifest.len(), "read manifest");
    Ok(manifest)
}

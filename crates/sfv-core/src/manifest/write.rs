//! SFV serialization and atomic manifest writes.

use crate::error::ManifestError;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// `<filename> <CRC as 8 uppercase hex digits>`.
pub fn format_line(filename: &str, crc32: u32) -> String {
    format!("{filename} {crc32:08X}")
}

/// Render entries as SFV text in the given order, joined by `\n`
/// with no trailing newline.
pub fn serialize<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (&'a str, u32)>,
{
    entries
        .into_iter()
        .map(|(name, crc)| format_line(name, crc))
        .collect::<Vec<_>>()
        .join("\n")
}

fn temp_path(path: &Path) -> PathBuf {
    let mut s = path.as_os_str().to_owned();
    s.push(TEMP_SUFFIX);
    PathBuf::from(s)
}

/// Serialize `entries` and write them to `path`: write `<path>.part`,
/// fsync, then rename over the destination.
pub fn write_manifest<'a, I>(path: &Path, entries: I) -> Result<(), ManifestError>
where
    I: IntoIterator<Item = (&'a str, u32)>,
{
    let text = serialize(entries);
    let tmp = temp_path(path);
    let io_err = |source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    };

    let result = (|| -> io::Result<()> {
        let mut f = fs::File::create(&tmp)?;
        f.write_all(text.as_bytes())?;
        f.sync_all()?;
        fs::rename(&tmp, path)
    })();
    if let Err(e) = result {
        let _ = fs::remove_file(&tmp);
        return Err(io_err(e));
    }
    tracing::debug!(path = %path.display(), bytes = text.len(), "wrote manifest");
    Ok(())
}

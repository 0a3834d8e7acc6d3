//! `sfv crc <path>` – print one file's CRC32.

use anyhow::Result;
use sfv_core::checksum;
use std::path::Path;

/// Print the CRC32 in SFV line form.
pub fn run_crc(path: &Path) -> Result<()> {
    let crc = checksum::crc32_path(path)?;
    println!("{}", sfv_core::manifest::format_line(&path.display().to_string(), crc));
    Ok(())
}

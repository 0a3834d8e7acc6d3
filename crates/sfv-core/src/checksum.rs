//! CRC-32 computation for data files.
//!
//! Standard IEEE CRC-32 (the zlib/PKZIP variant), so values interoperate
//! with SFV files produced by other tools.

use crate::error::ChecksumError;
use crc32fast::Hasher;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Default read buffer size for file checksums.
pub const BUF_SIZE: usize = 64 * 1024;

/// CRC-32 of an in-memory buffer.
pub fn crc32(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// CRC-32 of everything `reader` yields, read in `buf_size` chunks.
/// Returns the checksum and the number of bytes consumed.
pub fn crc32_reader<R: Read>(mut reader: R, buf_size: usize) -> io::Result<(u32, u64)> {
    let mut hasher = Hasher::new();
    let mut buf = vec![0u8; buf_size.max(1)];
    let mut total = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
        total += n as u64;
    }
    Ok((hasher.finalize(), total))
}

/// CRC-32 of a file's full contents. Also returns the file size in bytes.
pub fn crc32_path_sized(path: &Path, buf_size: usize) -> Result<(u32, u64), ChecksumError> {
    let io_err = |source| ChecksumError::Io {
        path: path.to_path_buf(),
        source,
    };
    let f = File::open(path).map_err(io_err)?;
    crc32_reader(f, buf_size).map_err(io_err)
}

/// CRC-32 of a file's full contents.
pub fn crc32_path(path: &Path) -> Result<u32, ChecksumError> {
    crc32_path_sized(path, BUF_SIZE).map(|(crc, _)| crc)
}

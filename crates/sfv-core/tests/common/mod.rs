//! Shared fixtures: a directory of small data files.

use std::fs;
use std::path::{Path, PathBuf};

pub fn write_files(dir: &Path, files: &[(&str, &str)]) -> Vec<PathBuf> {
    files
        .iter()
        .map(|(name, data)| {
            let p = dir.join(name);
            fs::write(&p, data).unwrap();
            p
        })
        .collect()
}

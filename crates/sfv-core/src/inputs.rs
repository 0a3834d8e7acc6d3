//! Separate a dropped/given path list into an optional manifest and data files.

use std::path::{Path, PathBuf};

/// Default manifest extension (without the dot).
pub const DEFAULT_MANIFEST_EXT: &str = "sfv";

/// Final path component, lossily converted to UTF-8. Empty if there is none.
pub fn basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Lowercased extension without the dot. Empty if there is none.
pub fn extension(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

pub fn is_manifest_path(path: &Path, manifest_ext: &str) -> bool {
    !manifest_ext.is_empty() && extension(path) == manifest_ext.to_lowercase()
}

/// Inputs of one verification run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    pub manifest: Option<PathBuf>,
    pub data: Vec<PathBuf>,
}

/// Split `paths` into at most one manifest and the data files, keeping
/// data order. The first manifest path wins; later ones are ignored.
pub fn partition<I, P>(paths: I, manifest_ext: &str) -> Inputs
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let mut inputs = Inputs::default();
    for p in paths {
        let p: PathBuf = p.into();
        if is_manifest_path(&p, manifest_ext) {
            if inputs.manifest.is_none() {
                inputs.manifest = Some(p);
            } else {
                tracing::warn!(path = %p.display(), "ignoring additional manifest");
            }
        } else {
            inputs.data.push(p);
        }
    }
    inputs
}

// corpus.rs - Loading text corpora and enumerating input directories.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BenchError, Result};

/// Read the whole file at `path` as raw bytes.
pub fn load_text(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let text = fs::read(path).map_err(|e| BenchError::read(path, e))?;
    debug!(path = %path.display(), bytes = text.len(), "loaded text");
    Ok(text)
}

/// Regular files directly inside `dir`, sorted by file name.
///
/// Hidden files (leading `.`) are skipped, so `.gitkeep` placeholders in
/// input directories are ignored.
pub fn list_inputs(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| BenchError::read(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| BenchError::read(dir, e))?;
        let path = entry.path();
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if !hidden && path.is_file() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// File name without extension, used to name per-input result files.
pub fn stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

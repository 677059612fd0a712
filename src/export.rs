//! Writing generated QR codes to disk as PNG files.

use std::path::{Path, PathBuf};

use crate::encoder::Artifact;

/// Errors that can occur while exporting an artifact.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("No QR code to export")]
    NothingToExport,

    #[error("Failed to write '{}': {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// File name used for an exported code, e.g. `T2020000PPPP.png`.
pub fn file_name(artifact: &Artifact) -> String {
    format!("{}.png", artifact.code())
}

/// Write the artifact to `<dir>/<CODE>.png`, creating `dir` if needed.
pub fn write_png(artifact: &Artifact, dir: &Path) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir).map_err(|e| ExportError::Write {
        path: dir.to_path_buf(),
        source: e,
    })?;
    write_png_to(artifact, &dir.join(file_name(artifact)))
}

/// Write the artifact to an explicit path.
pub fn write_png_to(artifact: &Artifact, path: &Path) -> Result<PathBuf, ExportError> {
    std::fs::write(path, artifact.png()).map_err(|e| ExportError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    log::info!("Exported {} to {}", artifact.code(), path.display());
    Ok(path.to_path_buf())
}

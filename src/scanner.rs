use crate::constants::SUPPORTED_EXTENSIONS;
use crate::error::{Result, UploadToolError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Returns true when the path's extension matches one of the supported
/// image formats, compared case-insensitively.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Collects the image files directly inside `dir`.
///
/// Subdirectories are not traversed. Results are sorted by file name so a
/// run always processes (and reports) files in the same order.
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(UploadToolError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut image_files = Vec::new();

    for entry in WalkDir::new(dir)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
    {
        let entry = entry?;
        let path = entry.path();

        if entry.file_type().is_file() && is_supported_image(path) {
            image_files.push(path.to_path_buf());
        }
    }

    Ok(image_files)
}

use std::path::Path;

/// Display a path relative to the image directory, or just the filename if
/// it lives elsewhere. Keeps report lines short and avoids echoing full
/// system paths.
pub fn display_path(path: &Path, dir: &Path) -> String {
    match path.strip_prefix(dir) {
        Ok(relative) => relative.display().to_string(),
        Err(_) => path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string()),
    }
}

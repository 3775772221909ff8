use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::RenderConfig;

/// Get the file extension from a path
pub fn get_extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|s| s.to_str())
}

/// Recursively collect every supported image under `archive_root`, sorted
/// ascending by path string.
///
/// A missing or unreadable archive is not an error here; it simply yields
/// no frames and the caller decides what that means.
pub fn collect_frames(archive_root: &Path, config: &RenderConfig) -> Vec<PathBuf> {
    let mut frames = Vec::new();

    for entry_result in WalkDir::new(archive_root).into_iter() {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                if let Some(path) = err.path() {
                    warn!("Failed to access {}: {}", path.display(), err);
                } else {
                    warn!("WalkDir error: {}", err);
                }
                continue;
            }
        };

        let path = entry.path();

        // Skip directories and anything else that is not a regular file
        if !path.is_file() {
            continue;
        }

        match get_extension(path) {
            Some(ext) if config.is_supported_extension(ext) => frames.push(path.to_path_buf()),
            _ => debug!("Skipping unsupported file {}", path.display()),
        }
    }

    // Order on the raw path string, not component-wise, so the result does
    // not depend on directory enumeration order or separator placement.
    frames.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    frames
}

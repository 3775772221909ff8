//! Concat-demuxer playlist written to a scoped temporary file.
//!
//! The file lives exactly as long as the [`Playlist`] value. Dropping it on
//! any path (including an early return through `?`) removes the file, and
//! [`Playlist::release`] removes it explicitly so failures can be reported.

use std::borrow::Cow;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use tempfile::TempPath;
use tracing::debug;

use crate::error::RenderError;

const TEMP_PREFIX: &str = "timelapse-";
const TEMP_SUFFIX: &str = ".txt";

pub struct Playlist {
    path: TempPath,
}

impl Playlist {
    /// Write one `file '<path>'` line per frame, in the given order.
    ///
    /// The file goes into `temp_dir`, or the system temp area when `None`.
    pub fn build(frames: &[PathBuf], temp_dir: Option<&Path>) -> Result<Self, RenderError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(TEMP_PREFIX).suffix(TEMP_SUFFIX);
        let created = match temp_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        };
        let mut file = created
            .map_err(|e| RenderError::filesystem("Failed to create temporary playlist", e))?;

        write_entries(file.as_file_mut(), frames).map_err(|e| {
            RenderError::filesystem(
                format!("Failed to write playlist {}", file.path().display()),
                e,
            )
        })?;

        // Closes the handle so the encoder can open the file on every platform
        let path = file.into_temp_path();
        debug!("Wrote {} playlist entries to {}", frames.len(), path.display());

        Ok(Playlist { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the playlist file. A file that is already gone counts as released.
    pub fn release(self) -> Result<(), RenderError> {
        let display = self.path.display().to_string();
        match self.path.close() {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(RenderError::filesystem(
                format!("Failed to remove playlist {}", display),
                e,
            )),
        }
    }
}

fn write_entries<W: Write>(out: W, frames: &[PathBuf]) -> io::Result<()> {
    let mut writer = BufWriter::new(out);
    for frame in frames {
        writeln!(writer, "{}", concat_entry(frame))?;
    }
    writer.flush()
}

/// Format a single concat directive for `path`.
pub fn concat_entry(path: &Path) -> String {
    let normalized = forward_slashes(path);
    format!("file '{}'", normalized.replace('\'', r"'\''"))
}

fn forward_slashes(path: &Path) -> Cow<'_, str> {
    let text = path.to_string_lossy();
    if MAIN_SEPARATOR == '\\' {
        Cow::Owned(text.replace('\\', "/"))
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn frames(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_manifest_contents_in_order() {
        let playlist = Playlist::build(&frames(&["a", "b", "c"]), None).unwrap();
        let contents = fs::read_to_string(playlist.path()).unwrap();
        assert_eq!(contents, "file 'a'\nfile 'b'\nfile 'c'\n");
        playlist.release().unwrap();
    }

    #[test]
    fn test_concat_entry_keeps_nested_paths() {
        assert_eq!(
            concat_entry(Path::new("archive/2024/03/01_08-00.jpg")),
            "file 'archive/2024/03/01_08-00.jpg'"
        );
    }

    #[test]
    fn test_concat_entry_escapes_single_quotes() {
        assert_eq!(
            concat_entry(Path::new("archive/it's.png")),
            r"file 'archive/it'\''s.png'"
        );
    }

    #[test]
    fn test_temp_file_naming() {
        let playlist = Playlist::build(&frames(&["a.png"]), None).unwrap();
        let name = playlist
            .path()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned();
        assert!(name.starts_with(TEMP_PREFIX), "unexpected name {name}");
        assert!(name.ends_with(TEMP_SUFFIX), "unexpected name {name}");
        playlist.release().unwrap();
    }

    #[test]
    fn test_build_in_given_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let playlist = Playlist::build(&frames(&["a.png"]), Some(dir.path())).unwrap();
        assert_eq!(playlist.path().parent(), Some(dir.path()));
        playlist.release().unwrap();
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_release_removes_file() {
        let playlist = Playlist::build(&frames(&["a.png"]), None).unwrap();
        let path = playlist.path().to_path_buf();
        assert!(path.exists());
        playlist.release().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_release_when_already_gone() {
        let playlist = Playlist::build(&frames(&["a.png"]), None).unwrap();
        fs::remove_file(playlist.path()).unwrap();
        playlist.release().unwrap();
    }

    #[test]
    fn test_drop_removes_file() {
        let path = {
            let playlist = Playlist::build(&frames(&["a.png", "b.png"]), None).unwrap();
            playlist.path().to_path_buf()
        };
        assert!(!path.exists());
    }
}

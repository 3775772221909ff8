use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RenderError;

pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];
pub const DEFAULT_FPS: f64 = 12.0;
pub const DEFAULT_ARCHIVE_DIR: &str = "archive";
pub const DEFAULT_OUTPUT_PATH: &str = "assets/timelapse.mp4";
pub const DEFAULT_ENCODER: &str = "ffmpeg";

/// Everything a render job needs to know, passed explicitly to the renderer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub supported_extensions: Vec<String>,
    pub fps: f64,
    pub archive_dir: PathBuf,
    pub output_path: PathBuf,
    pub encoder_program: PathBuf,
    /// Directory for the temporary playlist; the system temp area when unset.
    pub temp_dir: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            supported_extensions: SUPPORTED_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            fps: DEFAULT_FPS,
            archive_dir: PathBuf::from(DEFAULT_ARCHIVE_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            encoder_program: PathBuf::from(DEFAULT_ENCODER),
            temp_dir: None,
        }
    }
}

impl RenderConfig {
    /// Load a config from a JSON file. Fields left out keep their defaults.
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        let text = fs::read_to_string(path).map_err(|e| {
            RenderError::filesystem(format!("Failed to read config file {}", path.display()), e)
        })?;
        serde_json::from_str(&text).map_err(|e| {
            RenderError::InvalidConfig(format!("{}: {}", path.display(), e))
        })
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(RenderError::InvalidConfig(format!(
                "fps must be a positive number, got {}",
                self.fps
            )));
        }
        if self.supported_extensions.is_empty() {
            return Err(RenderError::InvalidConfig(
                "at least one supported extension is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Check an extension against the configured set, ignoring case and a leading dot.
    pub fn is_supported_extension(&self, ext: &str) -> bool {
        self.supported_extensions
            .iter()
            .any(|supported| supported.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

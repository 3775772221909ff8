use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::RenderConfig;
use crate::encoder::{self, Encoder};
use crate::error::RenderError;
use crate::frames::collect_frames;
use crate::playlist::Playlist;

/// Result of a successful render job.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub output_path: PathBuf,
    pub frame_count: usize,
}

/// Runs one render job: collect frames, write the playlist, encode.
pub struct Renderer<E> {
    config: RenderConfig,
    encoder: E,
}

impl<E: Encoder> Renderer<E> {
    pub fn new(config: RenderConfig, encoder: E) -> Result<Self, RenderError> {
        config.validate()?;
        Ok(Renderer { config, encoder })
    }

    pub fn render(&self) -> Result<Rendered, RenderError> {
        // The playlist lives in a temp directory and the encoder resolves
        // relative entries against it, so frame paths must be absolute.
        let archive = std::path::absolute(&self.config.archive_dir).map_err(|e| {
            RenderError::filesystem(
                format!(
                    "Failed to resolve archive directory {}",
                    self.config.archive_dir.display()
                ),
                e,
            )
        })?;
        info!("Scanning archive: {}", archive.display());

        let frames = collect_frames(&archive, &self.config);
        if frames.is_empty() {
            return Err(RenderError::NoFramesFound { archive });
        }
        info!("Found {} frames", frames.len());

        self.render_frames(&frames)
    }

    /// Encode an already collected, non-empty frame list.
    pub fn render_frames(&self, frames: &[PathBuf]) -> Result<Rendered, RenderError> {
        let output = &self.config.output_path;
        let playlist = Playlist::build(frames, self.config.temp_dir.as_deref())?;

        // The playlist drops (and is deleted) if invoke unwinds
        let encoded = encoder::invoke(&self.encoder, playlist.path(), output, self.config.fps);

        match (encoded, playlist.release()) {
            (Err(e), released) => {
                if let Err(release_err) = released {
                    warn!("{}", release_err);
                }
                Err(e)
            }
            (Ok(()), Err(release_err)) => Err(release_err),
            (Ok(()), Ok(())) => Ok(Rendered {
                output_path: output.clone(),
                frame_count: frames.len(),
            }),
        }
    }
}

use clap::Parser;
use std::path::PathBuf;

use crate::config::RenderConfig;
use crate::error::RenderError;

/// Render the webcam archive into a single MP4 timelapse.
#[derive(Parser, Debug)]
#[command(name = "render", version)]
pub struct Args {
    /// Frames per second for the output video [default: 12]
    #[arg(long)]
    pub fps: Option<f64>,

    /// Archive directory containing frame images [default: archive]
    #[arg(long)]
    pub archive: Option<PathBuf>,

    /// Where the MP4 video should be written [default: assets/timelapse.mp4]
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Encoder executable to run [default: ffmpeg]
    #[arg(long, env = "TIMELAPSE_ENCODER")]
    pub encoder: Option<PathBuf>,

    /// JSON file with render settings; explicit flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Resolve the final config: built-in defaults, then the config file, then flags.
    pub fn into_config(self) -> Result<RenderConfig, RenderError> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::load(path)?,
            None => RenderConfig::default(),
        };

        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if let Some(archive) = self.archive {
            config.archive_dir = archive;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(encoder) = self.encoder {
            config.encoder_program = encoder;
        }

        config.validate()?;
        Ok(config)
    }
}

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info};

use crate::error::RenderError;

/// What an encoder run reported back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncoderOutput {
    /// `None` when the process was terminated without an exit code.
    pub exit_code: Option<i32>,
    pub stderr: String,
}

impl EncoderOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// An external program that turns a concat playlist into a video.
pub trait Encoder {
    fn run(&self, args: &[OsString]) -> Result<EncoderOutput, RenderError>;
}

/// Runs an encoder executable (ffmpeg by default) as a child process.
#[derive(Debug, Clone)]
pub struct CommandEncoder {
    program: PathBuf,
}

impl CommandEncoder {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        CommandEncoder {
            program: program.into(),
        }
    }
}

impl Encoder for CommandEncoder {
    fn run(&self, args: &[OsString]) -> Result<EncoderOutput, RenderError> {
        debug!("Running {} {:?}", self.program.display(), args);

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| RenderError::EncoderUnavailable {
                program: self.program.clone(),
                source,
            })?;

        Ok(EncoderOutput {
            exit_code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Build the fixed argument list for a concat render.
pub fn encoder_args(manifest: &Path, output: &Path, fps: f64) -> Vec<OsString> {
    let mut args: Vec<OsString> = ["-y", "-f", "concat", "-safe", "0", "-i"]
        .iter()
        .map(OsString::from)
        .collect();
    args.push(manifest.as_os_str().to_owned());
    args.push("-vf".into());
    args.push(format!("fps={},format=yuv420p", fps).into());
    args.push(output.as_os_str().to_owned());
    args
}

/// Create the output's parent directory (and any missing ancestors).
pub fn ensure_output_dir(output: &Path) -> Result<(), RenderError> {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .map_err(|e| {
                RenderError::filesystem(
                    format!("Failed to create output directory: {}", parent.display()),
                    e,
                )
            }),
        _ => Ok(()),
    }
}

/// Run the encoder once over `manifest`, writing `output`.
///
/// Only a zero exit code counts as success; the produced file is not inspected.
pub fn invoke<E: Encoder + ?Sized>(
    encoder: &E,
    manifest: &Path,
    output: &Path,
    fps: f64,
) -> Result<(), RenderError> {
    ensure_output_dir(output)?;

    let args = encoder_args(manifest, output, fps);
    let result = encoder.run(&args)?;

    if result.success() {
        if !result.stderr.trim().is_empty() {
            debug!("Encoder output:\n{}", result.stderr.trim_end());
        }
        info!("Encoder finished: {}", output.display());
        Ok(())
    } else {
        Err(RenderError::EncoderFailure {
            code: result.exit_code,
            stderr: result.stderr,
        })
    }
}

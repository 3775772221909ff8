use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("No frames found in {}; nothing to render", archive.display())]
    NoFramesFound { archive: PathBuf },

    #[error("Encoder exited with {}{}", describe_code(*code), format_stderr(stderr))]
    EncoderFailure { code: Option<i32>, stderr: String },

    #[error("Failed to launch encoder {}", program.display())]
    EncoderUnavailable {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{context}")]
    Filesystem {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl RenderError {
    pub(crate) fn filesystem(context: impl Into<String>, source: io::Error) -> Self {
        RenderError::Filesystem {
            context: context.into(),
            source,
        }
    }

    /// Process exit status for this failure.
    ///
    /// An encoder failure reports the encoder's own code; a missing or zero
    /// code falls back to 1, as does every other kind of failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            RenderError::EncoderFailure {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim_end();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(":\n{}", trimmed)
    }
}

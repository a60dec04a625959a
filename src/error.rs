//! Error handling for wavdelay
//!
//! Every failure is one of three kinds: the input is not a usable container,
//! a file could not be read or written, or an argument was rejected.

use std::path::Path;

use thiserror::Error;

/// Result type alias for wavdelay operations
pub type Result<T> = std::result::Result<T, WavToolError>;

/// Main error type for wavdelay operations
#[derive(Error, Debug)]
pub enum WavToolError {
    // Container errors
    #[error("Invalid audio container: {reason}")]
    Format {
        reason: String,
        #[source]
        source: Option<hound::Error>,
    },

    // File errors
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // Argument errors
    #[error("Invalid argument: {reason}")]
    Argument { reason: String },

    #[error("Invalid configuration file {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl WavToolError {
    pub fn format(reason: impl Into<String>) -> Self {
        WavToolError::Format {
            reason: reason.into(),
            source: None,
        }
    }

    pub fn argument(reason: impl Into<String>) -> Self {
        WavToolError::Argument {
            reason: reason.into(),
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        WavToolError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    /// Map a `hound` error raised while working on `path`.
    ///
    /// hound reports both malformed files and plain I/O failures through the
    /// same type; only the latter are treated as I/O errors.
    pub fn from_hound(path: &Path, err: hound::Error) -> Self {
        match err {
            hound::Error::IoError(source) => {
                if source.kind() == std::io::ErrorKind::UnexpectedEof {
                    WavToolError::Format {
                        reason: format!("{} is truncated", path.display()),
                        source: Some(hound::Error::IoError(source)),
                    }
                } else {
                    WavToolError::io(path, source)
                }
            }
            other => WavToolError::Format {
                reason: format!("{}: {}", path.display(), other),
                source: Some(other),
            },
        }
    }

    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            WavToolError::Format { .. } => "FORMAT_ERROR",
            WavToolError::Io { .. } => "IO_ERROR",
            WavToolError::Argument { .. } => "ARGUMENT_ERROR",
            WavToolError::Config { .. } => "CONFIG_ERROR",
        }
    }

    /// Process exit code reported by the command-line tools
    pub fn exit_code(&self) -> u8 {
        match self {
            WavToolError::Io { .. } => 1,
            WavToolError::Argument { .. } | WavToolError::Config { .. } => 2,
            WavToolError::Format { .. } => 3,
        }
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            WavToolError::Format { .. } => vec![
                "Check that the input is an uncompressed PCM or IEEE float WAV file",
                "The file may be truncated - try re-exporting it from the source",
            ],
            WavToolError::Io { .. } => vec![
                "Check the file path is correct",
                "Verify you have permission to read the input and write the output",
            ],
            WavToolError::Argument { .. } => vec!["Run with --help to see the accepted arguments"],
            WavToolError::Config { .. } => {
                vec!["The configuration file must be a JSON object, see --help"]
            }
        }
    }
}

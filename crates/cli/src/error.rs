//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: gradient error (bad dimensions, bad config)
//! - 11: I/O error (config read, PNG write)
//! - 12: input error (bad hex color, unknown space)
//! - 13: serialization error

use colorlerp_core::ColorError;
use colorlerp_gradient::GradientError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A gradient rendering or configuration error.
    Gradient(GradientError),
    /// An I/O error (config read, PNG write).
    Io(String),
    /// A user input error (bad hex color, unknown space name).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Gradient(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Gradient(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<GradientError> for CliError {
    fn from(e: GradientError) -> Self {
        match e {
            GradientError::Io(msg) => CliError::Io(msg),
            GradientError::Color(c) => CliError::from(c),
            other => CliError::Gradient(other),
        }
    }
}

impl From<ColorError> for CliError {
    fn from(e: ColorError) -> Self {
        CliError::Input(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

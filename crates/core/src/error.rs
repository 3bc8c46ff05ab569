//! Error types for colorlerp-core.
//!
//! The color math itself is total and never fails. Only the parsing edges
//! (hex strings, space names) can produce an error.

use thiserror::Error;

/// Errors produced when parsing color-related input.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A color space name did not match any interpolation space.
    #[error("unknown color space: {0}")]
    UnknownSpace(String),
}

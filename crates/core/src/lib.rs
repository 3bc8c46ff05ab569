#![deny(unsafe_code)]
//! Color space conversion, interpolation and sRGB gamut mapping.
//!
//! Provides the color value types (`Srgb`, `LinearRgb`, `CieXyz`, `CieLab`,
//! `CieLch`, `OkLab`, `OkLch`, `Hsv`, `Hsl`), conversions between them, the
//! `Lerp` trait, CSS Color 4 chroma-reduction gamut mapping, and the five
//! end-to-end interpolation pipelines selectable through `Space`.

pub mod color;
pub mod consts;
pub mod convert;
pub mod error;
pub mod gamut;
pub mod hsv;
pub mod lerp;
pub mod math;
pub mod pipeline;

pub use color::{CieLab, CieLch, CieXyz, Hsl, Hsv, LinearRgb, OkLab, OkLch, Srgb};
pub use error::ColorError;
pub use gamut::{gamut_map, gamut_map_cielch};
pub use lerp::Lerp;
pub use pipeline::{
    decode_srgb, lerp_linear_srgb, lerp_oklab, lerp_oklch, lerp_srgb, lerp_xyz, RgbaChannels,
    Rgba64, Space,
};

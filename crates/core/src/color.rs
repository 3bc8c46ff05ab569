//! Color value types.
//!
//! Every space is a plain `Copy` triple of `f32` components with no alpha.
//! Values are created fresh by each conversion and never mutated in place.
//! Conversions between them live in [`crate::convert`] and [`crate::hsv`].

use glam::Vec3;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorError;

/// Gamma-encoded sRGB with components nominally in [0, 1].
///
/// Components may leave [0, 1] transiently during intermediate math.
/// Serializes as a hex string `"#rrggbb"`; the hex round trip quantizes to
/// 8 bits.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Srgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Linear-light (gamma-decoded) sRGB.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LinearRgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// CIE 1931 XYZ tristimulus values.
///
/// Values produced from sRGB are relative to D65. The CIELab conversions
/// expect D50-relative input; see [`crate::convert::xyz_d65_to_d50`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CieXyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// CIE 1976 L*a*b*, D50-referenced.
///
/// `l` is L*/100 so black is 0 and white is 1. `a` and `b` keep their
/// usual CIE scale and are unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CieLab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

/// Cylindrical form of [`CieLab`]. Hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CieLch {
    pub l: f32,
    pub c: f32,
    pub h: f32,
}

/// OKLab perceptual color space.
///
/// `l` is in [0, 1]; `a` and `b` are unbounded but stay within about ±0.5
/// for displayable colors.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OkLab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

/// OKLCh (cylindrical form of OKLab). Hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OkLch {
    pub l: f32,
    pub c: f32,
    pub h: f32,
}

/// Hue, saturation, value over gamma-encoded sRGB.
///
/// Hue in degrees [0, 360); red 0, green 120, blue 240. `s` and `v` in
/// [0, 1]. Hue is undefined (and set to 0) when `s` is 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

/// Hue, saturation, lightness over gamma-encoded sRGB.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

macro_rules! impl_components {
    ($ty:ident { $a:ident, $b:ident, $c:ident }) => {
        impl $ty {
            /// Creates a color from its three components.
            pub const fn new($a: f32, $b: f32, $c: f32) -> Self {
                Self { $a, $b, $c }
            }

            /// Returns the components in declaration order.
            pub fn to_array(self) -> [f32; 3] {
                [self.$a, self.$b, self.$c]
            }

            /// Builds a color from components in declaration order.
            pub fn from_array([$a, $b, $c]: [f32; 3]) -> Self {
                Self { $a, $b, $c }
            }
        }
    };
    // Cartesian spaces also get a `Vec3` view for matrix and lerp kernels.
    ($ty:ident { $a:ident, $b:ident, $c:ident }, vec) => {
        impl_components!($ty { $a, $b, $c });

        impl $ty {
            #[inline]
            pub(crate) fn vec(self) -> Vec3 {
                Vec3::new(self.$a, self.$b, self.$c)
            }

            #[inline]
            pub(crate) fn from_vec(v: Vec3) -> Self {
                Self {
                    $a: v.x,
                    $b: v.y,
                    $c: v.z,
                }
            }
        }
    };
}

impl_components!(Srgb { r, g, b }, vec);
impl_components!(LinearRgb { r, g, b }, vec);
impl_components!(CieXyz { x, y, z }, vec);
impl_components!(CieLab { l, a, b }, vec);
impl_components!(CieLch { l, c, h });
impl_components!(OkLab { l, a, b }, vec);
impl_components!(OkLch { l, c, h });
impl_components!(Hsv { h, s, v });
impl_components!(Hsl { h, s, l });

impl Srgb {
    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `ColorError::InvalidColor` if the input is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Srgb, ColorError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorError::InvalidColor(format!(
                "expected 6 hex digits, got {:?}",
                hex
            )));
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|e| ColorError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        Ok(Srgb {
            r: channel(0..2, "red")?,
            g: channel(2..4, "green")?,
            b: channel(4..6, "blue")?,
        })
    }

    /// Converts the color to a hex string like `"#rrggbb"`.
    ///
    /// Components are clamped and quantized to 8 bits with rounding.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self
            .to_array()
            .map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Serialize for Srgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Srgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Srgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl CieXyz {
    /// Standard illuminant from the CIE chromaticity `(x_chroma, y_chroma)` of
    /// a perfectly reflecting diffuser, scaled so that Y equals `y`.
    pub fn illuminant(y: f32, x_chroma: f32, y_chroma: f32) -> CieXyz {
        CieXyz {
            x: y * x_chroma / y_chroma,
            y,
            z: y * (1.0 - x_chroma - y_chroma) / y_chroma,
        }
    }

    /// Noon daylight (D65), scaled so that Y equals `y`.
    pub fn illuminant_d65(y: f32) -> CieXyz {
        Self::illuminant(y, 0.3127, 0.3290)
    }

    /// Horizon light (D50), scaled so that Y equals `y`.
    pub fn illuminant_d50(y: f32) -> CieXyz {
        Self::illuminant(y, 0.3457, 0.3585)
    }
}

//! End-to-end interpolation pipelines and their name-keyed dispatch.
//!
//! Each pipeline decodes two interchange colors to sRGB (dropping alpha),
//! moves them into its working space, interpolates, gamut-maps where the
//! space needs it, and re-encodes an opaque [`Rgba64`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::{OkLch, Srgb};
use crate::convert::{
    linear_to_srgb, linear_to_xyz, oklab_to_oklch, oklab_to_xyz, oklch_to_oklab, srgb_to_linear,
    xyz_to_linear, xyz_to_oklab,
};
use crate::error::ColorError;
use crate::gamut::gamut_map;
use crate::lerp::Lerp;

/// Anything that can report 16-bit RGBA channels (0..=0xffff).
///
/// This is the only capability the pipelines require from their inputs, so
/// pixel types from any image library can be adapted with a small impl.
pub trait RgbaChannels {
    /// Returns `[r, g, b, a]` scaled to 0..=0xffff.
    fn rgba16(&self) -> [u16; 4];
}

/// Opaque-by-default 16-bit-per-channel RGBA pixel produced by the pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgba64 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Rgba64 {
    /// Quantizes to 8 bits per channel with rounding.
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a].map(|c| ((c as u32 * 255 + 0x7fff) / 0xffff) as u8)
    }
}

impl RgbaChannels for Rgba64 {
    fn rgba16(&self) -> [u16; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl RgbaChannels for [u16; 4] {
    fn rgba16(&self) -> [u16; 4] {
        *self
    }
}

impl RgbaChannels for [u8; 4] {
    fn rgba16(&self) -> [u16; 4] {
        self.map(|c| c as u16 * 0x101)
    }
}

impl RgbaChannels for Srgb {
    /// Clips to [0, 1] and rounds to 16 bits, always fully opaque.
    fn rgba16(&self) -> [u16; 4] {
        let [r, g, b] = self
            .clip_to_gamut()
            .to_array()
            .map(|c| (c * 65535.0 + 0.5) as u16);
        [r, g, b, u16::MAX]
    }
}

impl<T: RgbaChannels + ?Sized> RgbaChannels for &T {
    fn rgba16(&self) -> [u16; 4] {
        (**self).rgba16()
    }
}

/// Reads a color's channels as sRGB in [0, 1], discarding alpha.
pub fn decode_srgb<C: RgbaChannels + ?Sized>(c: &C) -> Srgb {
    let [r, g, b, _] = c.rgba16();
    let scale = |v: u16| v as f32 / 65535.0;
    Srgb {
        r: scale(r),
        g: scale(g),
        b: scale(b),
    }
}

/// Clips and re-encodes as an opaque [`Rgba64`].
fn encode(c: Srgb) -> Rgba64 {
    let [r, g, b, a] = c.rgba16();
    Rgba64 { r, g, b, a }
}

/// Interpolates directly in gamma-encoded sRGB.
///
/// Fast and simple but not perceptually uniform.
pub fn lerp_srgb<A, B>(a: &A, b: &B, v: f32) -> Rgba64
where
    A: RgbaChannels + ?Sized,
    B: RgbaChannels + ?Sized,
{
    encode(decode_srgb(a).lerp(decode_srgb(b), v))
}

/// Interpolates in linear-light sRGB, like mixing light.
pub fn lerp_linear_srgb<A, B>(a: &A, b: &B, v: f32) -> Rgba64
where
    A: RgbaChannels + ?Sized,
    B: RgbaChannels + ?Sized,
{
    let from = srgb_to_linear(decode_srgb(a));
    let to = srgb_to_linear(decode_srgb(b));
    encode(linear_to_srgb(from.lerp(to, v).clip_to_gamut()))
}

/// Interpolates in CIE XYZ. Device independent, not perceptually uniform.
pub fn lerp_xyz<A, B>(a: &A, b: &B, v: f32) -> Rgba64
where
    A: RgbaChannels + ?Sized,
    B: RgbaChannels + ?Sized,
{
    let from = linear_to_xyz(srgb_to_linear(decode_srgb(a)));
    let to = linear_to_xyz(srgb_to_linear(decode_srgb(b)));
    encode(linear_to_srgb(xyz_to_linear(from.lerp(to, v)).clip_to_gamut()))
}

/// Interpolates in OKLab, then gamut-maps the blend through OKLCh.
pub fn lerp_oklab<A, B>(a: &A, b: &B, v: f32) -> Rgba64
where
    A: RgbaChannels + ?Sized,
    B: RgbaChannels + ?Sized,
{
    let from = xyz_to_oklab(linear_to_xyz(srgb_to_linear(decode_srgb(a))));
    let to = xyz_to_oklab(linear_to_xyz(srgb_to_linear(decode_srgb(b))));
    let mapped = gamut_map(oklab_to_oklch(from.lerp(to, v)));
    encode(oklch_to_display(mapped))
}

/// Interpolates in OKLCh along the shorter hue arc, then gamut-maps.
pub fn lerp_oklch<A, B>(a: &A, b: &B, v: f32) -> Rgba64
where
    A: RgbaChannels + ?Sized,
    B: RgbaChannels + ?Sized,
{
    let from = oklab_to_oklch(xyz_to_oklab(linear_to_xyz(srgb_to_linear(decode_srgb(a)))));
    let to = oklab_to_oklch(xyz_to_oklab(linear_to_xyz(srgb_to_linear(decode_srgb(b)))));
    let mapped = gamut_map(from.lerp(to, v));
    encode(oklch_to_display(mapped))
}

fn oklch_to_display(c: OkLch) -> Srgb {
    linear_to_srgb(xyz_to_linear(oklab_to_xyz(oklch_to_oklab(c))).clip_to_gamut())
}

/// The five interpolation spaces, in order of increasing perceptual fidelity.
///
/// Serializes as its canonical name and deserializes through
/// [`Space::from_name`], so every accepted alias works in config files too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Space {
    Srgb,
    LinearSrgb,
    CieXyz,
    OkLab,
    OkLch,
}

impl Space {
    /// Every space, cheapest first.
    pub const ALL: [Space; 5] = [
        Space::Srgb,
        Space::LinearSrgb,
        Space::CieXyz,
        Space::OkLab,
        Space::OkLch,
    ];

    /// Canonical external name.
    pub fn name(self) -> &'static str {
        match self {
            Space::Srgb => "SRGB",
            Space::LinearSrgb => "LSRGB",
            Space::CieXyz => "CIEXYZ",
            Space::OkLab => "OKLAB",
            Space::OkLch => "OKLCH",
        }
    }

    /// Looks a space up by name, ignoring case, `-` and `_`.
    ///
    /// Accepts the canonical names plus the gradient demo labels
    /// ("sRGB", "lin-sRGB", "CIE-XYZ").
    pub fn from_name(name: &str) -> Result<Space, ColorError> {
        let key: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_uppercase())
            .collect();
        match key.as_str() {
            "SRGB" => Ok(Space::Srgb),
            "LSRGB" | "LINSRGB" | "LINEARSRGB" => Ok(Space::LinearSrgb),
            "CIEXYZ" | "XYZ" => Ok(Space::CieXyz),
            "OKLAB" => Ok(Space::OkLab),
            "OKLCH" => Ok(Space::OkLch),
            _ => Err(ColorError::UnknownSpace(name.to_string())),
        }
    }

    /// Canonical names of [`Space::ALL`], in order.
    pub fn list_names() -> [&'static str; 5] {
        Space::ALL.map(Space::name)
    }

    /// Runs this space's pipeline.
    pub fn lerp<A, B>(self, a: &A, b: &B, v: f32) -> Rgba64
    where
        A: RgbaChannels + ?Sized,
        B: RgbaChannels + ?Sized,
    {
        match self {
            Space::Srgb => lerp_srgb(a, b, v),
            Space::LinearSrgb => lerp_linear_srgb(a, b, v),
            Space::CieXyz => lerp_xyz(a, b, v),
            Space::OkLab => lerp_oklab(a, b, v),
            Space::OkLch => lerp_oklch(a, b, v),
        }
    }

    /// Whether the pipeline gamut-maps rather than only clipping.
    pub fn gamut_maps(self) -> bool {
        matches!(self, Space::OkLab | Space::OkLch)
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Space {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Space::from_name(s)
    }
}

impl Serialize for Space {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Space {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Space::from_name(&s).map_err(serde::de::Error::custom)
    }
}

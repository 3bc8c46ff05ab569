//! HSV and HSL, the hexcone models over gamma-encoded sRGB.

use crate::color::{Hsl, Hsv, Srgb};
use crate::consts::{EPS_UNIT, UNDEFINED_HUE};
use crate::math::{clamp_unit, normalize_hue};

/// Hue in degrees from the max channel and the chroma `delta`.
fn hexcone_hue(c: Srgb, max: f32, delta: f32) -> f32 {
    let h = if delta == 0.0 {
        UNDEFINED_HUE
    } else if max == c.r {
        60.0 * ((c.g - c.b) / delta)
    } else if max == c.g {
        60.0 * ((c.b - c.r) / delta + 2.0)
    } else {
        60.0 * ((c.r - c.g) / delta + 4.0)
    };
    normalize_hue(h)
}

/// Rebuilds sRGB from hue, chroma and the lightness offset `m`.
fn hexcone_rgb(h: f32, chroma: f32, m: f32) -> Srgb {
    let hp = h / 60.0;
    let x = chroma * (1.0 - (hp.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    Srgb::from_vec(clamp_unit(Srgb::new(r + m, g + m, b + m).vec()))
}

/// Converts gamma-encoded sRGB to HSV.
pub fn srgb_to_hsv(c: Srgb) -> Hsv {
    let v = c.vec();
    let max = v.max_element();
    let delta = max - v.min_element();
    Hsv {
        h: hexcone_hue(c, max, delta),
        s: if max > 0.0 { delta / max } else { 0.0 },
        v: max,
    }
}

/// Converts gamma-encoded sRGB to HSL.
pub fn srgb_to_hsl(c: Srgb) -> Hsl {
    let v = c.vec();
    let max = v.max_element();
    let min = v.min_element();
    let delta = max - min;
    let l = 0.5 * (max + min);
    let s = if delta == 0.0 {
        0.0
    } else if l <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };
    Hsl {
        h: hexcone_hue(c, max, delta),
        s,
        l,
    }
}

/// Converts HSV to gamma-encoded sRGB, clipped to [0, 1].
///
/// Hue is wrapped into [0, 360); `s` and `v` are clamped to [0, 1].
/// Saturation at or below 1e-5 is treated as gray.
pub fn hsv_to_srgb(c: Hsv) -> Srgb {
    let h = normalize_hue(c.h);
    let s = c.s.clamp(0.0, 1.0);
    let v = c.v.clamp(0.0, 1.0);
    if s <= EPS_UNIT {
        return Srgb::new(v, v, v);
    }
    let chroma = v * s;
    hexcone_rgb(h, chroma, v - chroma)
}

/// Converts HSL to gamma-encoded sRGB, clipped to [0, 1].
pub fn hsl_to_srgb(c: Hsl) -> Srgb {
    let h = normalize_hue(c.h);
    let s = c.s.clamp(0.0, 1.0);
    let l = c.l.clamp(0.0, 1.0);
    if s == 0.0 {
        return Srgb::new(l, l, l);
    }
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    hexcone_rgb(h, chroma, l - chroma / 2.0)
}

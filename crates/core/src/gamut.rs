//! sRGB gamut utilities and chroma-reduction gamut mapping.
//!
//! The mapper follows the CSS Color 4 binary search: hold OKLCh lightness
//! and hue fixed, search chroma for the largest value whose clipped sRGB
//! form is within one just-noticeable difference (OKLab Delta E 0.02) of
//! the unclipped color.

use tracing::{debug, trace};

use crate::color::{CieLch, LinearRgb, OkLab, OkLch, Srgb};
use crate::consts::{GAMUT_TOLERANCE, JND};
use crate::convert::{
    cielab_to_cielch, cielab_to_xyz, cielch_to_cielab, linear_to_xyz, oklab_to_oklch,
    oklab_to_xyz, oklch_to_oklab, xyz_d50_to_d65, xyz_d65_to_d50, xyz_to_cielab, xyz_to_linear,
    xyz_to_oklab,
};
use crate::math::{clamp_unit, in_unit_cube};

impl LinearRgb {
    /// True if every channel lies in [0, 1].
    pub fn in_gamut(self) -> bool {
        in_unit_cube(self.vec())
    }

    /// Clamps every channel to [0, 1].
    pub fn clip_to_gamut(self) -> LinearRgb {
        LinearRgb::from_vec(clamp_unit(self.vec()))
    }
}

impl Srgb {
    /// True if every channel lies in [0, 1].
    pub fn in_gamut(self) -> bool {
        in_unit_cube(self.vec())
    }

    /// Clamps every channel to [0, 1].
    pub fn clip_to_gamut(self) -> Srgb {
        Srgb::from_vec(clamp_unit(self.vec()))
    }
}

impl OkLab {
    /// Euclidean distance to `sample` in OKLab (Delta E OK).
    pub fn delta_e(self, sample: OkLab) -> f32 {
        self.vec().distance(sample.vec())
    }
}

fn oklch_to_linear(c: OkLch) -> LinearRgb {
    xyz_to_linear(oklab_to_xyz(oklch_to_oklab(c)))
}

fn linear_to_oklab(c: LinearRgb) -> OkLab {
    xyz_to_oklab(linear_to_xyz(c))
}

/// Maps an OKLCh color into the sRGB gamut by reducing chroma.
///
/// Lightness outside [0, 1] is clamped and returned achromatic. A color whose
/// plain clip is already within the JND is returned clipped. Otherwise chroma
/// is binary-searched in [0, c] until the interval is narrower than 1e-4,
/// preferring to raise the in-gamut lower bound before lowering the upper
/// bound. The result is always the OKLCh form of a clipped linear-RGB color.
pub fn gamut_map(origin: OkLch) -> OkLch {
    if !(0.0..=1.0).contains(&origin.l) {
        debug!(l = origin.l, "lightness out of range, returning achromatic");
        return OkLch {
            l: origin.l.clamp(0.0, 1.0),
            c: 0.0,
            h: 0.0,
        };
    }

    let origin_lab = oklch_to_oklab(origin);
    let mut clipped = oklch_to_linear(origin).clip_to_gamut();
    if origin_lab.delta_e(linear_to_oklab(clipped)) < JND {
        return oklab_to_oklch(linear_to_oklab(clipped));
    }

    let mut current = origin;
    let mut min = 0.0_f32;
    let mut max = origin.c;
    let mut min_in_gamut = true;
    let mut steps = 0_u32;

    while max - min > GAMUT_TOLERANCE {
        steps += 1;
        let chroma = 0.5 * (min + max);
        current.c = chroma;
        let current_rgb = oklch_to_linear(current);

        if min_in_gamut && current_rgb.in_gamut() {
            min = chroma;
            continue;
        }

        clipped = current_rgb.clip_to_gamut();
        let clipped_lab = linear_to_oklab(clipped);
        let e = clipped_lab.delta_e(oklch_to_oklab(current));
        if e < JND {
            if JND - e < GAMUT_TOLERANCE {
                trace!(steps, chroma, "gamut search converged on the JND boundary");
                return oklab_to_oklch(clipped_lab);
            }
            min = chroma;
            min_in_gamut = current_rgb.in_gamut();
        } else {
            max = chroma;
        }
    }

    trace!(steps, min, max, "gamut search interval collapsed");
    oklab_to_oklch(linear_to_oklab(clipped))
}

/// Maps a CIELCh color into the sRGB gamut.
///
/// The color is routed through OKLCh (D50 -> D65 adaptation included), mapped
/// with [`gamut_map`], and converted back.
pub fn gamut_map_cielch(origin: CieLch) -> CieLch {
    let xyz = xyz_d50_to_d65(cielab_to_xyz(cielch_to_cielab(origin)));
    let mapped = gamut_map(oklab_to_oklch(xyz_to_oklab(xyz)));
    let back = xyz_d65_to_d50(oklab_to_xyz(oklch_to_oklab(mapped)));
    cielab_to_cielch(xyz_to_cielab(back))
}

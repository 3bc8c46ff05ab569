//! Per-space interpolation.
//!
//! Cartesian spaces blend component-wise. Cylindrical spaces blend lightness
//! and chroma linearly and hue along the shorter arc, with achromatic
//! endpoints handing their (undefined) hue over to the other endpoint.
//! `v` is never clamped, so values outside [0, 1] extrapolate.

use crate::color::{CieLab, CieLch, CieXyz, Hsl, Hsv, LinearRgb, OkLab, OkLch, Srgb};
use crate::consts::{CIELAB_ACHROMATIC, EPS_UNIT, OKLAB_ACHROMATIC, UNDEFINED_HUE};
use crate::math::{lerp as lerp_f32, lerp_hue, lerp_vec};

/// Interpolation between two values of the same color space.
pub trait Lerp: Sized {
    /// Returns the color at parameter `v` between `self` (v = 0) and `to` (v = 1).
    fn lerp(self, to: Self, v: f32) -> Self;
}

/// Free-function form of [`Lerp::lerp`].
pub fn lerp<C: Lerp>(from: C, to: C, v: f32) -> C {
    from.lerp(to, v)
}

macro_rules! impl_cartesian_lerp {
    ($($ty:ty),*) => {
        $(
            impl Lerp for $ty {
                fn lerp(self, to: Self, v: f32) -> Self {
                    Self::from_vec(lerp_vec(self.vec(), to.vec(), v))
                }
            }
        )*
    };
}

impl_cartesian_lerp!(Srgb, LinearRgb, CieXyz, CieLab, OkLab);

/// Polar blend on (radius, hue) pairs, shared by every cylindrical space.
///
/// Returns `(radius, hue)`. An endpoint whose radius is below `achromatic`
/// takes the other endpoint's hue; if both are achromatic the radius is
/// forced to 0 and the hue to the sentinel.
fn lerp_polar(from: (f32, f32), to: (f32, f32), v: f32, achromatic: f32) -> (f32, f32) {
    let (from_r, mut from_h) = from;
    let (to_r, mut to_h) = to;
    match (from_r < achromatic, to_r < achromatic) {
        (true, true) => return (0.0, UNDEFINED_HUE),
        (true, false) => from_h = to_h,
        (false, true) => to_h = from_h,
        (false, false) => {}
    }
    (lerp_f32(from_r, to_r, v), lerp_hue(from_h, to_h, v))
}

impl Lerp for OkLch {
    fn lerp(self, to: Self, v: f32) -> Self {
        let (c, h) = lerp_polar((self.c, self.h), (to.c, to.h), v, OKLAB_ACHROMATIC);
        OkLch {
            l: lerp_f32(self.l, to.l, v),
            c,
            h,
        }
    }
}

impl Lerp for CieLch {
    fn lerp(self, to: Self, v: f32) -> Self {
        let (c, h) = lerp_polar((self.c, self.h), (to.c, to.h), v, CIELAB_ACHROMATIC);
        CieLch {
            l: lerp_f32(self.l, to.l, v),
            c,
            h,
        }
    }
}

impl Lerp for Hsv {
    fn lerp(self, to: Self, v: f32) -> Self {
        let (s, h) = lerp_polar((self.s, self.h), (to.s, to.h), v, EPS_UNIT);
        Hsv {
            h,
            s,
            v: lerp_f32(self.v, to.v, v),
        }
    }
}

impl Lerp for Hsl {
    fn lerp(self, to: Self, v: f32) -> Self {
        let (s, h) = lerp_polar((self.s, self.h), (to.s, to.h), v, EPS_UNIT);
        Hsl {
            h,
            s,
            l: lerp_f32(self.l, to.l, v),
        }
    }
}

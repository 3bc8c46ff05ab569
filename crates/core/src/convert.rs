//! Pairwise conversions forming the conversion graph:
//!
//! ```text
//! Srgb <-> LinearRgb <-> CieXyz(D65) <-> OkLab <-> OkLch
//!                           |
//!                      CieXyz(D50) <-> CieLab <-> CieLch
//! ```
//!
//! All conversions are pure, total functions over f32. Degenerate inputs are
//! handled by policy (sentinel hue for achromatic colors) rather than errors.

use glam::Vec3;

use crate::color::{CieLab, CieLch, CieXyz, LinearRgb, OkLab, OkLch, Srgb};
use crate::consts::{
    CIELAB_ACHROMATIC, CIE_EPSILON, CIE_KAPPA, D50, D50_TO_D65, D65_TO_D50, LINEAR_SRGB_TO_XYZ,
    LMS_TO_OKLAB, LMS_TO_XYZ, OKLAB_ACHROMATIC, OKLAB_TO_LMS, UNDEFINED_HUE, XYZ_TO_LINEAR_SRGB,
    XYZ_TO_LMS,
};
use crate::math::{cbrt, clamp_unit, cube, map, normalize_hue};

/// Decodes one gamma-encoded sRGB component to linear light.
///
/// Sign-preserving so out-of-range intermediates survive a round trip.
fn srgb_component_to_linear(c: f32) -> f32 {
    let abs = c.abs();
    if abs <= 0.04045 {
        c / 12.92
    } else {
        ((abs + 0.055) / 1.055).powf(2.4).copysign(c)
    }
}

/// Encodes one linear-light component with the sRGB transfer function.
fn linear_component_to_srgb(c: f32) -> f32 {
    let abs = c.abs();
    if abs <= 0.0031308 {
        c * 12.92
    } else {
        (1.055 * abs.powf(1.0 / 2.4) - 0.055).copysign(c)
    }
}

/// Converts sRGB to linear RGB by applying inverse sRGB gamma.
pub fn srgb_to_linear(c: Srgb) -> LinearRgb {
    LinearRgb::from_vec(map(c.vec(), srgb_component_to_linear))
}

/// Converts linear RGB to sRGB by applying sRGB gamma.
pub fn linear_to_srgb(c: LinearRgb) -> Srgb {
    Srgb::from_vec(map(c.vec(), linear_component_to_srgb))
}

/// Converts linear sRGB to CIE XYZ relative to D65.
pub fn linear_to_xyz(c: LinearRgb) -> CieXyz {
    CieXyz::from_vec(LINEAR_SRGB_TO_XYZ * c.vec())
}

/// Converts CIE XYZ relative to D65 to linear sRGB.
pub fn xyz_to_linear(c: CieXyz) -> LinearRgb {
    LinearRgb::from_vec(XYZ_TO_LINEAR_SRGB * c.vec())
}

/// Converts D65-relative XYZ to OKLab: LMS matrix, cube root, Lab matrix.
pub fn xyz_to_oklab(c: CieXyz) -> OkLab {
    let lms = XYZ_TO_LMS * c.vec();
    OkLab::from_vec(LMS_TO_OKLAB * cbrt(lms))
}

/// Converts OKLab to D65-relative XYZ.
///
/// The nonlinear LMS response is cubed, undoing the cube root exactly.
pub fn oklab_to_xyz(c: OkLab) -> CieXyz {
    let lms = OKLAB_TO_LMS * c.vec();
    CieXyz::from_vec(LMS_TO_XYZ * cube(lms))
}

/// Cartesian (l, a, b) to polar (l, c, h) with h in degrees.
fn to_polar(l: f32, a: f32, b: f32, achromatic: f32) -> (f32, f32, f32) {
    let chroma = (a * a + b * b).sqrt();
    let hue = if chroma <= achromatic {
        UNDEFINED_HUE
    } else {
        normalize_hue(b.atan2(a).to_degrees())
    };
    (l, chroma, hue)
}

/// Polar (l, c, h) with h in degrees to Cartesian (l, a, b).
fn from_polar(l: f32, c: f32, h: f32) -> (f32, f32, f32) {
    let (sin, cos) = h.to_radians().sin_cos();
    (l, c * cos, c * sin)
}

/// Converts OKLab to OKLCh (cylindrical form).
///
/// Chroma at or below 4e-6 yields the sentinel hue 0 instead of the
/// numerically meaningless `atan2` of a near-zero vector.
pub fn oklab_to_oklch(c: OkLab) -> OkLch {
    let (l, c, h) = to_polar(c.l, c.a, c.b, OKLAB_ACHROMATIC);
    OkLch { l, c, h }
}

/// Converts OKLCh to OKLab.
pub fn oklch_to_oklab(c: OkLch) -> OkLab {
    let (l, a, b) = from_polar(c.l, c.c, c.h);
    OkLab { l, a, b }
}

/// Converts D50-relative XYZ to CIELab with L normalized to [0, 1].
pub fn xyz_to_cielab(c: CieXyz) -> CieLab {
    let f = |x: f32| {
        if x > CIE_EPSILON {
            x.cbrt()
        } else {
            (CIE_KAPPA * x + 16.0) / 116.0
        }
    };
    let xyz = c.vec() / D50;
    let (fx, fy, fz) = (f(xyz.x), f(xyz.y), f(xyz.z));
    CieLab {
        l: (116.0 * fy - 16.0) / 100.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Converts CIELab (L in [0, 1]) to D50-relative XYZ.
pub fn cielab_to_xyz(c: CieLab) -> CieXyz {
    let l_star = 100.0 * c.l;
    let fy = (l_star + 16.0) / 116.0;
    let fx = c.a / 500.0 + fy;
    let fz = fy - c.b / 200.0;

    let finv = |f: f32| {
        let f3 = f * f * f;
        if f3 > CIE_EPSILON {
            f3
        } else {
            (116.0 * f - 16.0) / CIE_KAPPA
        }
    };
    let y = if l_star > CIE_KAPPA * CIE_EPSILON {
        fy * fy * fy
    } else {
        l_star / CIE_KAPPA
    };
    CieXyz::from_vec(Vec3::new(finv(fx), y, finv(fz)) * D50)
}

/// Converts CIELab to CIELCh. Chroma at or below 0.0015 is achromatic.
pub fn cielab_to_cielch(c: CieLab) -> CieLch {
    let (l, c, h) = to_polar(c.l, c.a, c.b, CIELAB_ACHROMATIC);
    CieLch { l, c, h }
}

/// Converts CIELCh to CIELab with `a = c·cos h`, `b = c·sin h`.
pub fn cielch_to_cielab(c: CieLch) -> CieLab {
    let (l, a, b) = from_polar(c.l, c.c, c.h);
    CieLab { l, a, b }
}

/// Bradford adaptation of XYZ from the D65 white to the D50 white.
pub fn xyz_d65_to_d50(c: CieXyz) -> CieXyz {
    CieXyz::from_vec(D65_TO_D50 * c.vec())
}

/// Bradford adaptation of XYZ from the D50 white to the D65 white.
pub fn xyz_d50_to_d65(c: CieXyz) -> CieXyz {
    CieXyz::from_vec(D50_TO_D65 * c.vec())
}

/// Convenience: sRGB to OKLab via linear RGB and XYZ.
pub fn srgb_to_oklab(c: Srgb) -> OkLab {
    xyz_to_oklab(linear_to_xyz(srgb_to_linear(c)))
}

/// Convenience: OKLab to sRGB. The result is not clipped.
pub fn oklab_to_srgb(c: OkLab) -> Srgb {
    linear_to_srgb(xyz_to_linear(oklab_to_xyz(c)))
}

/// Convenience: sRGB to OKLCh via the chain sRGB -> linear -> XYZ -> OKLab -> OKLCh.
pub fn srgb_to_oklch(c: Srgb) -> OkLch {
    oklab_to_oklch(srgb_to_oklab(c))
}

/// Convenience: OKLCh to sRGB, with output clamped to [0, 1].
pub fn oklch_to_srgb(c: OkLch) -> Srgb {
    Srgb::from_vec(clamp_unit(oklab_to_srgb(oklch_to_oklab(c)).vec()))
}

/// Convenience: sRGB to CIELab, adapting the D65 XYZ to D50 on the way.
pub fn srgb_to_cielab(c: Srgb) -> CieLab {
    xyz_to_cielab(xyz_d65_to_d50(linear_to_xyz(srgb_to_linear(c))))
}

/// Convenience: CIELab to sRGB, adapting back to D65. The result is not clipped.
pub fn cielab_to_srgb(c: CieLab) -> Srgb {
    linear_to_srgb(xyz_to_linear(xyz_d50_to_d65(cielab_to_xyz(c))))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn max_diff(a: [f32; 3], b: [f32; 3]) -> f32 {
        a.iter()
            .zip(b.iter())
            .fold(0.0_f32, |acc, (x, y)| acc.max((x - y).abs()))
    }

    // -- Gamma codec --

    #[test]
    fn srgb_to_linear_black_and_white() {
        assert_eq!(srgb_to_linear(Srgb::new(0.0, 0.0, 0.0)), LinearRgb::new(0.0, 0.0, 0.0));
        let white = srgb_to_linear(Srgb::new(1.0, 1.0, 1.0));
        assert!(max_diff(white.to_array(), [1.0; 3]) < EPSILON);
    }

    #[test]
    fn srgb_red_decodes_exactly() {
        let red = srgb_to_linear(Srgb::new(1.0, 0.0, 0.0));
        assert_eq!(red, LinearRgb::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn srgb_gamma_boundary_at_0_04045() {
        let lin = srgb_to_linear(Srgb::new(0.04045, 0.0, 0.0));
        assert!(approx_eq(lin.r, 0.04045 / 12.92));

        let above = srgb_to_linear(Srgb::new(0.04046, 0.0, 0.0));
        let expected = ((0.04046_f32 + 0.055) / 1.055).powf(2.4);
        assert!(approx_eq(above.r, expected));
    }

    #[test]
    fn linear_to_srgb_boundary_at_0_0031308() {
        let srgb = linear_to_srgb(LinearRgb::new(0.0031308, 0.0, 0.0));
        assert!(approx_eq(srgb.r, 0.0031308 * 12.92));

        let above = linear_to_srgb(LinearRgb::new(0.0031309, 0.0, 0.0));
        let expected = 1.055 * 0.0031309_f32.powf(1.0 / 2.4) - 0.055;
        assert!(approx_eq(above.r, expected));
    }

    #[test]
    fn gamma_codec_is_sign_preserving() {
        let lin = srgb_to_linear(Srgb::new(-0.5, -0.01, 1.2));
        assert!(lin.r < 0.0 && lin.g < 0.0 && lin.b > 1.0);
        let back = linear_to_srgb(lin);
        assert!(max_diff(back.to_array(), [-0.5, -0.01, 1.2]) < EPSILON);
    }

    // -- Reference values --

    #[test]
    fn pure_red_to_xyz_matches_reference() {
        let xyz = linear_to_xyz(srgb_to_linear(Srgb::new(1.0, 0.0, 0.0)));
        let want = [0.412_390_8, 0.212_639, 0.019_330_82];
        assert!(max_diff(xyz.to_array(), want) < 1e-6, "got {xyz:?}");
    }

    #[test]
    fn pure_red_to_oklab_matches_reference() {
        let lab = srgb_to_oklab(Srgb::new(1.0, 0.0, 0.0));
        let want = OkLab::new(0.627_955_4, 0.224_863_1, 0.125_846_3);
        assert!(want.delta_e(lab) < 1e-4, "got {lab:?}");
    }

    #[test]
    fn white_in_oklab_has_l_near_one_and_zero_chroma() {
        let lab = srgb_to_oklab(Srgb::new(1.0, 1.0, 1.0));
        assert!((lab.l - 1.0).abs() < 1e-4, "L: {}", lab.l);
        assert!(lab.a.abs() < 1e-4, "a: {}", lab.a);
        assert!(lab.b.abs() < 1e-4, "b: {}", lab.b);
    }

    #[test]
    fn white_in_cielab_is_neutral_with_full_lightness() {
        let lab = srgb_to_cielab(Srgb::new(1.0, 1.0, 1.0));
        assert!((lab.l - 1.0).abs() < 1e-3, "L: {}", lab.l);
        assert!(lab.a.abs() < 0.05, "a: {}", lab.a);
        assert!(lab.b.abs() < 0.05, "b: {}", lab.b);
    }

    #[test]
    fn d50_white_xyz_maps_to_unit_lightness() {
        let lab = xyz_to_cielab(CieXyz::from_vec(D50));
        assert!(approx_eq(lab.l, 1.0));
        assert!(lab.a.abs() < 1e-3 && lab.b.abs() < 1e-3);
    }

    #[test]
    fn oklch_pure_red_has_hue_near_29_degrees() {
        let lch = srgb_to_oklch(Srgb::new(1.0, 0.0, 0.0));
        assert!((lch.h - 29.2).abs() < 1.0, "expected red hue ~29.2, got {}", lch.h);
        assert!(lch.c > 0.2);
    }

    #[test]
    fn oklch_pure_green_has_hue_near_142_degrees() {
        let lch = srgb_to_oklch(Srgb::new(0.0, 1.0, 0.0));
        assert!((lch.h - 142.5).abs() < 1.5, "expected green hue ~142.5, got {}", lch.h);
    }

    // -- Polar transforms --

    #[test]
    fn oklch_zero_chroma_sets_sentinel_hue() {
        let lch = oklab_to_oklch(OkLab::new(0.5, 0.0, 0.0));
        assert_eq!(lch.h, UNDEFINED_HUE);
        assert!(!lch.h.is_nan());
    }

    #[test]
    fn oklch_below_cutoff_sets_sentinel_hue() {
        let lch = oklab_to_oklch(OkLab::new(0.5, 0.0, 3e-6));
        assert_eq!(lch.h, UNDEFINED_HUE);
        let lch = oklab_to_oklch(OkLab::new(0.5, 0.0, 1e-4));
        assert!(approx_eq(lch.h, 90.0));
    }

    #[test]
    fn cielch_uses_its_own_cutoff() {
        let lch = cielab_to_cielch(CieLab::new(0.5, 0.0, 0.001));
        assert_eq!(lch.h, UNDEFINED_HUE);
        let lch = cielab_to_cielch(CieLab::new(0.5, 0.0, 0.01));
        assert!(approx_eq(lch.h, 90.0));
    }

    #[test]
    fn negative_b_axis_hue_is_normalized() {
        let lch = oklab_to_oklch(OkLab::new(0.5, 0.0, -0.1));
        assert!(approx_eq(lch.h, 270.0), "got {}", lch.h);
    }

    #[test]
    fn cielch_to_cielab_puts_cosine_on_a() {
        let lab = cielch_to_cielab(CieLch::new(0.5, 10.0, 0.0));
        assert!(approx_eq(lab.a, 10.0));
        assert!(approx_eq(lab.b, 0.0));
        let lab = cielch_to_cielab(CieLch::new(0.5, 10.0, 90.0));
        assert!(lab.a.abs() < 1e-4);
        assert!(approx_eq(lab.b, 10.0));
    }

    // -- Round trips on fixed colors --

    #[test]
    fn oklch_oklab_round_trip() {
        let original = OkLch::new(0.7, 0.15, 250.0);
        let back = oklab_to_oklch(oklch_to_oklab(original));
        assert!(max_diff(back.to_array(), original.to_array()) < 1e-4);
    }

    #[test]
    fn cielab_xyz_round_trip_dark_color() {
        // Below the kappa*epsilon branch for L.
        let original = CieLab::new(0.05, 3.0, -4.0);
        let back = xyz_to_cielab(cielab_to_xyz(original));
        assert!(max_diff(back.to_array(), original.to_array()) < 1e-4, "{back:?}");
    }

    #[test]
    fn srgb_oklch_round_trip_known_colors() {
        let colors = [
            Srgb::new(1.0, 0.0, 0.0),
            Srgb::new(0.0, 1.0, 0.0),
            Srgb::new(0.0, 0.0, 1.0),
            Srgb::new(1.0, 1.0, 1.0),
            Srgb::new(0.0, 0.0, 0.0),
            Srgb::new(0.5, 0.3, 0.8),
        ];
        for (i, &color) in colors.iter().enumerate() {
            let back = oklch_to_srgb(srgb_to_oklch(color));
            assert!(
                max_diff(back.to_array(), color.to_array()) < 1e-4,
                "color {i}: {back:?} vs {color:?}"
            );
        }
    }

    #[test]
    fn oklch_to_srgb_clamps_out_of_gamut() {
        let srgb = oklch_to_srgb(OkLch::new(0.9, 0.4, 150.0));
        assert!(srgb.in_gamut(), "{srgb:?}");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn unit() -> impl Strategy<Value = f32> {
            0.0_f32..=1.0
        }

        proptest! {
            #[test]
            fn srgb_linear_round_trip_within_epsilon(r in unit(), g in unit(), b in unit()) {
                let original = Srgb { r, g, b };
                let back = linear_to_srgb(srgb_to_linear(original));
                prop_assert!(max_diff(back.to_array(), original.to_array()) < 1e-5,
                    "{back:?} vs {original:?}");
            }

            #[test]
            fn linear_xyz_round_trip(r in unit(), g in unit(), b in unit()) {
                let original = LinearRgb { r, g, b };
                let back = xyz_to_linear(linear_to_xyz(original));
                prop_assert!(max_diff(back.to_array(), original.to_array()) < 1e-5);
            }

            #[test]
            fn xyz_oklab_round_trip(r in unit(), g in unit(), b in unit()) {
                let xyz = linear_to_xyz(LinearRgb { r, g, b });
                let back = oklab_to_xyz(xyz_to_oklab(xyz));
                prop_assert!(max_diff(back.to_array(), xyz.to_array()) < 1e-4,
                    "{back:?} vs {xyz:?}");
            }

            #[test]
            fn xyz_cielab_round_trip(r in unit(), g in unit(), b in unit()) {
                let xyz = xyz_d65_to_d50(linear_to_xyz(LinearRgb { r, g, b }));
                let back = cielab_to_xyz(xyz_to_cielab(xyz));
                prop_assert!(max_diff(back.to_array(), xyz.to_array()) < 1e-4,
                    "{back:?} vs {xyz:?}");
            }

            #[test]
            fn cielab_cielch_round_trip(
                l in unit(),
                a in -100.0_f32..100.0,
                b in -100.0_f32..100.0,
            ) {
                let lab = CieLab { l, a, b };
                let back = cielch_to_cielab(cielab_to_cielch(lab));
                prop_assert!(max_diff(back.to_array(), lab.to_array()) < 2e-3,
                    "{back:?} vs {lab:?}");
            }

            #[test]
            fn srgb_to_oklch_round_trip(r in unit(), g in unit(), b in unit()) {
                let original = Srgb { r, g, b };
                let back = oklch_to_srgb(srgb_to_oklch(original));
                prop_assert!(max_diff(back.to_array(), original.to_array()) < 1e-3,
                    "{back:?} vs {original:?}");
            }

            #[test]
            fn srgb_to_cielab_round_trip(r in unit(), g in unit(), b in unit()) {
                let original = Srgb { r, g, b };
                let back = cielab_to_srgb(srgb_to_cielab(original));
                prop_assert!(max_diff(back.to_array(), original.to_array()) < 1e-3,
                    "{back:?} vs {original:?}");
            }

            #[test]
            fn oklch_hue_is_never_nan(
                l in unit(),
                a in -0.5_f32..=0.5,
                b in -0.5_f32..=0.5,
            ) {
                let lch = oklab_to_oklch(OkLab { l, a, b });
                prop_assert!(!lch.h.is_nan() && !lch.c.is_nan());
                prop_assert!((0.0..360.0).contains(&lch.h), "hue {}", lch.h);
            }
        }
    }
}

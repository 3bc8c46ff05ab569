//! Process-wide read-only constants: transform matrices, white points and
//! the numeric thresholds the conversions and gamut mapper share.
//!
//! Everything here is a `const`, evaluated at compile time and never mutated.

use glam::{Mat3, Vec3};

use crate::math::mat3_from_rows;

/// Hue assigned to achromatic colors, whose hue is undefined.
pub const UNDEFINED_HUE: f32 = 0.0;

/// General achromatic cutoff for saturation in HSV/HSL.
pub const EPS_UNIT: f32 = 1e-5;

/// Chroma below which an OKLab/OKLCH color is treated as achromatic.
pub const OKLAB_ACHROMATIC: f32 = 4e-6;

/// Chroma below which a CIELab/CIELCH color is treated as achromatic.
pub const CIELAB_ACHROMATIC: f32 = 0.0015;

/// Just-noticeable difference in OKLab Delta E.
pub const JND: f32 = 0.02;

/// Convergence tolerance of the gamut-mapping chroma search.
pub const GAMUT_TOLERANCE: f32 = 1e-4;

/// CIE kappa, 29^3/3^3.
pub const CIE_KAPPA: f32 = 24389.0 / 27.0;

/// CIE epsilon, 6^3/29^3.
pub const CIE_EPSILON: f32 = 216.0 / 24389.0;

/// D50 reference white, Y normalized to 1 (x = 0.3457, y = 0.3585).
pub const D50: Vec3 = Vec3::new(0.3457 / 0.3585, 1.0, (1.0 - 0.3457 - 0.3585) / 0.3585);

/// D65 reference white, Y normalized to 1 (x = 0.3127, y = 0.3290).
pub const D65: Vec3 = Vec3::new(0.3127 / 0.3290, 1.0, (1.0 - 0.3127 - 0.3290) / 0.3290);

/// Linear sRGB to CIE XYZ (D65), from the exact rational primaries.
pub const LINEAR_SRGB_TO_XYZ: Mat3 = mat3_from_rows([
    [506752.0 / 1228815.0, 87881.0 / 245763.0, 12673.0 / 70218.0],
    [87098.0 / 409605.0, 175762.0 / 245763.0, 12673.0 / 175545.0],
    [7918.0 / 409605.0, 87881.0 / 737289.0, 1001167.0 / 1053270.0],
]);

/// CIE XYZ (D65) to linear sRGB.
pub const XYZ_TO_LINEAR_SRGB: Mat3 = mat3_from_rows([
    [12831.0 / 3959.0, -329.0 / 214.0, -1974.0 / 3959.0],
    [-851781.0 / 878810.0, 1648619.0 / 878810.0, 36519.0 / 878810.0],
    [705.0 / 12673.0, -2585.0 / 12673.0, 705.0 / 667.0],
]);

/// Bradford chromatic adaptation from D65 to D50.
pub const D65_TO_D50: Mat3 = mat3_from_rows([
    [1.0479297925449969, 0.022946870601609652, -0.05019226628920524],
    [0.02962780877005599, 0.9904344267538799, -0.017073799063418826],
    [-0.009243040646204504, 0.015055191490298152, 0.7518742814281371],
]);

/// Bradford chromatic adaptation from D50 to D65.
pub const D50_TO_D65: Mat3 = mat3_from_rows([
    [0.955473421488075, -0.02309845494876471, 0.06325924320057072],
    [-0.0283697093338637, 1.0099953980813041, 0.021041441191917323],
    [0.012314014864481998, -0.020507649298898964, 1.330365926242124],
]);

/// CIE XYZ (D65) to OKLab's LMS cone response.
pub const XYZ_TO_LMS: Mat3 = mat3_from_rows([
    [0.8190224379967030, 0.3619062600528904, -0.1288737815209879],
    [0.0329836539323885, 0.9292868615863434, 0.0361446663506424],
    [0.0481771893596242, 0.2642395317527308, 0.6335478284694309],
]);

/// Nonlinear (cube-rooted) LMS to OKLab.
pub const LMS_TO_OKLAB: Mat3 = mat3_from_rows([
    [0.2104542683093140, 0.7936177747023054, -0.0040720430116193],
    [1.9779985324311684, -2.4285922420485799, 0.4505937096174110],
    [0.0259040424655478, 0.7827717124575296, -0.8086757549230774],
]);

/// LMS to CIE XYZ (D65).
pub const LMS_TO_XYZ: Mat3 = mat3_from_rows([
    [1.2268798758459243, -0.5578149944602171, 0.2813910456659647],
    [-0.0405757452148008, 1.1122868032803170, -0.0717110580655164],
    [-0.0763729366746601, -0.4214933324022432, 1.5869240198367816],
]);

/// OKLab to nonlinear LMS.
pub const OKLAB_TO_LMS: Mat3 = mat3_from_rows([
    [1.0, 0.3963377773761749, 0.2158037573099136],
    [1.0, -0.1055613458156586, -0.0638541728258133],
    [1.0, -0.0894841775298119, -1.2914855480194092],
]);

//! Small vector/matrix kernel shared by the conversion and interpolation code.
//!
//! Matrix and vector storage is `glam`'s `Mat3`/`Vec3` (f32). This module
//! adds the handful of operations color math needs on top: row-major matrix
//! construction in const context, per-component nonlinearities, unit-cube
//! clamping and circular interpolation.

use glam::{Mat3, Vec3};

/// Builds a matrix from rows, so constants read the way they are published.
///
/// `glam` stores matrices column-major; this transposes at compile time.
pub(crate) const fn mat3_from_rows(r: [[f32; 3]; 3]) -> Mat3 {
    Mat3::from_cols(
        Vec3::new(r[0][0], r[1][0], r[2][0]),
        Vec3::new(r[0][1], r[1][1], r[2][1]),
        Vec3::new(r[0][2], r[1][2], r[2][2]),
    )
}

/// Linear interpolation `a + t * (b - a)`. `t` is not clamped.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Component-wise linear interpolation. `t` is not clamped.
#[inline]
pub fn lerp_vec(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + t * (b - a)
}

/// Wraps `x` into `[0, period)`.
///
/// `rem_euclid` can round up to exactly `period` for tiny negative inputs in
/// f32, so that case folds back to 0.
#[inline]
pub fn wrap(x: f32, period: f32) -> f32 {
    let r = x.rem_euclid(period);
    if r >= period {
        0.0
    } else {
        r
    }
}

/// Normalizes a hue angle in degrees to `[0, 360)`.
#[inline]
pub fn normalize_hue(h: f32) -> f32 {
    wrap(h, 360.0)
}

/// Interpolates on a circle of the given period along the shorter arc.
///
/// The raw delta `b - a` is folded into `[-period/2, period/2]` before
/// scaling by `t`, and the result is wrapped back into `[0, period)`.
pub fn lerp_wrap(period: f32, a: f32, b: f32, t: f32) -> f32 {
    let half = period / 2.0;
    let delta = match b - a {
        d if d > half => d - period,
        d if d < -half => d + period,
        d => d,
    };
    wrap(a + t * delta, period)
}

/// Shortest-arc hue interpolation in degrees.
#[inline]
pub fn lerp_hue(h0: f32, h1: f32, t: f32) -> f32 {
    lerp_wrap(360.0, h0, h1, t)
}

/// Clamps every component to `[0, 1]`.
#[inline]
pub fn clamp_unit(v: Vec3) -> Vec3 {
    v.clamp(Vec3::ZERO, Vec3::ONE)
}

/// True when every component lies in `[0, 1]`.
#[inline]
pub fn in_unit_cube(v: Vec3) -> bool {
    v.cmpge(Vec3::ZERO).all() && v.cmple(Vec3::ONE).all()
}

#[inline]
pub(crate) fn cbrt(v: Vec3) -> Vec3 {
    Vec3::new(v.x.cbrt(), v.y.cbrt(), v.z.cbrt())
}

#[inline]
pub(crate) fn cube(v: Vec3) -> Vec3 {
    v * v * v
}

/// Applies `f` to each component.
#[inline]
pub(crate) fn map(v: Vec3, f: impl Fn(f32) -> f32) -> Vec3 {
    Vec3::new(f(v.x), f(v.y), f(v.z))
}

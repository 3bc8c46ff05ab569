//! Pure-computation RGBA8 buffers for gradient strips.
//!
//! Always available (no feature gate) so callers that never touch PNG can
//! still get the raw pixels.

use colorlerp_core::{Rgba64, Space, Srgb};
use rayon::prelude::*;
use tracing::debug;

use crate::{ColorRange, GradientError, RenderConfig};

/// Separator line drawn under every strip.
pub const SEPARATOR: [u8; 4] = [255, 0, 0, 255];

/// One row of `width` samples blending `from` to `to` in `space`.
///
/// Sample `ix` is taken at `v = ix / width`, so the final column stops one
/// step short of `to`.
pub fn strip_row(space: Space, from: Srgb, to: Srgb, width: usize) -> Vec<Rgba64> {
    let dx = 1.0 / width as f32;
    (0..width)
        .into_par_iter()
        .map(|ix| space.lerp(&from, &to, ix as f32 * dx))
        .collect()
}

/// Renders one range as an RGBA8 buffer of `width * image_height * 4` bytes.
///
/// Strips appear in `config.spaces` order, each `config.height` rows tall and
/// followed by a [`SEPARATOR`] row.
pub fn render_range(config: &RenderConfig, range: &ColorRange) -> Result<Vec<u8>, GradientError> {
    config.validate()?;
    let width = config.width;
    let row_bytes = width * 4;

    let strips: Vec<Vec<u8>> = config
        .spaces
        .par_iter()
        .map(|&space| {
            strip_row(space, range.from, range.to, width)
                .into_iter()
                .flat_map(Rgba64::to_rgba8)
                .collect()
        })
        .collect();

    let separator: Vec<u8> = SEPARATOR.repeat(width);
    let mut buf = Vec::with_capacity(row_bytes * config.image_height());
    for row in &strips {
        for _ in 0..config.height {
            buf.extend_from_slice(row);
        }
        buf.extend_from_slice(&separator);
    }
    debug!(
        range = %range.name,
        width,
        height = config.image_height(),
        "rendered gradient buffer"
    );
    Ok(buf)
}

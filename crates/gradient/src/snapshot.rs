//! PNG output for gradient images.
//!
//! Feature-gated behind `png` (default on) so the pixel path can be used
//! without pulling in the `image` crate. The buffer itself comes from
//! [`crate::pixel`].

use std::path::{Path, PathBuf};

use tracing::info;

use crate::pixel::render_range;
use crate::{ColorRange, GradientError, RenderConfig};

/// Writes one range's gradient image as a PNG at `path`.
///
/// Returns `GradientError::InvalidDimensions` if the image size overflows
/// `u32`, or `GradientError::Io` on write failure.
pub fn write_png(
    config: &RenderConfig,
    range: &ColorRange,
    path: &Path,
) -> Result<(), GradientError> {
    let rgba = render_range(config, range)?;
    let w = u32::try_from(config.width).map_err(|_| GradientError::InvalidDimensions)?;
    let h = u32::try_from(config.image_height()).map_err(|_| GradientError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| GradientError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| GradientError::Io(e.to_string()))
}

/// Renders every range in `config` into `dir` as `<name>.png`.
///
/// Creates `dir` if needed and returns the written paths in range order.
pub fn render_all(config: &RenderConfig, dir: &Path) -> Result<Vec<PathBuf>, GradientError> {
    config.validate()?;
    std::fs::create_dir_all(dir)
        .map_err(|e| GradientError::Io(format!("{}: {e}", dir.display())))?;
    config
        .ranges
        .iter()
        .map(|range| {
            let path = dir.join(range.file_name());
            write_png(config, range, &path)?;
            info!(range = %range.name, path = %path.display(), "wrote gradient");
            Ok(path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::SEPARATOR;

    fn small_config() -> RenderConfig {
        RenderConfig {
            width: 20,
            height: 4,
            ..RenderConfig::default()
        }
    }

    #[test]
    fn write_png_round_trip() {
        let config = small_config();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.png");

        write_png(&config, &config.ranges[2], &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 20);
        assert_eq!(img.height(), 5 * 5);
        assert_eq!(img.get_pixel(0, 4).0, SEPARATOR);
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn render_all_writes_one_file_per_range() {
        let config = small_config();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested");

        let paths = render_all(&config, &out).unwrap();

        assert_eq!(paths.len(), 4);
        for (path, range) in paths.iter().zip(&config.ranges) {
            assert_eq!(path, &out.join(range.file_name()));
            assert!(path.exists(), "{} missing", path.display());
        }
    }

    #[test]
    fn unwritable_path_is_io_error() {
        let config = small_config();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("x.png");
        let err = write_png(&config, &config.ranges[0], &path).unwrap_err();
        assert!(matches!(err, GradientError::Io(_)), "{err}");
    }
}

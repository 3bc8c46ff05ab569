#![deny(unsafe_code)]
//! Gradient strip rendering for comparing interpolation spaces.
//!
//! A [`RenderConfig`] lists color ranges and the spaces to blend them in.
//! Each range renders to one image holding a horizontal strip per space,
//! strips separated by a one-pixel red line. The pixel buffer conversion
//! lives in [`pixel`] (always available); PNG output sits behind the `png`
//! feature in [`snapshot`].

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

use std::path::Path;

use colorlerp_core::{ColorError, Space, Srgb};
use serde::{Deserialize, Serialize};

/// Errors from gradient configuration and rendering.
#[derive(Debug, thiserror::Error)]
pub enum GradientError {
    #[error("invalid dimensions")]
    InvalidDimensions,
    #[error("io: {0}")]
    Io(String),
    #[error("config: {0}")]
    Config(String),
    #[error(transparent)]
    Color(#[from] ColorError),
}

/// A named pair of endpoint colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRange {
    pub name: String,
    pub from: Srgb,
    pub to: Srgb,
}

impl ColorRange {
    pub fn new(name: impl Into<String>, from: Srgb, to: Srgb) -> Self {
        Self {
            name: name.into(),
            from,
            to,
        }
    }

    /// Output file name for this range's image.
    pub fn file_name(&self) -> String {
        format!("{}.png", self.name)
    }
}

/// What to render: strip size, color ranges, and interpolation spaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Strip width in pixels; also the number of interpolation samples.
    pub width: usize,
    /// Height of one strip in pixels, excluding the separator line.
    pub height: usize,
    pub ranges: Vec<ColorRange>,
    pub spaces: Vec<Space>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let white = Srgb::new(1.0, 1.0, 1.0);
        let black = Srgb::new(0.0, 0.0, 0.0);
        let red = Srgb::new(1.0, 0.0, 0.0);
        let blue = Srgb::new(0.0, 0.0, 1.0);
        let greyred = Srgb::new(160.0 / 255.0, 127.0 / 255.0, 127.0 / 255.0);
        Self {
            width: 700,
            height: 50,
            ranges: vec![
                ColorRange::new("white-black", white, black),
                ColorRange::new("white-blue", white, blue),
                ColorRange::new("red-blue", red, blue),
                ColorRange::new("greyred-blue", greyred, blue),
            ],
            spaces: Space::ALL.to_vec(),
        }
    }
}

impl RenderConfig {
    /// Parses a JSON config; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, GradientError> {
        let config: RenderConfig =
            serde_json::from_str(json).map_err(|e| GradientError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON config file.
    pub fn from_json_file(path: &Path) -> Result<Self, GradientError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| GradientError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    /// Checks dimensions and range names.
    ///
    /// Range names become file names, so they must be non-empty, unique, and
    /// free of path separators.
    pub fn validate(&self) -> Result<(), GradientError> {
        if self.width == 0 || self.height == 0 {
            return Err(GradientError::InvalidDimensions);
        }
        self.checked_image_height()
            .and_then(|h| h.checked_mul(self.width))
            .and_then(|n| n.checked_mul(4))
            .ok_or(GradientError::InvalidDimensions)?;
        if self.spaces.is_empty() {
            return Err(GradientError::Config("no interpolation spaces".into()));
        }
        for (i, range) in self.ranges.iter().enumerate() {
            let name = &range.name;
            if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
                return Err(GradientError::Config(format!("invalid range name {name:?}")));
            }
            if self.ranges[..i].iter().any(|r| &r.name == name) {
                return Err(GradientError::Config(format!("duplicate range name {name:?}")));
            }
        }
        Ok(())
    }

    /// Replaces the space list, resolving each name with [`Space::from_name`].
    pub fn set_spaces_by_name<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), GradientError> {
        self.spaces = names
            .iter()
            .map(|n| Space::from_name(n.as_ref()))
            .collect::<Result<_, _>>()?;
        Ok(())
    }

    /// Total image height: one strip plus separator per space.
    ///
    /// Saturates on overflow; [`RenderConfig::validate`] rejects such configs.
    pub fn image_height(&self) -> usize {
        self.checked_image_height().unwrap_or(usize::MAX)
    }

    fn checked_image_height(&self) -> Option<usize> {
        self.height
            .checked_add(1)
            .and_then(|h| h.checked_mul(self.spaces.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reproduces_demo_layout() {
        let config = RenderConfig::default();
        assert_eq!((config.width, config.height), (700, 50));
        let names: Vec<_> = config.ranges.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["white-black", "white-blue", "red-blue", "greyred-blue"]);
        assert_eq!(config.spaces, Space::ALL.to_vec());
        assert_eq!(config.image_height(), 51 * 5);
        assert_eq!(config.ranges[3].from.to_hex(), "#a07f7f");
        config.validate().unwrap();
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config = RenderConfig::from_json_str(r#"{"width": 64, "spaces": ["OKLCH", "SRGB"]}"#)
            .unwrap();
        assert_eq!(config.width, 64);
        assert_eq!(config.height, 50);
        assert_eq!(config.spaces, vec![Space::OkLch, Space::Srgb]);
        assert_eq!(config.ranges.len(), 4);
    }

    #[test]
    fn json_ranges_use_hex_colors() {
        let json = r##"{"ranges": [{"name": "teal-gold", "from": "#008080", "to": "ffd700"}]}"##;
        let config = RenderConfig::from_json_str(json).unwrap();
        assert_eq!(config.ranges.len(), 1);
        assert_eq!(config.ranges[0].to.to_hex(), "#ffd700");
        assert_eq!(config.ranges[0].file_name(), "teal-gold.png");
    }

    #[test]
    fn json_round_trips() {
        let config = RenderConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(RenderConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = RenderConfig::from_json_str("{width").unwrap_err();
        assert!(matches!(err, GradientError::Config(_)), "{err}");
    }

    #[test]
    fn unknown_space_is_config_error() {
        let err = RenderConfig::from_json_str(r#"{"spaces": ["CMYK"]}"#).unwrap_err();
        assert!(matches!(err, GradientError::Config(_)), "{err}");
    }

    #[test]
    fn zero_dimensions_rejected() {
        let config = RenderConfig {
            width: 0,
            ..RenderConfig::default()
        };
        assert!(matches!(config.validate(), Err(GradientError::InvalidDimensions)));
    }

    #[test]
    fn overflowing_dimensions_rejected() {
        let config = RenderConfig {
            width: usize::MAX / 2,
            ..RenderConfig::default()
        };
        assert!(matches!(config.validate(), Err(GradientError::InvalidDimensions)));
    }

    #[test]
    fn overflowing_height_rejected() {
        let config = RenderConfig {
            height: usize::MAX,
            ..RenderConfig::default()
        };
        assert!(matches!(config.validate(), Err(GradientError::InvalidDimensions)));
        assert_eq!(config.image_height(), usize::MAX);

        let config = RenderConfig {
            height: usize::MAX / 3,
            ..RenderConfig::default()
        };
        assert!(matches!(config.validate(), Err(GradientError::InvalidDimensions)));
    }

    #[test]
    fn set_spaces_by_name_accepts_aliases() {
        let mut config = RenderConfig::default();
        config.set_spaces_by_name(&["lin-sRGB", "oklch"]).unwrap();
        assert_eq!(config.spaces, vec![Space::LinearSrgb, Space::OkLch]);
    }

    #[test]
    fn set_spaces_by_name_unknown_is_color_error() {
        let mut config = RenderConfig::default();
        let err = config.set_spaces_by_name(&["OKLCH", "cmyk"]).unwrap_err();
        assert!(matches!(err, GradientError::Color(ColorError::UnknownSpace(_))), "{err}");
        assert_eq!(config.spaces, Space::ALL.to_vec());
    }

    #[test]
    fn json_spaces_accept_aliases() {
        let config =
            RenderConfig::from_json_str(r#"{"spaces": ["lin-sRGB", "CIE-XYZ"]}"#).unwrap();
        assert_eq!(config.spaces, vec![Space::LinearSrgb, Space::CieXyz]);
    }

    #[test]
    fn empty_spaces_rejected() {
        let config = RenderConfig {
            spaces: vec![],
            ..RenderConfig::default()
        };
        assert!(matches!(config.validate(), Err(GradientError::Config(_))));
    }

    #[test]
    fn path_like_and_duplicate_names_rejected() {
        let mut config = RenderConfig::default();
        config.ranges[0].name = "../escape".into();
        assert!(config.validate().is_err());

        let mut config = RenderConfig::default();
        config.ranges[1].name = config.ranges[0].name.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = RenderConfig::from_json_file(Path::new("/nonexistent/colorlerp.json"))
            .unwrap_err();
        assert!(matches!(err, GradientError::Io(_)));
    }

    #[test]
    fn color_error_converts() {
        let err: GradientError = ColorError::InvalidColor("#zz".into()).into();
        assert!(err.to_string().contains("#zz"));
    }
}

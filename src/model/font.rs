//! Font descriptors handed to the host's text measurement.

use serde::Deserialize;

/// Describes a font for measurement and caption styling.
///
/// The crate never rasterizes text; a descriptor is an opaque request the host
/// [`CaptionMeasurer`](crate::style::CaptionMeasurer) interprets.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontDescriptor {
    /// Font family. `None` selects the host's system font.
    #[serde(default)]
    pub family: Option<String>,
    /// Point size.
    pub size: f32,
    /// Bold weight.
    #[serde(default)]
    pub bold: bool,
}

impl FontDescriptor {
    /// Bold system font at `size` points.
    pub fn bold_system(size: f32) -> Self {
        Self {
            family: None,
            size,
            bold: true,
        }
    }

    /// Regular-weight system font at `size` points.
    pub fn system(size: f32) -> Self {
        Self {
            family: None,
            size,
            bold: false,
        }
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::bold_system(17.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_bold_seventeen() {
        let font = FontDescriptor::default();
        assert_eq!(font.size, 17.0);
        assert!(font.bold);
        assert_eq!(font.family, None);
    }

    #[test]
    fn deserializes_from_toml_with_defaults() {
        let font: FontDescriptor = toml::from_str("size = 12.0").unwrap();
        assert_eq!(font, FontDescriptor::system(12.0));
    }
}

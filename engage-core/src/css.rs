//! Pure style derivation: composite CSS values from element scalars.
//!
//! Every function here is total and pulls its inputs with inline defaults;
//! callers re-derive after any component change instead of caching results.

use crate::style::{
    FilterSettings, Gradient, HoverKind, OverlayPosition, Shadow, TextShadow,
};

/// Substitute for an empty image source.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/800x400";

/// Media-library upload path that historically arrives with doubled slashes.
pub const UPLOADS_MEDIA_PATH: &str = "/uploads/media/";

/// Flex alignment value for one axis of the overlay box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexAlign {
    /// `flex-start`
    Start,
    /// `center`
    Center,
    /// `flex-end`
    End,
}

impl FlexAlign {
    /// CSS keyword for this alignment.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Start => "flex-start",
            Self::Center => "center",
            Self::End => "flex-end",
        }
    }
}

impl FilterSettings {
    /// Compose the CSS `filter` value, emitting only non-neutral functions.
    ///
    /// Returns the literal `"none"` when every scalar is at its neutral
    /// default, keeping generated CSS minimal.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut functions = Vec::new();
        if self.brightness != 100 {
            functions.push(format!("brightness({}%)", self.brightness));
        }
        if self.contrast != 100 {
            functions.push(format!("contrast({}%)", self.contrast));
        }
        if self.saturation != 100 {
            functions.push(format!("saturate({}%)", self.saturation));
        }
        if self.hue_rotate != 0 {
            functions.push(format!("hue-rotate({}deg)", self.hue_rotate));
        }
        if self.blur != "0px" && !self.blur.is_empty() {
            functions.push(format!("blur({})", self.blur));
        }
        if self.grayscale != 0 {
            functions.push(format!("grayscale({}%)", self.grayscale));
        }
        if self.sepia != 0 {
            functions.push(format!("sepia({}%)", self.sepia));
        }
        if (self.opacity - 1.0).abs() > f32::EPSILON {
            functions.push(format!("opacity({})", self.opacity));
        }
        if functions.is_empty() {
            "none".to_string()
        } else {
            functions.join(" ")
        }
    }
}

impl Shadow {
    /// Compose the CSS `box-shadow` value from components.
    ///
    /// The `enabled` flag is the kill switch: disabled shadows are `"none"`
    /// regardless of component values.
    #[must_use]
    pub fn to_css(&self) -> String {
        if !self.enabled {
            return "none".to_string();
        }
        format!(
            "{} {} {} {} {}",
            self.offset_x, self.offset_y, self.blur, self.spread, self.color
        )
    }
}

impl Gradient {
    /// Compose the CSS `linear-gradient` value from components, or `"none"`.
    #[must_use]
    pub fn to_css(&self) -> String {
        if !self.enabled {
            return "none".to_string();
        }
        format!(
            "linear-gradient({}deg, {} 0%, {} 100%)",
            self.angle, self.start_color, self.end_color
        )
    }
}

impl TextShadow {
    /// Compose the CSS `text-shadow` value from components, or `"none"`.
    #[must_use]
    pub fn to_css(&self) -> String {
        if !self.enabled {
            return "none".to_string();
        }
        format!(
            "{} {} {} {}",
            self.offset_x, self.offset_y, self.blur, self.color
        )
    }
}

impl OverlayPosition {
    /// Flex alignment pair `(align_items, justify_content)` for this tag.
    ///
    /// Vertical and horizontal components parse independently: `top`/`bottom`
    /// pin the cross axis, `left`/`right` pin the main axis, anything else
    /// centers.
    #[must_use]
    pub const fn alignment(self) -> (FlexAlign, FlexAlign) {
        let vertical = match self {
            Self::Top | Self::TopLeft | Self::TopRight => FlexAlign::Start,
            Self::Bottom | Self::BottomLeft | Self::BottomRight => FlexAlign::End,
            Self::Center => FlexAlign::Center,
        };
        let horizontal = match self {
            Self::TopLeft | Self::BottomLeft => FlexAlign::Start,
            Self::TopRight | Self::BottomRight => FlexAlign::End,
            Self::Top | Self::Bottom | Self::Center => FlexAlign::Center,
        };
        (vertical, horizontal)
    }
}

impl HoverKind {
    /// Style declarations applied to the image on hover, `camelCase` keys.
    #[must_use]
    pub fn declarations(self, transition: &str) -> Vec<(&'static str, String)> {
        let (property, value, transitioned) = match self {
            Self::Zoom => ("transform", "scale(1.1)", "transform"),
            Self::Brighten => ("filter", "brightness(1.2)", "filter"),
            Self::Darken => ("filter", "brightness(0.8)", "filter"),
            Self::Blur => ("filter", "blur(3px)", "filter"),
            Self::Grayscale => ("filter", "grayscale(100%)", "filter"),
            Self::Sepia => ("filter", "sepia(100%)", "filter"),
            Self::Shadow => ("boxShadow", "0 5px 15px rgba(0,0,0,0.3)", "box-shadow"),
        };
        vec![
            (property, value.to_string()),
            ("transition", format!("{transitioned} {transition} ease")),
        ]
    }
}

/// Normalize a possibly-empty image URL for rendering.
///
/// Empty input yields the placeholder; relative paths gain a leading slash;
/// media-library upload paths collapse any run of leading slashes to exactly
/// one. Idempotent.
#[must_use]
pub fn format_image_url(url: &str) -> String {
    if url.is_empty() {
        return PLACEHOLDER_IMAGE_URL.to_string();
    }
    let mut fixed = if url.starts_with("http") || url.starts_with('/') {
        url.to_string()
    } else {
        format!("/{url}")
    };
    if fixed.contains(UPLOADS_MEDIA_PATH) {
        fixed = format!("/{}", fixed.trim_start_matches('/'));
    }
    fixed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_neutral_defaults_are_none() {
        assert_eq!(FilterSettings::default().to_css(), "none");
    }

    #[test]
    fn test_filter_single_scalar_emits_single_function() {
        let cases: Vec<(FilterSettings, &str)> = vec![
            (
                FilterSettings {
                    brightness: 120,
                    ..FilterSettings::default()
                },
                "brightness(120%)",
            ),
            (
                FilterSettings {
                    contrast: 80,
                    ..FilterSettings::default()
                },
                "contrast(80%)",
            ),
            (
                FilterSettings {
                    saturation: 150,
                    ..FilterSettings::default()
                },
                "saturate(150%)",
            ),
            (
                FilterSettings {
                    hue_rotate: 90,
                    ..FilterSettings::default()
                },
                "hue-rotate(90deg)",
            ),
            (
                FilterSettings {
                    blur: "2px".to_string(),
                    ..FilterSettings::default()
                },
                "blur(2px)",
            ),
            (
                FilterSettings {
                    grayscale: 50,
                    ..FilterSettings::default()
                },
                "grayscale(50%)",
            ),
            (
                FilterSettings {
                    sepia: 30,
                    ..FilterSettings::default()
                },
                "sepia(30%)",
            ),
            (
                FilterSettings {
                    opacity: 0.5,
                    ..FilterSettings::default()
                },
                "opacity(0.5)",
            ),
        ];
        for (settings, expected) in cases {
            assert_eq!(settings.to_css(), expected);
        }
    }

    #[test]
    fn test_filter_function_order() {
        let settings = FilterSettings {
            brightness: 110,
            sepia: 20,
            blur: "1px".to_string(),
            ..FilterSettings::default()
        };
        assert_eq!(settings.to_css(), "brightness(110%) blur(1px) sepia(20%)");
    }

    #[test]
    fn test_box_shadow_kill_switch() {
        let shadow = Shadow {
            enabled: false,
            blur: "99px".to_string(),
            ..Shadow::default()
        };
        assert_eq!(shadow.to_css(), "none");
    }

    #[test]
    fn test_box_shadow_composed_from_components() {
        let shadow = Shadow {
            enabled: true,
            ..Shadow::default()
        };
        assert_eq!(shadow.to_css(), "0 4px 10px 0 rgba(0,0,0,0.2)");
    }

    #[test]
    fn test_gradient_composition() {
        let gradient = Gradient {
            enabled: true,
            ..Gradient::default()
        };
        assert_eq!(
            gradient.to_css(),
            "linear-gradient(135deg, #ffffff 0%, #f0f0f0 100%)"
        );
        assert_eq!(Gradient::default().to_css(), "none");
    }

    #[test]
    fn test_text_shadow_composition() {
        let shadow = TextShadow {
            enabled: true,
            ..TextShadow::default()
        };
        assert_eq!(shadow.to_css(), "1px 1px 2px rgba(0,0,0,0.3)");
    }

    #[test]
    fn test_url_normalization() {
        assert_eq!(format_image_url(""), PLACEHOLDER_IMAGE_URL);
        assert_eq!(format_image_url("foo.png"), "/foo.png");
        assert_eq!(format_image_url("http://x/y.png"), "http://x/y.png");
        assert_eq!(
            format_image_url("/uploads/media/x.png"),
            "/uploads/media/x.png"
        );
        assert_eq!(
            format_image_url("//uploads/media/x.png"),
            "/uploads/media/x.png"
        );
    }

    #[test]
    fn test_url_normalization_idempotent() {
        for input in ["", "foo.png", "http://x/y.png", "//uploads/media/x.png"] {
            let once = format_image_url(input);
            assert_eq!(format_image_url(&once), once);
        }
    }

    #[test]
    fn test_overlay_alignment_table() {
        use FlexAlign::{Center, End, Start};
        let table = [
            (OverlayPosition::Top, Start, Center),
            (OverlayPosition::Bottom, End, Center),
            (OverlayPosition::Center, Center, Center),
            (OverlayPosition::TopLeft, Start, Start),
            (OverlayPosition::TopRight, Start, End),
            (OverlayPosition::BottomLeft, End, Start),
            (OverlayPosition::BottomRight, End, End),
        ];
        for (position, vertical, horizontal) in table {
            assert_eq!(position.alignment(), (vertical, horizontal));
        }
        assert_eq!(
            OverlayPosition::parse("sideways").alignment(),
            (Center, Center)
        );
    }
}

//! Visual style types shared by every element variant.
//!
//! Composite CSS values (box shadow, gradient, text shadow, filter) are kept
//! as component scalars plus an `enabled` kill switch and composed only at
//! render time by [`crate::css`]. Disabling a group keeps its components, so
//! toggling off and back on is non-destructive.

use serde::{Deserialize, Serialize};

/// Border line style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// No border is drawn.
    #[default]
    None,
    /// Solid line.
    Solid,
    /// Dashed line.
    Dashed,
    /// Dotted line.
    Dotted,
    /// Double line.
    Double,
}

impl BorderStyle {
    /// CSS keyword for this style.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
            Self::Double => "double",
        }
    }

    /// Parse a CSS keyword, falling back to `None` for unknown input.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "solid" => Self::Solid,
            "dashed" => Self::Dashed,
            "dotted" => Self::Dotted,
            "double" => Self::Double,
            _ => Self::None,
        }
    }
}

/// Border group: style, width, color, radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Border {
    /// Line style; `None` suppresses width and color entirely.
    pub style: BorderStyle,
    /// Line width, CSS length.
    pub width: String,
    /// Line color.
    pub color: String,
    /// Corner radius, CSS length.
    pub radius: String,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            style: BorderStyle::None,
            width: "1px".to_string(),
            color: "#dee2e6".to_string(),
            radius: "0".to_string(),
        }
    }
}

/// Linear background gradient, composed from components at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    /// Kill switch; when false the gradient renders as `none`.
    pub enabled: bool,
    /// Gradient start color.
    pub start_color: String,
    /// Gradient end color.
    pub end_color: String,
    /// Gradient angle in degrees.
    pub angle: u16,
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            enabled: false,
            start_color: "#ffffff".to_string(),
            end_color: "#f0f0f0".to_string(),
            angle: 135,
        }
    }
}

/// Box shadow, composed from components at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Kill switch; when false the shadow renders as `none`.
    pub enabled: bool,
    /// Shadow color.
    pub color: String,
    /// Blur radius, CSS length.
    pub blur: String,
    /// Spread radius, CSS length.
    pub spread: String,
    /// Horizontal offset, CSS length.
    pub offset_x: String,
    /// Vertical offset, CSS length.
    pub offset_y: String,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            enabled: false,
            color: "rgba(0,0,0,0.2)".to_string(),
            blur: "10px".to_string(),
            spread: "0".to_string(),
            offset_x: "0".to_string(),
            offset_y: "4px".to_string(),
        }
    }
}

/// Text shadow, composed from components at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextShadow {
    /// Kill switch; when false the shadow renders as `none`.
    pub enabled: bool,
    /// Shadow color.
    pub color: String,
    /// Blur radius, CSS length.
    pub blur: String,
    /// Horizontal offset, CSS length.
    pub offset_x: String,
    /// Vertical offset, CSS length.
    pub offset_y: String,
}

impl Default for TextShadow {
    fn default() -> Self {
        Self {
            enabled: false,
            color: "rgba(0,0,0,0.3)".to_string(),
            blur: "2px".to_string(),
            offset_x: "1px".to_string(),
            offset_y: "1px".to_string(),
        }
    }
}

/// Entrance animation. `name == None` means no animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    /// CSS animation name; `None` disables animation.
    pub name: Option<String>,
    /// Animation duration.
    pub duration: String,
    /// Animation delay.
    pub delay: String,
    /// Easing function.
    pub easing: String,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            name: None,
            duration: "1s".to_string(),
            delay: "0s".to_string(),
            easing: "ease".to_string(),
        }
    }
}

impl Animation {
    /// Shorthand value `name duration easing delay`, or `None` when disabled.
    #[must_use]
    pub fn shorthand(&self) -> Option<String> {
        self.name.as_ref().map(|name| {
            format!("{name} {} {} {}", self.duration, self.easing, self.delay)
        })
    }
}

/// Responsive visibility and mobile size overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Responsive {
    /// Hide the element below the mobile breakpoint.
    pub hide_on_mobile: bool,
    /// Hide the element above the mobile breakpoint.
    pub hide_on_desktop: bool,
    /// Width override below the mobile breakpoint.
    pub mobile_width: Option<String>,
    /// Height override below the mobile breakpoint.
    pub mobile_height: Option<String>,
}

/// Accessibility attributes emitted on the rendered element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Accessibility {
    /// ARIA label for screen readers.
    pub aria_label: String,
    /// ARIA role.
    pub role: String,
    /// Tab index.
    pub tab_index: i32,
}

/// Visual fields present on every element variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualStyle {
    /// Element width, CSS length.
    pub width: String,
    /// Element height, CSS length.
    pub height: String,
    /// Outer margin shorthand.
    pub margin: String,
    /// Inner padding shorthand.
    pub padding: String,
    /// Border group.
    pub border: Border,
    /// Background color; `transparent` suppresses the declaration.
    pub background_color: String,
    /// Background gradient group.
    pub gradient: Gradient,
    /// Box shadow group.
    pub shadow: Shadow,
    /// Entrance animation group.
    pub animation: Animation,
    /// Responsive overrides.
    pub responsive: Responsive,
    /// Accessibility attributes.
    pub accessibility: Accessibility,
}

impl Default for VisualStyle {
    fn default() -> Self {
        Self {
            width: "100%".to_string(),
            height: "auto".to_string(),
            margin: "0 0 1rem 0".to_string(),
            padding: "0".to_string(),
            border: Border::default(),
            background_color: "transparent".to_string(),
            gradient: Gradient::default(),
            shadow: Shadow::default(),
            animation: Animation::default(),
            responsive: Responsive::default(),
            accessibility: Accessibility::default(),
        }
    }
}

/// How an image fills its box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectFit {
    /// Scale to fit inside the box, preserving aspect ratio.
    #[default]
    Contain,
    /// Scale to cover the box, preserving aspect ratio.
    Cover,
    /// Stretch to fill the box.
    Fill,
    /// Keep intrinsic size.
    None,
    /// Like `none` or `contain`, whichever is smaller.
    ScaleDown,
}

impl ObjectFit {
    /// CSS keyword for this fit mode.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Contain => "contain",
            Self::Cover => "cover",
            Self::Fill => "fill",
            Self::None => "none",
            Self::ScaleDown => "scale-down",
        }
    }

    /// Parse a CSS keyword, falling back to `Contain`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "cover" => Self::Cover,
            "fill" => Self::Fill,
            "none" => Self::None,
            "scale-down" => Self::ScaleDown,
            _ => Self::Contain,
        }
    }
}

/// Image filter scalars. Neutral defaults produce no filter functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSettings {
    /// Brightness percentage; 100 is neutral.
    pub brightness: u16,
    /// Contrast percentage; 100 is neutral.
    pub contrast: u16,
    /// Saturation percentage; 100 is neutral.
    pub saturation: u16,
    /// Hue rotation in degrees; 0 is neutral.
    pub hue_rotate: u16,
    /// Blur radius, CSS length; `0px` is neutral.
    pub blur: String,
    /// Grayscale percentage; 0 is neutral.
    pub grayscale: u8,
    /// Sepia percentage; 0 is neutral.
    pub sepia: u8,
    /// Opacity 0.0..=1.0; 1.0 is neutral.
    pub opacity: f32,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            brightness: 100,
            contrast: 100,
            saturation: 100,
            hue_rotate: 0,
            blur: "0px".to_string(),
            grayscale: 0,
            sepia: 0,
            opacity: 1.0,
        }
    }
}

/// Position of overlay content within the image box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayPosition {
    /// Centered in both axes.
    #[default]
    Center,
    /// Top edge, horizontally centered.
    Top,
    /// Bottom edge, horizontally centered.
    Bottom,
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

impl OverlayPosition {
    /// Position tag as stored in legacy documents.
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }

    /// Parse a position tag; any unrecognized value centers both axes.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            "top-left" => Self::TopLeft,
            "top-right" => Self::TopRight,
            "bottom-left" => Self::BottomLeft,
            "bottom-right" => Self::BottomRight,
            _ => Self::Center,
        }
    }
}

/// Text or tint overlay drawn over an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    /// Kill switch; when false no overlay node is rendered.
    pub enabled: bool,
    /// Overlay background color.
    pub color: String,
    /// Overlay opacity 0.0..=1.0.
    pub opacity: f32,
    /// Optional text displayed inside the overlay.
    pub text: String,
    /// Overlay text color.
    pub text_color: String,
    /// Overlay text size, CSS length.
    pub text_size: String,
    /// Placement of the overlay content.
    pub position: OverlayPosition,
}

impl Default for Overlay {
    fn default() -> Self {
        Self {
            enabled: false,
            color: "rgba(0,0,0,0.5)".to_string(),
            opacity: 0.5,
            text: String::new(),
            text_color: "#ffffff".to_string(),
            text_size: "1rem".to_string(),
            position: OverlayPosition::Center,
        }
    }
}

/// Click-to-enlarge lightbox behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lightbox {
    /// Whether clicking the image opens a lightbox.
    pub enabled: bool,
    /// Caption shown in the lightbox; falls back to the image caption.
    pub caption: String,
}

/// Hover effect applied to the rendered image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverKind {
    /// Scale the image up.
    Zoom,
    /// Increase brightness.
    #[default]
    Brighten,
    /// Decrease brightness.
    Darken,
    /// Blur the image.
    Blur,
    /// Full grayscale.
    Grayscale,
    /// Full sepia.
    Sepia,
    /// Drop shadow.
    Shadow,
}

impl HoverKind {
    /// Tag as stored in legacy documents.
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Zoom => "zoom",
            Self::Brighten => "brighten",
            Self::Darken => "darken",
            Self::Blur => "blur",
            Self::Grayscale => "grayscale",
            Self::Sepia => "sepia",
            Self::Shadow => "shadow",
        }
    }

    /// Parse a tag, falling back to `Brighten`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "zoom" => Self::Zoom,
            "darken" => Self::Darken,
            "blur" => Self::Blur,
            "grayscale" => Self::Grayscale,
            "sepia" => Self::Sepia,
            "shadow" => Self::Shadow,
            _ => Self::Brighten,
        }
    }
}

/// Hover effect group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverEffect {
    /// Kill switch; when false no hover rules are emitted.
    pub enabled: bool,
    /// Which effect runs on hover.
    pub kind: HoverKind,
    /// Transition duration.
    pub transition: String,
}

impl Default for HoverEffect {
    fn default() -> Self {
        Self {
            enabled: false,
            kind: HoverKind::Brighten,
            transition: "0.3s".to_string(),
        }
    }
}

/// Which text structure a text element renders as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextType {
    /// `<h1>`..`<h6>` heading.
    Heading,
    /// Plain paragraph.
    #[default]
    Paragraph,
    /// Ordered or unordered list.
    List,
}

impl TextType {
    /// Tag as stored in legacy documents.
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::Paragraph => "paragraph",
            Self::List => "list",
        }
    }

    /// Parse a tag, falling back to `Paragraph`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "heading" => Self::Heading,
            "list" => Self::List,
            _ => Self::Paragraph,
        }
    }
}

/// List numbering scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    /// `<ul>` with bullet markers.
    #[default]
    Unordered,
    /// `<ol>` with counter markers.
    Ordered,
}

/// Typography settings used while `text_type` is `Heading`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingStyle {
    /// Heading level 1..=6.
    pub level: u8,
    /// Text color.
    pub color: String,
    /// Horizontal alignment keyword.
    pub alignment: String,
    /// Font size, CSS length.
    pub size: String,
    /// Font weight keyword or number.
    pub weight: String,
    /// `text-transform` keyword.
    pub transform: String,
    /// `font-style` keyword.
    pub font_style: String,
    /// `text-decoration` keyword.
    pub decoration: String,
    /// Line height.
    pub line_height: String,
    /// Letter spacing.
    pub letter_spacing: String,
    /// Text shadow group.
    pub shadow: TextShadow,
}

impl Default for HeadingStyle {
    fn default() -> Self {
        Self {
            level: 2,
            color: "#212529".to_string(),
            alignment: "left".to_string(),
            size: "1.75rem".to_string(),
            weight: "bold".to_string(),
            transform: "none".to_string(),
            font_style: "normal".to_string(),
            decoration: "none".to_string(),
            line_height: "1.5".to_string(),
            letter_spacing: "normal".to_string(),
            shadow: TextShadow::default(),
        }
    }
}

/// Typography settings used while `text_type` is `Paragraph`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Text color.
    pub color: String,
    /// Horizontal alignment keyword (includes `justify`).
    pub alignment: String,
    /// Font size, CSS length.
    pub size: String,
    /// Font weight keyword or number.
    pub weight: String,
    /// `text-transform` keyword.
    pub transform: String,
    /// `font-style` keyword.
    pub font_style: String,
    /// `text-decoration` keyword.
    pub decoration: String,
    /// Line height.
    pub line_height: String,
    /// Letter spacing.
    pub letter_spacing: String,
    /// First-line indent, CSS length.
    pub indent: String,
    /// Text shadow group.
    pub shadow: TextShadow,
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self {
            color: "#212529".to_string(),
            alignment: "left".to_string(),
            size: "1rem".to_string(),
            weight: "normal".to_string(),
            transform: "none".to_string(),
            font_style: "normal".to_string(),
            decoration: "none".to_string(),
            line_height: "1.5".to_string(),
            letter_spacing: "normal".to_string(),
            indent: "0".to_string(),
            shadow: TextShadow::default(),
        }
    }
}

/// Typography settings used while `text_type` is `List`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListStyle {
    /// Ordered or unordered.
    pub list_type: ListType,
    /// `list-style-type` marker keyword.
    pub marker: String,
    /// Text color.
    pub color: String,
    /// Font size, CSS length.
    pub size: String,
    /// Font weight keyword or number.
    pub weight: String,
    /// Spacing between items, CSS length.
    pub spacing: String,
    /// `text-transform` keyword.
    pub transform: String,
    /// `font-style` keyword.
    pub font_style: String,
    /// `text-decoration` keyword.
    pub decoration: String,
    /// Line height.
    pub line_height: String,
    /// Letter spacing.
    pub letter_spacing: String,
    /// List items.
    pub items: Vec<String>,
    /// Text shadow group.
    pub shadow: TextShadow,
}

impl Default for ListStyle {
    fn default() -> Self {
        Self {
            list_type: ListType::Unordered,
            marker: "disc".to_string(),
            color: "#212529".to_string(),
            size: "1rem".to_string(),
            weight: "normal".to_string(),
            spacing: "0.5rem".to_string(),
            transform: "none".to_string(),
            font_style: "normal".to_string(),
            decoration: "none".to_string(),
            line_height: "1.5".to_string(),
            letter_spacing: "normal".to_string(),
            items: vec![
                "Item 1".to_string(),
                "Item 2".to_string(),
                "Item 3".to_string(),
            ],
            shadow: TextShadow::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_style_round_trip() {
        for style in [
            BorderStyle::None,
            BorderStyle::Solid,
            BorderStyle::Dashed,
            BorderStyle::Dotted,
            BorderStyle::Double,
        ] {
            assert_eq!(BorderStyle::parse(style.as_css()), style);
        }
    }

    #[test]
    fn test_unknown_border_style_is_none() {
        assert_eq!(BorderStyle::parse("wavy"), BorderStyle::None);
    }

    #[test]
    fn test_overlay_position_unknown_centers() {
        assert_eq!(OverlayPosition::parse("diagonal"), OverlayPosition::Center);
        assert_eq!(OverlayPosition::parse(""), OverlayPosition::Center);
    }

    #[test]
    fn test_animation_shorthand_order() {
        let animation = Animation {
            name: Some("fade-in".to_string()),
            ..Animation::default()
        };
        assert_eq!(animation.shorthand().as_deref(), Some("fade-in 1s ease 0s"));
        assert_eq!(Animation::default().shorthand(), None);
    }

    #[test]
    fn test_hover_kind_round_trip() {
        for kind in [
            HoverKind::Zoom,
            HoverKind::Brighten,
            HoverKind::Darken,
            HoverKind::Blur,
            HoverKind::Grayscale,
            HoverKind::Sepia,
            HoverKind::Shadow,
        ] {
            assert_eq!(HoverKind::parse(kind.as_tag()), kind);
        }
    }
}

//! Page elements - the building blocks of Engage pages.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::style::{
    FilterSettings, HeadingStyle, HoverEffect, Lightbox, ListStyle, ObjectFit, Overlay,
    ParagraphStyle, TextType, VisualStyle,
};

/// Unique identifier for an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(Uuid);

impl ElementId {
    /// Create a new unique element ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse from a string representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid UUID.
    pub fn parse(value: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(value).map(Self)
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Image-specific content and effects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageProps {
    /// Canonical image URL. Legacy documents expose this as both `src`
    /// and `imageUrl`.
    pub src: String,
    /// Canonical alt text. Legacy documents expose this as both `alt`
    /// and `imageAlt`.
    pub alt: String,
    /// Caption rendered below the image.
    pub caption: String,
    /// Media-library record backing `src`, when selected from the picker.
    pub media_id: Option<String>,
    /// Thumbnail shown in the editor's content section.
    pub thumbnail_url: Option<String>,
    /// How the image fills its box.
    pub object_fit: ObjectFit,
    /// Filter scalars.
    pub filter: FilterSettings,
    /// Overlay group.
    pub overlay: Overlay,
    /// Lightbox group.
    pub lightbox: Lightbox,
    /// Hover effect group.
    pub hover: HoverEffect,
}

/// Text-specific content and typography.
///
/// All three typography groups are retained regardless of the active
/// `text_type`, so switching the type back and forth loses nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextProps {
    /// Text content (heading text or paragraph body).
    pub content: String,
    /// Which structure this element renders as.
    pub text_type: TextType,
    /// Font family stack.
    pub font_family: String,
    /// Typography while `text_type` is `Heading`.
    pub heading: HeadingStyle,
    /// Typography while `text_type` is `Paragraph`.
    pub paragraph: ParagraphStyle,
    /// Typography while `text_type` is `List`.
    pub list: ListStyle,
    /// `overflow` keyword.
    pub overflow: String,
    /// `word-break` keyword.
    pub word_break: String,
    /// `word-wrap` keyword.
    pub word_wrap: String,
}

impl Default for TextProps {
    fn default() -> Self {
        Self {
            content: String::new(),
            text_type: TextType::Paragraph,
            font_family: "inherit".to_string(),
            heading: HeadingStyle::default(),
            paragraph: ParagraphStyle::default(),
            list: ListStyle::default(),
            overflow: "visible".to_string(),
            word_break: "normal".to_string(),
            word_wrap: "normal".to_string(),
        }
    }
}

impl TextProps {
    /// Font size of the currently active typography group.
    ///
    /// Exactly one of the prefixed sizes feeds this value, selected by
    /// `text_type`; the inactive groups keep their sizes untouched.
    #[must_use]
    pub fn font_size(&self) -> &str {
        match self.text_type {
            TextType::Heading => &self.heading.size,
            TextType::Paragraph => &self.paragraph.size,
            TextType::List => &self.list.size,
        }
    }
}

/// The type of content an element contains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "props", rename_all = "lowercase")]
pub enum ElementKind {
    /// An image with filters, overlay, lightbox, and hover effects.
    Image(ImageProps),
    /// A heading, paragraph, or list.
    Text(TextProps),
}

impl ElementKind {
    /// Legacy type discriminator tag.
    #[must_use]
    pub const fn as_tag(&self) -> &'static str {
        match self {
            Self::Image(_) => "image",
            Self::Text(_) => "text",
        }
    }
}

/// A placed, styleable page element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier, stable across edits.
    pub id: ElementId,
    /// Human-readable label shown in the editor.
    pub label: String,
    /// Visual fields shared by every variant.
    pub style: VisualStyle,
    /// Variant-specific content.
    pub kind: ElementKind,
}

impl Element {
    /// Create an image element with variant defaults.
    #[must_use]
    pub fn image(label: impl Into<String>) -> Self {
        let style = VisualStyle {
            accessibility: crate::style::Accessibility {
                role: "img".to_string(),
                ..crate::style::Accessibility::default()
            },
            ..VisualStyle::default()
        };
        Self {
            id: ElementId::new(),
            label: label.into(),
            style,
            kind: ElementKind::Image(ImageProps::default()),
        }
    }

    /// Create a text element with variant defaults.
    #[must_use]
    pub fn text(label: impl Into<String>) -> Self {
        Self {
            id: ElementId::new(),
            label: label.into(),
            style: VisualStyle::default(),
            kind: ElementKind::Text(TextProps::default()),
        }
    }

    /// Image props, if this is an image element.
    #[must_use]
    pub const fn as_image(&self) -> Option<&ImageProps> {
        match &self.kind {
            ElementKind::Image(props) => Some(props),
            ElementKind::Text(_) => None,
        }
    }

    /// Text props, if this is a text element.
    #[must_use]
    pub const fn as_text(&self) -> Option<&TextProps> {
        match &self.kind {
            ElementKind::Text(props) => Some(props),
            ElementKind::Image(_) => None,
        }
    }

    /// Best-available alt text: alt, then label, then a generic fallback.
    #[must_use]
    pub fn alt_text(&self) -> &str {
        match &self.kind {
            ElementKind::Image(props) if !props.alt.is_empty() => &props.alt,
            _ if !self.label.is_empty() => &self.label,
            _ => "Image",
        }
    }
}

//! Property editing over one element.
//!
//! The editor exposes two explicit operations instead of an event-shaped
//! callback: [`PropertyEditor::patch_field`] for single-field edits (keyed by
//! the legacy `camelCase` field names the form controls bind to) and
//! [`PropertyEditor::replace`] for atomic whole-object updates. Media
//! selection, which historically required a sentinel event to touch several
//! fields at once, is its own operation: [`PropertyEditor::apply_media`].

use serde::{Deserialize, Serialize};

use crate::collapse::{SectionKind, SectionPane};
use crate::element::{Element, ElementKind, ImageProps, TextProps};
use crate::error::{CoreError, CoreResult};
use crate::media::MediaItem;
use crate::style::{
    BorderStyle, HoverKind, ListType, ObjectFit, OverlayPosition, TextType, VisualStyle,
};

/// A value delivered by a form control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Text input, select, or dimension input.
    Text(String),
    /// Slider or number input.
    Number(f64),
    /// Checkbox or switch.
    Toggle(bool),
}

impl PropertyValue {
    fn to_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => format!("{n}"),
            Self::Toggle(b) => b.to_string(),
        }
    }

    fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Toggle(b) => Some(*b),
            Self::Text(s) => match s.as_str() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            },
            Self::Number(_) => None,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Toggle(_) => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Toggle(value)
    }
}

/// Editor over one element: field patches, whole-object replacement, and
/// per-section collapse state.
#[derive(Debug, Clone)]
pub struct PropertyEditor {
    element: Element,
    panes: Vec<SectionPane>,
}

impl PropertyEditor {
    /// Create an editor for the given element, with the section set and
    /// default collapse states for its variant.
    #[must_use]
    pub fn new(element: Element) -> Self {
        let panes = Self::panes_for(&element.kind);
        Self { element, panes }
    }

    fn panes_for(kind: &ElementKind) -> Vec<SectionPane> {
        let sections: &[(SectionKind, bool)] = match kind {
            ElementKind::Image(_) => &[
                (SectionKind::Content, true),
                (SectionKind::Layout, false),
                (SectionKind::Styling, false),
                (SectionKind::Effects, false),
                (SectionKind::Animation, false),
                (SectionKind::Responsive, false),
                (SectionKind::Accessibility, false),
            ],
            ElementKind::Text(_) => &[
                (SectionKind::Content, true),
                (SectionKind::Typography, true),
                (SectionKind::AdvancedTypography, false),
                (SectionKind::Layout, false),
                (SectionKind::Styling, false),
                (SectionKind::Animation, false),
                (SectionKind::Responsive, false),
                (SectionKind::Accessibility, false),
            ],
        };
        let mut panes = vec![SectionPane::forced_open(SectionKind::Preview)];
        panes.extend(
            sections
                .iter()
                .map(|&(kind, expanded)| SectionPane::new(kind, expanded)),
        );
        panes
    }

    /// The element being edited.
    #[must_use]
    pub const fn element(&self) -> &Element {
        &self.element
    }

    /// Consume the editor, returning the edited element.
    #[must_use]
    pub fn into_element(self) -> Element {
        self.element
    }

    /// Section panes in display order.
    #[must_use]
    pub fn panes(&self) -> &[SectionPane] {
        &self.panes
    }

    /// Mutable pane for one section, if the variant shows it.
    pub fn pane_mut(&mut self, kind: SectionKind) -> Option<&mut SectionPane> {
        self.panes.iter_mut().find(|pane| pane.kind == kind)
    }

    /// Unconditional whole-object replacement.
    pub fn replace(&mut self, element: Element) {
        tracing::debug!(element_id = %element.id, "replacing element");
        if std::mem::discriminant(&element.kind) != std::mem::discriminant(&self.element.kind) {
            self.panes = Self::panes_for(&element.kind);
        }
        self.element = element;
    }

    /// Apply a media selection atomically: source, media id, thumbnail, and
    /// the alt-text fallback chain (only when no alt is set yet).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::KindMismatch`] for text elements.
    pub fn apply_media(&mut self, media: &MediaItem) -> CoreResult<()> {
        let ElementKind::Image(props) = &mut self.element.kind else {
            return Err(CoreError::KindMismatch { expected: "image" });
        };
        tracing::debug!(element_id = %self.element.id, media_id = %media.id, "applying media selection");
        props.src = media.url.clone();
        props.media_id = Some(media.id.clone());
        if let Some(thumbnail) = &media.thumbnail_url {
            props.thumbnail_url = Some(thumbnail.clone());
        }
        if props.alt.is_empty() {
            if let Some(alt) = media.alt_text() {
                props.alt = alt.to_string();
            }
        }
        Ok(())
    }

    /// Patch one field by its legacy `camelCase` name.
    ///
    /// Alias names (`imageUrl` for `src`, `imageAlt` for `alt`) write the
    /// same canonical field, so the alias pair can never drift apart.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownProperty`] when no variant of this element
    /// exposes the field, and [`CoreError::InvalidValue`] when the value
    /// cannot be parsed for it.
    pub fn patch_field(&mut self, name: &str, value: &PropertyValue) -> CoreResult<()> {
        tracing::debug!(element_id = %self.element.id, field = name, "patching element field");
        if patch_common(&mut self.element, name, value)? {
            return Ok(());
        }
        let patched = match &mut self.element.kind {
            ElementKind::Image(props) => patch_image(props, name, value)?,
            ElementKind::Text(props) => patch_text(props, name, value)?,
        };
        if patched {
            Ok(())
        } else {
            Err(CoreError::UnknownProperty(name.to_string()))
        }
    }
}

fn invalid(name: &str, value: &PropertyValue) -> CoreError {
    CoreError::InvalidValue {
        property: name.to_string(),
        value: value.to_text(),
    }
}

fn require_bool(name: &str, value: &PropertyValue) -> CoreResult<bool> {
    value.as_bool().ok_or_else(|| invalid(name, value))
}

fn require_f64(name: &str, value: &PropertyValue) -> CoreResult<f64> {
    value.as_f64().ok_or_else(|| invalid(name, value))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn require_u16(name: &str, value: &PropertyValue) -> CoreResult<u16> {
    let number = require_f64(name, value)?;
    if (0.0..=f64::from(u16::MAX)).contains(&number) {
        Ok(number as u16)
    } else {
        Err(invalid(name, value))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn require_u8(name: &str, value: &PropertyValue) -> CoreResult<u8> {
    let number = require_f64(name, value)?;
    if (0.0..=f64::from(u8::MAX)).contains(&number) {
        Ok(number as u8)
    } else {
        Err(invalid(name, value))
    }
}

#[allow(clippy::cast_possible_truncation)]
fn require_f32(name: &str, value: &PropertyValue) -> CoreResult<f32> {
    require_f64(name, value).map(|n| n as f32)
}

/// Fields shared by every variant. Returns `Ok(false)` when the name is not
/// a shared field.
#[allow(clippy::too_many_lines)]
fn patch_common(element: &mut Element, name: &str, value: &PropertyValue) -> CoreResult<bool> {
    let style: &mut VisualStyle = &mut element.style;
    match name {
        "label" => element.label = value.to_text(),
        "width" => style.width = value.to_text(),
        "height" => style.height = value.to_text(),
        "margin" => style.margin = value.to_text(),
        "padding" => style.padding = value.to_text(),
        "borderStyle" => style.border.style = BorderStyle::parse(&value.to_text()),
        "borderWidth" => style.border.width = value.to_text(),
        "borderColor" => style.border.color = value.to_text(),
        "borderRadius" => style.border.radius = value.to_text(),
        "backgroundColor" => style.background_color = value.to_text(),
        // The gradient and shadow selects deliver "none" or "custom"; any
        // non-"none" value flips the kill switch, the components stay put.
        "backgroundGradient" => style.gradient.enabled = value.to_text() != "none",
        "backgroundGradientStartColor" => style.gradient.start_color = value.to_text(),
        "backgroundGradientEndColor" => style.gradient.end_color = value.to_text(),
        "backgroundGradientAngle" => {
            style.gradient.angle = require_u16(name, value)?;
        }
        "boxShadow" => style.shadow.enabled = value.to_text() != "none",
        "boxShadowColor" => style.shadow.color = value.to_text(),
        "boxShadowBlur" => style.shadow.blur = value.to_text(),
        "boxShadowSpread" => style.shadow.spread = value.to_text(),
        "boxShadowOffsetX" => style.shadow.offset_x = value.to_text(),
        "boxShadowOffsetY" => style.shadow.offset_y = value.to_text(),
        "animation" => {
            let text = value.to_text();
            style.animation.name = if text == "none" || text.is_empty() {
                None
            } else {
                Some(text)
            };
        }
        "animationDuration" => style.animation.duration = value.to_text(),
        "animationDelay" => style.animation.delay = value.to_text(),
        "animationEasing" => style.animation.easing = value.to_text(),
        "hideOnMobile" => style.responsive.hide_on_mobile = require_bool(name, value)?,
        "hideOnDesktop" => style.responsive.hide_on_desktop = require_bool(name, value)?,
        "mobileWidth" => {
            let text = value.to_text();
            style.responsive.mobile_width = (!text.is_empty()).then_some(text);
        }
        "mobileHeight" => {
            let text = value.to_text();
            style.responsive.mobile_height = (!text.is_empty()).then_some(text);
        }
        "ariaLabel" => style.accessibility.aria_label = value.to_text(),
        "role" => style.accessibility.role = value.to_text(),
        "tabIndex" => {
            #[allow(clippy::cast_possible_truncation)]
            {
                style.accessibility.tab_index = require_f64(name, value)? as i32;
            }
        }
        _ => return Ok(false),
    }
    Ok(true)
}

/// Image-only fields. Returns `Ok(false)` when the name is not recognized.
#[allow(clippy::too_many_lines)]
fn patch_image(props: &mut ImageProps, name: &str, value: &PropertyValue) -> CoreResult<bool> {
    match name {
        // Alias pairs collapse onto the canonical fields.
        "src" | "imageUrl" => props.src = value.to_text(),
        "alt" | "imageAlt" => props.alt = value.to_text(),
        "caption" => props.caption = value.to_text(),
        "mediaId" => {
            let text = value.to_text();
            props.media_id = (!text.is_empty()).then_some(text);
        }
        "thumbnailUrl" => {
            let text = value.to_text();
            props.thumbnail_url = (!text.is_empty()).then_some(text);
        }
        "objectFit" => props.object_fit = ObjectFit::parse(&value.to_text()),
        "brightness" => props.filter.brightness = require_u16(name, value)?,
        "contrast" => props.filter.contrast = require_u16(name, value)?,
        "saturation" => props.filter.saturation = require_u16(name, value)?,
        "hueRotate" => props.filter.hue_rotate = require_u16(name, value)?,
        "blur" => props.filter.blur = value.to_text(),
        "grayscale" => props.filter.grayscale = require_u8(name, value)?,
        "sepia" => props.filter.sepia = require_u8(name, value)?,
        "opacity" => props.filter.opacity = require_f32(name, value)?,
        "overlay" => props.overlay.enabled = require_bool(name, value)?,
        "overlayColor" => props.overlay.color = value.to_text(),
        "overlayOpacity" => props.overlay.opacity = require_f32(name, value)?,
        "overlayText" => props.overlay.text = value.to_text(),
        "overlayTextColor" => props.overlay.text_color = value.to_text(),
        "overlayTextSize" => props.overlay.text_size = value.to_text(),
        "overlayPosition" => props.overlay.position = OverlayPosition::parse(&value.to_text()),
        "enableLightbox" => props.lightbox.enabled = require_bool(name, value)?,
        "lightboxCaption" => props.lightbox.caption = value.to_text(),
        "hoverEffect" => props.hover.enabled = require_bool(name, value)?,
        "hoverEffectType" => props.hover.kind = HoverKind::parse(&value.to_text()),
        "hoverTransitionDuration" => props.hover.transition = value.to_text(),
        _ => return Ok(false),
    }
    Ok(true)
}

/// Text-only fields. Returns `Ok(false)` when the name is not recognized.
#[allow(clippy::too_many_lines)]
fn patch_text(props: &mut TextProps, name: &str, value: &PropertyValue) -> CoreResult<bool> {
    match name {
        "content" => props.content = value.to_text(),
        "textType" => props.text_type = TextType::parse(&value.to_text()),
        "fontFamily" => props.font_family = value.to_text(),
        "overflow" => props.overflow = value.to_text(),
        "wordBreak" => props.word_break = value.to_text(),
        "wordWrap" => props.word_wrap = value.to_text(),

        "headingLevel" => {
            let level = require_u8(name, value)?;
            if !(1..=6).contains(&level) {
                return Err(invalid(name, value));
            }
            props.heading.level = level;
        }
        "headingColor" => props.heading.color = value.to_text(),
        "headingAlignment" => props.heading.alignment = value.to_text(),
        "headingSize" => props.heading.size = value.to_text(),
        "headingWeight" => props.heading.weight = value.to_text(),
        "headingTransform" => props.heading.transform = value.to_text(),
        "headingStyle" => props.heading.font_style = value.to_text(),
        "headingDecoration" => props.heading.decoration = value.to_text(),
        "headingLineHeight" => props.heading.line_height = value.to_text(),
        "headingLetterSpacing" => props.heading.letter_spacing = value.to_text(),
        "headingTextShadow" => props.heading.shadow.enabled = value.to_text() != "none",
        "headingTextShadowColor" => props.heading.shadow.color = value.to_text(),
        "headingTextShadowBlur" => props.heading.shadow.blur = value.to_text(),
        "headingTextShadowOffsetX" => props.heading.shadow.offset_x = value.to_text(),
        "headingTextShadowOffsetY" => props.heading.shadow.offset_y = value.to_text(),

        "paragraphColor" => props.paragraph.color = value.to_text(),
        "paragraphAlignment" => props.paragraph.alignment = value.to_text(),
        "paragraphSize" => props.paragraph.size = value.to_text(),
        "paragraphWeight" => props.paragraph.weight = value.to_text(),
        "paragraphTransform" => props.paragraph.transform = value.to_text(),
        "paragraphStyle" => props.paragraph.font_style = value.to_text(),
        "paragraphDecoration" => props.paragraph.decoration = value.to_text(),
        "paragraphLineHeight" => props.paragraph.line_height = value.to_text(),
        "paragraphLetterSpacing" => props.paragraph.letter_spacing = value.to_text(),
        "paragraphIndent" => props.paragraph.indent = value.to_text(),
        "paragraphTextShadow" => props.paragraph.shadow.enabled = value.to_text() != "none",
        "paragraphTextShadowColor" => props.paragraph.shadow.color = value.to_text(),
        "paragraphTextShadowBlur" => props.paragraph.shadow.blur = value.to_text(),
        "paragraphTextShadowOffsetX" => props.paragraph.shadow.offset_x = value.to_text(),
        "paragraphTextShadowOffsetY" => props.paragraph.shadow.offset_y = value.to_text(),

        "listType" => {
            props.list.list_type = if value.to_text() == "ordered" {
                ListType::Ordered
            } else {
                ListType::Unordered
            };
        }
        "listStyle" => props.list.marker = value.to_text(),
        "listStyle2" => props.list.font_style = value.to_text(),
        "listColor" => props.list.color = value.to_text(),
        "listSize" => props.list.size = value.to_text(),
        "listWeight" => props.list.weight = value.to_text(),
        "listSpacing" => props.list.spacing = value.to_text(),
        "listTransform" => props.list.transform = value.to_text(),
        "listDecoration" => props.list.decoration = value.to_text(),
        "listLineHeight" => props.list.line_height = value.to_text(),
        "listLetterSpacing" => props.list.letter_spacing = value.to_text(),
        "listItems" => {
            props.list.items = value
                .to_text()
                .lines()
                .map(str::to_string)
                .filter(|line| !line.is_empty())
                .collect();
        }
        "listTextShadow" => props.list.shadow.enabled = value.to_text() != "none",
        "listTextShadowColor" => props.list.shadow.color = value.to_text(),
        "listTextShadowBlur" => props.list.shadow.blur = value.to_text(),
        "listTextShadowOffsetX" => props.list.shadow.offset_x = value.to_text(),
        "listTextShadowOffsetY" => props.list.shadow.offset_y = value.to_text(),
        _ => return Ok(false),
    }
    Ok(true)
}

//! Legacy flat-document adapter.
//!
//! Persisted pages store each element as one flat `camelCase` object: alias
//! pairs (`src`/`imageUrl`, `alt`/`imageAlt`), derived composite strings
//! (`boxShadow`, `filter`, `backgroundGradient`, the per-type text shadows),
//! and a `fontSize` projection of the active typography group all live next
//! to the component fields they duplicate. [`ElementDocument::from_element`]
//! derives every duplicate from the canonical model so persisted documents
//! are always internally consistent; [`ElementDocument::into_element`] parses
//! tolerantly, trusting components over composites.

use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementId, ElementKind, ImageProps, TextProps};
use crate::style::{
    Animation, Border, BorderStyle, FilterSettings, Gradient, HoverEffect, HoverKind, Lightbox,
    ListType, ObjectFit, Overlay, OverlayPosition, Shadow, TextShadow, TextType, VisualStyle,
};

/// One element as stored in a persisted page document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ElementDocument {
    /// Element identifier.
    pub id: String,
    /// Variant tag: `image` or `text`.
    #[serde(rename = "type")]
    pub element_type: String,
    /// Editor label.
    pub label: String,

    /// Canonical image URL.
    pub src: String,
    /// Alias of `src`, kept for templates that read `imageUrl`.
    pub image_url: String,
    /// Canonical alt text.
    pub alt: String,
    /// Alias of `alt`.
    pub image_alt: String,
    /// Image caption.
    pub caption: String,
    /// Media-library record id.
    pub media_id: String,
    /// Editor thumbnail URL.
    pub thumbnail_url: String,
    /// `object-fit` keyword.
    pub object_fit: String,

    /// Brightness percentage.
    pub brightness: u16,
    /// Contrast percentage.
    pub contrast: u16,
    /// Saturation percentage.
    pub saturation: u16,
    /// Hue rotation in degrees.
    pub hue_rotate: u16,
    /// Blur radius.
    pub blur: String,
    /// Grayscale percentage.
    pub grayscale: u8,
    /// Sepia percentage.
    pub sepia: u8,
    /// Opacity 0.0..=1.0.
    pub opacity: f32,
    /// Derived composite `filter` value.
    pub filter: String,

    /// Overlay toggle.
    pub overlay: bool,
    /// Overlay background color.
    pub overlay_color: String,
    /// Overlay opacity.
    pub overlay_opacity: f32,
    /// Overlay text.
    pub overlay_text: String,
    /// Overlay text color.
    pub overlay_text_color: String,
    /// Overlay text size.
    pub overlay_text_size: String,
    /// Overlay position tag.
    pub overlay_position: String,

    /// Lightbox toggle.
    pub enable_lightbox: bool,
    /// Lightbox caption.
    pub lightbox_caption: String,
    /// Hover effect toggle.
    pub hover_effect: bool,
    /// Hover effect tag.
    pub hover_effect_type: String,
    /// Hover transition duration.
    pub hover_transition_duration: String,

    /// Text content.
    pub content: String,
    /// Active text structure tag.
    pub text_type: String,
    /// Font family stack.
    pub font_family: String,
    /// Derived projection of the active typography group's size.
    pub font_size: String,
    /// `overflow` keyword.
    pub overflow: String,
    /// `word-break` keyword.
    pub word_break: String,
    /// `word-wrap` keyword.
    pub word_wrap: String,

    /// Heading level 1..=6.
    pub heading_level: u8,
    /// Heading color.
    pub heading_color: String,
    /// Heading alignment.
    pub heading_alignment: String,
    /// Heading size.
    pub heading_size: String,
    /// Heading weight.
    pub heading_weight: String,
    /// Heading `text-transform`.
    pub heading_transform: String,
    /// Heading `font-style`.
    pub heading_style: String,
    /// Heading `text-decoration`.
    pub heading_decoration: String,
    /// Heading line height.
    pub heading_line_height: String,
    /// Heading letter spacing.
    pub heading_letter_spacing: String,
    /// Derived composite heading `text-shadow` value.
    pub heading_text_shadow: String,
    /// Heading shadow color.
    pub heading_text_shadow_color: String,
    /// Heading shadow blur.
    pub heading_text_shadow_blur: String,
    /// Heading shadow x offset.
    pub heading_text_shadow_offset_x: String,
    /// Heading shadow y offset.
    pub heading_text_shadow_offset_y: String,

    /// Paragraph color.
    pub paragraph_color: String,
    /// Paragraph alignment.
    pub paragraph_alignment: String,
    /// Paragraph size.
    pub paragraph_size: String,
    /// Paragraph weight.
    pub paragraph_weight: String,
    /// Paragraph `text-transform`.
    pub paragraph_transform: String,
    /// Paragraph `font-style`.
    pub paragraph_style: String,
    /// Paragraph `text-decoration`.
    pub paragraph_decoration: String,
    /// Paragraph line height.
    pub paragraph_line_height: String,
    /// Paragraph letter spacing.
    pub paragraph_letter_spacing: String,
    /// Paragraph first-line indent.
    pub paragraph_indent: String,
    /// Derived composite paragraph `text-shadow` value.
    pub paragraph_text_shadow: String,
    /// Paragraph shadow color.
    pub paragraph_text_shadow_color: String,
    /// Paragraph shadow blur.
    pub paragraph_text_shadow_blur: String,
    /// Paragraph shadow x offset.
    pub paragraph_text_shadow_offset_x: String,
    /// Paragraph shadow y offset.
    pub paragraph_text_shadow_offset_y: String,

    /// List numbering tag: `ordered` or `unordered`.
    pub list_type: String,
    /// `list-style-type` marker.
    pub list_style: String,
    /// List color.
    pub list_color: String,
    /// List size.
    pub list_size: String,
    /// List weight.
    pub list_weight: String,
    /// Spacing between items.
    pub list_spacing: String,
    /// List `text-transform`.
    pub list_transform: String,
    /// List `font-style`; `listStyle` itself is the marker keyword.
    #[serde(rename = "listStyle2")]
    pub list_style2: String,
    /// List `text-decoration`.
    pub list_decoration: String,
    /// List line height.
    pub list_line_height: String,
    /// List letter spacing.
    pub list_letter_spacing: String,
    /// List items.
    pub list_items: Vec<String>,
    /// Derived composite list `text-shadow` value.
    pub list_text_shadow: String,
    /// List shadow color.
    pub list_text_shadow_color: String,
    /// List shadow blur.
    pub list_text_shadow_blur: String,
    /// List shadow x offset.
    pub list_text_shadow_offset_x: String,
    /// List shadow y offset.
    pub list_text_shadow_offset_y: String,

    /// Element width.
    pub width: String,
    /// Element height.
    pub height: String,
    /// Outer margin shorthand.
    pub margin: String,
    /// Inner padding shorthand.
    pub padding: String,
    /// Border style keyword.
    pub border_style: String,
    /// Border width.
    pub border_width: String,
    /// Border color.
    pub border_color: String,
    /// Border radius.
    pub border_radius: String,
    /// Background color.
    pub background_color: String,
    /// Derived composite gradient value, or `none`.
    pub background_gradient: String,
    /// Gradient start color.
    pub background_gradient_start_color: String,
    /// Gradient end color.
    pub background_gradient_end_color: String,
    /// Gradient angle in degrees.
    pub background_gradient_angle: u16,
    /// Derived composite `box-shadow` value, or `none`.
    pub box_shadow: String,
    /// Shadow color.
    pub box_shadow_color: String,
    /// Shadow blur.
    pub box_shadow_blur: String,
    /// Shadow spread.
    pub box_shadow_spread: String,
    /// Shadow x offset.
    pub box_shadow_offset_x: String,
    /// Shadow y offset.
    pub box_shadow_offset_y: String,

    /// Animation name, or `none`.
    pub animation: String,
    /// Animation duration.
    pub animation_duration: String,
    /// Animation delay.
    pub animation_delay: String,
    /// Easing function.
    pub animation_easing: String,

    /// Hide below the mobile breakpoint.
    pub hide_on_mobile: bool,
    /// Hide above the mobile breakpoint.
    pub hide_on_desktop: bool,
    /// Mobile width override.
    pub mobile_width: String,
    /// Mobile height override.
    pub mobile_height: String,

    /// ARIA label.
    pub aria_label: String,
    /// ARIA role.
    pub role: String,
    /// Tab index.
    pub tab_index: i32,
}

impl Default for ElementDocument {
    fn default() -> Self {
        Self::from_element(&Element::text(String::new()))
    }
}

impl ElementDocument {
    /// Project an element into the flat document shape, deriving every alias
    /// and composite from canonical fields.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn from_element(element: &Element) -> Self {
        let style = &element.style;
        let image = match &element.kind {
            ElementKind::Image(props) => props.clone(),
            ElementKind::Text(_) => ImageProps::default(),
        };
        let text = match &element.kind {
            ElementKind::Text(props) => props.clone(),
            ElementKind::Image(_) => TextProps::default(),
        };
        Self {
            id: element.id.to_string(),
            element_type: element.kind.as_tag().to_string(),
            label: element.label.clone(),

            image_url: image.src.clone(),
            src: image.src,
            image_alt: image.alt.clone(),
            alt: image.alt,
            caption: image.caption,
            media_id: image.media_id.unwrap_or_default(),
            thumbnail_url: image.thumbnail_url.unwrap_or_default(),
            object_fit: image.object_fit.as_css().to_string(),

            filter: image.filter.to_css(),
            brightness: image.filter.brightness,
            contrast: image.filter.contrast,
            saturation: image.filter.saturation,
            hue_rotate: image.filter.hue_rotate,
            blur: image.filter.blur,
            grayscale: image.filter.grayscale,
            sepia: image.filter.sepia,
            opacity: image.filter.opacity,

            overlay: image.overlay.enabled,
            overlay_color: image.overlay.color,
            overlay_opacity: image.overlay.opacity,
            overlay_text: image.overlay.text,
            overlay_text_color: image.overlay.text_color,
            overlay_text_size: image.overlay.text_size,
            overlay_position: image.overlay.position.as_tag().to_string(),

            enable_lightbox: image.lightbox.enabled,
            lightbox_caption: image.lightbox.caption,
            hover_effect: image.hover.enabled,
            hover_effect_type: image.hover.kind.as_tag().to_string(),
            hover_transition_duration: image.hover.transition,

            content: text.content,
            text_type: text.text_type.as_tag().to_string(),
            font_size: match text.text_type {
                TextType::Heading => text.heading.size.clone(),
                TextType::Paragraph => text.paragraph.size.clone(),
                TextType::List => text.list.size.clone(),
            },
            font_family: text.font_family,
            overflow: text.overflow,
            word_break: text.word_break,
            word_wrap: text.word_wrap,

            heading_level: text.heading.level,
            heading_color: text.heading.color,
            heading_alignment: text.heading.alignment,
            heading_size: text.heading.size,
            heading_weight: text.heading.weight,
            heading_transform: text.heading.transform,
            heading_style: text.heading.font_style,
            heading_decoration: text.heading.decoration,
            heading_line_height: text.heading.line_height,
            heading_letter_spacing: text.heading.letter_spacing,
            heading_text_shadow: text.heading.shadow.to_css(),
            heading_text_shadow_color: text.heading.shadow.color,
            heading_text_shadow_blur: text.heading.shadow.blur,
            heading_text_shadow_offset_x: text.heading.shadow.offset_x,
            heading_text_shadow_offset_y: text.heading.shadow.offset_y,

            paragraph_color: text.paragraph.color,
            paragraph_alignment: text.paragraph.alignment,
            paragraph_size: text.paragraph.size,
            paragraph_weight: text.paragraph.weight,
            paragraph_transform: text.paragraph.transform,
            paragraph_style: text.paragraph.font_style,
            paragraph_decoration: text.paragraph.decoration,
            paragraph_line_height: text.paragraph.line_height,
            paragraph_letter_spacing: text.paragraph.letter_spacing,
            paragraph_indent: text.paragraph.indent,
            paragraph_text_shadow: text.paragraph.shadow.to_css(),
            paragraph_text_shadow_color: text.paragraph.shadow.color,
            paragraph_text_shadow_blur: text.paragraph.shadow.blur,
            paragraph_text_shadow_offset_x: text.paragraph.shadow.offset_x,
            paragraph_text_shadow_offset_y: text.paragraph.shadow.offset_y,

            list_type: match text.list.list_type {
                ListType::Ordered => "ordered".to_string(),
                ListType::Unordered => "unordered".to_string(),
            },
            list_style: text.list.marker,
            list_color: text.list.color,
            list_size: text.list.size,
            list_weight: text.list.weight,
            list_spacing: text.list.spacing,
            list_transform: text.list.transform,
            list_style2: text.list.font_style,
            list_decoration: text.list.decoration,
            list_line_height: text.list.line_height,
            list_letter_spacing: text.list.letter_spacing,
            list_items: text.list.items,
            list_text_shadow: text.list.shadow.to_css(),
            list_text_shadow_color: text.list.shadow.color,
            list_text_shadow_blur: text.list.shadow.blur,
            list_text_shadow_offset_x: text.list.shadow.offset_x,
            list_text_shadow_offset_y: text.list.shadow.offset_y,

            width: style.width.clone(),
            height: style.height.clone(),
            margin: style.margin.clone(),
            padding: style.padding.clone(),
            border_style: style.border.style.as_css().to_string(),
            border_width: style.border.width.clone(),
            border_color: style.border.color.clone(),
            border_radius: style.border.radius.clone(),
            background_color: style.background_color.clone(),
            background_gradient: style.gradient.to_css(),
            background_gradient_start_color: style.gradient.start_color.clone(),
            background_gradient_end_color: style.gradient.end_color.clone(),
            background_gradient_angle: style.gradient.angle,
            box_shadow: style.shadow.to_css(),
            box_shadow_color: style.shadow.color.clone(),
            box_shadow_blur: style.shadow.blur.clone(),
            box_shadow_spread: style.shadow.spread.clone(),
            box_shadow_offset_x: style.shadow.offset_x.clone(),
            box_shadow_offset_y: style.shadow.offset_y.clone(),

            animation: style
                .animation
                .name
                .clone()
                .unwrap_or_else(|| "none".to_string()),
            animation_duration: style.animation.duration.clone(),
            animation_delay: style.animation.delay.clone(),
            animation_easing: style.animation.easing.clone(),

            hide_on_mobile: style.responsive.hide_on_mobile,
            hide_on_desktop: style.responsive.hide_on_desktop,
            mobile_width: style.responsive.mobile_width.clone().unwrap_or_default(),
            mobile_height: style.responsive.mobile_height.clone().unwrap_or_default(),

            aria_label: style.accessibility.aria_label.clone(),
            role: style.accessibility.role.clone(),
            tab_index: style.accessibility.tab_index,
        }
    }

    /// Rebuild the canonical element from the flat document.
    ///
    /// Parsing is tolerant: unknown enum tags fall back to their defaults,
    /// composite strings only gate the `enabled` flags (`"none"` disables a
    /// group, anything else enables it), and of each alias pair the canonical
    /// name wins when both are set and disagree.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn into_element(self) -> Element {
        let id = ElementId::parse(&self.id).unwrap_or_default();
        let style = VisualStyle {
            width: self.width,
            height: self.height,
            margin: self.margin,
            padding: self.padding,
            border: Border {
                style: BorderStyle::parse(&self.border_style),
                width: self.border_width,
                color: self.border_color,
                radius: self.border_radius,
            },
            background_color: self.background_color,
            gradient: Gradient {
                enabled: self.background_gradient != "none"
                    && !self.background_gradient.is_empty(),
                start_color: self.background_gradient_start_color,
                end_color: self.background_gradient_end_color,
                angle: self.background_gradient_angle,
            },
            shadow: Shadow {
                enabled: self.box_shadow != "none" && !self.box_shadow.is_empty(),
                color: self.box_shadow_color,
                blur: self.box_shadow_blur,
                spread: self.box_shadow_spread,
                offset_x: self.box_shadow_offset_x,
                offset_y: self.box_shadow_offset_y,
            },
            animation: Animation {
                name: (self.animation != "none" && !self.animation.is_empty())
                    .then_some(self.animation),
                duration: self.animation_duration,
                delay: self.animation_delay,
                easing: self.animation_easing,
            },
            responsive: crate::style::Responsive {
                hide_on_mobile: self.hide_on_mobile,
                hide_on_desktop: self.hide_on_desktop,
                mobile_width: (!self.mobile_width.is_empty()).then_some(self.mobile_width),
                mobile_height: (!self.mobile_height.is_empty()).then_some(self.mobile_height),
            },
            accessibility: crate::style::Accessibility {
                aria_label: self.aria_label,
                role: self.role,
                tab_index: self.tab_index,
            },
        };

        let kind = if self.element_type == "image" {
            ElementKind::Image(ImageProps {
                src: if self.src.is_empty() {
                    self.image_url
                } else {
                    self.src
                },
                alt: if self.alt.is_empty() {
                    self.image_alt
                } else {
                    self.alt
                },
                caption: self.caption,
                media_id: (!self.media_id.is_empty()).then_some(self.media_id),
                thumbnail_url: (!self.thumbnail_url.is_empty()).then_some(self.thumbnail_url),
                object_fit: ObjectFit::parse(&self.object_fit),
                filter: FilterSettings {
                    brightness: self.brightness,
                    contrast: self.contrast,
                    saturation: self.saturation,
                    hue_rotate: self.hue_rotate,
                    blur: self.blur,
                    grayscale: self.grayscale,
                    sepia: self.sepia,
                    opacity: self.opacity,
                },
                overlay: Overlay {
                    enabled: self.overlay,
                    color: self.overlay_color,
                    opacity: self.overlay_opacity,
                    text: self.overlay_text,
                    text_color: self.overlay_text_color,
                    text_size: self.overlay_text_size,
                    position: OverlayPosition::parse(&self.overlay_position),
                },
                lightbox: Lightbox {
                    enabled: self.enable_lightbox,
                    caption: self.lightbox_caption,
                },
                hover: HoverEffect {
                    enabled: self.hover_effect,
                    kind: HoverKind::parse(&self.hover_effect_type),
                    transition: self.hover_transition_duration,
                },
            })
        } else {
            let text_type = TextType::parse(&self.text_type);
            let mut heading = crate::style::HeadingStyle {
                level: self.heading_level.clamp(1, 6),
                color: self.heading_color,
                alignment: self.heading_alignment,
                size: self.heading_size,
                weight: self.heading_weight,
                transform: self.heading_transform,
                font_style: self.heading_style,
                decoration: self.heading_decoration,
                line_height: self.heading_line_height,
                letter_spacing: self.heading_letter_spacing,
                shadow: TextShadow {
                    enabled: self.heading_text_shadow != "none"
                        && !self.heading_text_shadow.is_empty(),
                    color: self.heading_text_shadow_color,
                    blur: self.heading_text_shadow_blur,
                    offset_x: self.heading_text_shadow_offset_x,
                    offset_y: self.heading_text_shadow_offset_y,
                },
            };
            let mut paragraph = crate::style::ParagraphStyle {
                color: self.paragraph_color,
                alignment: self.paragraph_alignment,
                size: self.paragraph_size,
                weight: self.paragraph_weight,
                transform: self.paragraph_transform,
                font_style: self.paragraph_style,
                decoration: self.paragraph_decoration,
                line_height: self.paragraph_line_height,
                letter_spacing: self.paragraph_letter_spacing,
                indent: self.paragraph_indent,
                shadow: TextShadow {
                    enabled: self.paragraph_text_shadow != "none"
                        && !self.paragraph_text_shadow.is_empty(),
                    color: self.paragraph_text_shadow_color,
                    blur: self.paragraph_text_shadow_blur,
                    offset_x: self.paragraph_text_shadow_offset_x,
                    offset_y: self.paragraph_text_shadow_offset_y,
                },
            };
            let mut list = crate::style::ListStyle {
                list_type: if self.list_type == "ordered" {
                    ListType::Ordered
                } else {
                    ListType::Unordered
                },
                marker: self.list_style,
                color: self.list_color,
                size: self.list_size,
                weight: self.list_weight,
                spacing: self.list_spacing,
                transform: self.list_transform,
                font_style: self.list_style2,
                decoration: self.list_decoration,
                line_height: self.list_line_height,
                letter_spacing: self.list_letter_spacing,
                items: self.list_items,
                shadow: TextShadow {
                    enabled: self.list_text_shadow != "none"
                        && !self.list_text_shadow.is_empty(),
                    color: self.list_text_shadow_color,
                    blur: self.list_text_shadow_blur,
                    offset_x: self.list_text_shadow_offset_x,
                    offset_y: self.list_text_shadow_offset_y,
                },
            };
            // fontSize is the live field in old documents; it wins over the
            // active group's stored size when both are present.
            if !self.font_size.is_empty() {
                match text_type {
                    TextType::Heading => heading.size = self.font_size,
                    TextType::Paragraph => paragraph.size = self.font_size,
                    TextType::List => list.size = self.font_size,
                }
            }
            ElementKind::Text(TextProps {
                content: self.content,
                text_type,
                font_family: self.font_family,
                heading,
                paragraph,
                list,
                overflow: self.overflow,
                word_break: self.word_break,
                word_wrap: self.word_wrap,
            })
        };

        Element {
            id,
            label: self.label,
            style,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_aliases_and_composites_are_derived() {
        let mut element = Element::image("Hero");
        if let ElementKind::Image(props) = &mut element.kind {
            props.src = "/uploads/media/hero.png".to_string();
            props.alt = "Hero banner".to_string();
        }
        element.style.shadow.enabled = true;

        let doc = ElementDocument::from_element(&element);
        assert_eq!(doc.src, doc.image_url);
        assert_eq!(doc.alt, doc.image_alt);
        assert_eq!(doc.box_shadow, "0 4px 10px 0 rgba(0,0,0,0.2)");
        assert_eq!(doc.background_gradient, "none");
        assert_eq!(doc.filter, "none");
    }

    #[test]
    fn test_round_trip_preserves_element() {
        let mut element = Element::image("Gallery shot");
        if let ElementKind::Image(props) = &mut element.kind {
            props.src = "/uploads/media/shot.png".to_string();
            props.filter.brightness = 120;
            props.overlay.enabled = true;
            props.overlay.text = "On sale".to_string();
            props.lightbox.enabled = true;
        }
        element.style.border.style = BorderStyle::Solid;
        element.style.gradient.enabled = true;

        let rebuilt = ElementDocument::from_element(&element).into_element();
        assert_eq!(rebuilt, element);
    }

    #[test]
    fn test_text_round_trip_preserves_inactive_groups() {
        let mut element = Element::text("Headline");
        if let ElementKind::Text(props) = &mut element.kind {
            props.text_type = TextType::Heading;
            props.heading.size = "3rem".to_string();
            props.paragraph.size = "1.25rem".to_string();
            props.list.items = vec!["One".to_string(), "Two".to_string()];
        }
        let doc = ElementDocument::from_element(&element);
        assert_eq!(doc.font_size, "3rem");
        assert_eq!(doc.paragraph_size, "1.25rem");

        let rebuilt = doc.into_element();
        assert_eq!(rebuilt, element);
    }

    #[test]
    fn test_tolerant_parse_of_sparse_document() {
        let json = r#"{"type":"image","label":"Old image","imageUrl":"/pic.png"}"#;
        let doc: ElementDocument = serde_json::from_str(json).expect("parse");
        let element = doc.into_element();
        let props = element.as_image().expect("image");
        assert_eq!(props.src, "/pic.png");
        assert!(!element.style.shadow.enabled);
    }

    #[test]
    fn test_font_size_wins_over_group_size() {
        let mut doc = ElementDocument::from_element(&Element::text("T"));
        doc.text_type = "paragraph".to_string();
        doc.font_size = "2rem".to_string();
        let element = doc.into_element();
        let props = element.as_text().expect("text");
        assert_eq!(props.paragraph.size, "2rem");
        assert_eq!(props.font_size(), "2rem");
    }

    #[test]
    fn test_composite_none_disables_group() {
        let mut doc = ElementDocument::from_element(&Element::image("I"));
        doc.box_shadow = "none".to_string();
        doc.box_shadow_blur = "30px".to_string();
        let element = doc.into_element();
        assert!(!element.style.shadow.enabled);
        assert_eq!(element.style.shadow.blur, "30px");
    }
}

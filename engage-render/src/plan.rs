//! Shared style plan.
//!
//! All style logic lives here, computed once per element: URL normalization,
//! filter and shadow assembly, overlay alignment, and the gating rules for
//! conditional markup. The three renderers are mechanical formatters over the
//! resulting [`ElementPlan`]; none of them re-derives a style value.
//!
//! Every declaration carries the resolved value (used by the preview and HTML
//! renderers) and, where the value must be recomputed at request time, a
//! deferred template expression (used by the template renderer). Gates work
//! the same way: `active` answers "emit now", `expr` answers "emit under this
//! condition when the template is evaluated".

use engage_core::css::format_image_url;
use engage_core::element::{Element, ElementKind, ImageProps, TextProps};
use engage_core::style::{Responsive, TextType, VisualStyle};

/// Condition controlling whether a node or declaration is emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gate {
    /// Resolved outcome for the element as it is now.
    pub active: bool,
    /// Template expression evaluating the same condition at request time.
    pub expr: String,
}

impl Gate {
    fn new(active: bool, expr: impl Into<String>) -> Self {
        Self {
            active,
            expr: expr.into(),
        }
    }
}

/// One style declaration, `camelCase` property plus resolved value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDecl {
    /// `camelCase` property name.
    pub property: String,
    /// Resolved value for the element as it is now.
    pub value: String,
    /// Template expression yielding the value at request time.
    pub expr: Option<String>,
    /// Optional emission condition.
    pub gate: Option<Gate>,
}

impl StyleDecl {
    fn fixed(property: &str, value: impl Into<String>) -> Self {
        Self {
            property: property.to_string(),
            value: value.into(),
            expr: None,
            gate: None,
        }
    }

    fn deferred(property: &str, value: impl Into<String>, expr: impl Into<String>) -> Self {
        Self {
            property: property.to_string(),
            value: value.into(),
            expr: Some(expr.into()),
            gate: None,
        }
    }

    fn gated(mut self, active: bool, expr: impl Into<String>) -> Self {
        self.gate = Some(Gate::new(active, expr));
        self
    }
}

/// One markup attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrDecl {
    /// Attribute name.
    pub name: String,
    /// Resolved value.
    pub value: String,
    /// Template expression yielding the value at request time.
    pub expr: Option<String>,
}

impl AttrDecl {
    fn fixed(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            expr: None,
        }
    }

    fn deferred(name: &str, value: impl Into<String>, expr: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            expr: Some(expr.into()),
        }
    }
}

/// Text content of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextContent {
    /// Resolved text.
    pub value: String,
    /// Template expression yielding the text at request time.
    pub expr: Option<String>,
}

/// Request-time iteration over list items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRepeat {
    /// Template expression yielding the item array.
    pub each_expr: String,
}

/// One node of the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanNode {
    /// HTML tag name; an empty tag is a fragment that renders only children.
    pub tag: String,
    /// Resolved class list.
    pub classes: Vec<String>,
    /// Template expression for the full class attribute, when it differs
    /// from the resolved list at request time.
    pub class_expr: Option<String>,
    /// Style declarations.
    pub styles: Vec<StyleDecl>,
    /// Markup attributes other than `class` and `style`.
    pub attrs: Vec<AttrDecl>,
    /// Text content, rendered before children.
    pub text: Option<TextContent>,
    /// Emission condition for the whole node.
    pub gate: Option<Gate>,
    /// When set, the template renderer iterates instead of emitting children.
    pub repeat: Option<ListRepeat>,
    /// Child nodes.
    pub children: Vec<PlanNode>,
}

impl PlanNode {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            class_expr: None,
            styles: Vec::new(),
            attrs: Vec::new(),
            text: None,
            gate: None,
            repeat: None,
            children: Vec::new(),
        }
    }

    /// Whether this node is emitted for the element as it is now.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.gate.as_ref().is_none_or(|gate| gate.active)
    }

    /// Declarations emitted for the element as it is now.
    pub fn active_styles(&self) -> impl Iterator<Item = &StyleDecl> {
        self.styles
            .iter()
            .filter(|decl| decl.gate.as_ref().is_none_or(|gate| gate.active))
    }

    /// Resolved value of one active declaration, by `camelCase` property name.
    #[must_use]
    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.active_styles()
            .find(|decl| decl.property == property)
            .map(|decl| decl.value.as_str())
    }
}

/// Hover rules applied to the element's unique class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverPlan {
    /// Selector suffix under the element class, e.g. `" img"`.
    pub target: String,
    /// `camelCase` declarations active while hovered.
    pub declarations: Vec<(String, String)>,
    /// Hover effect tag, for request-time dispatch.
    pub effect_tag: String,
}

/// Request-time lightbox wiring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxPlan {
    /// Normalized image URL.
    pub image_url: String,
    /// Caption shown below the enlarged image, empty for none.
    pub caption: String,
}

/// Everything the three renderers need for one element.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementPlan {
    /// Unique per-element class, e.g. `image-<id>`.
    pub class_name: String,
    /// Markup tree.
    pub root: PlanNode,
    /// Hover rules, when the element has an enabled hover effect.
    pub hover: Option<HoverPlan>,
    /// Responsive visibility and mobile overrides.
    pub responsive: Responsive,
    /// Lightbox wiring, when enabled.
    pub lightbox: Option<LightboxPlan>,
}

/// Compute the shared plan for one element.
#[must_use]
pub fn element_plan(element: &Element) -> ElementPlan {
    tracing::debug!(element_id = %element.id, kind = element.kind.as_tag(), "planning element");
    match &element.kind {
        ElementKind::Image(props) => image_plan(element, props),
        ElementKind::Text(props) => text_plan(element, props),
    }
}

fn responsive_classes(style: &VisualStyle) -> Vec<String> {
    let mut classes = Vec::new();
    if style.responsive.hide_on_mobile {
        classes.push("hide-on-mobile".to_string());
    }
    if style.responsive.hide_on_desktop {
        classes.push("hide-on-desktop".to_string());
    }
    classes
}

/// Declarations shared by every container: box geometry, border, background,
/// shadow. Border width/color/style only apply while a border style is set.
fn container_styles(style: &VisualStyle) -> Vec<StyleDecl> {
    let border_active = style.border.style != engage_core::style::BorderStyle::None;
    let border_gate = "element.borderStyle && element.borderStyle !== 'none'";
    vec![
        StyleDecl::deferred("width", style.width.clone(), "element.width || '100%'"),
        StyleDecl::deferred("height", style.height.clone(), "element.height || 'auto'"),
        StyleDecl::deferred(
            "margin",
            style.margin.clone(),
            "element.margin || '0 0 1rem 0'",
        ),
        StyleDecl::deferred("padding", style.padding.clone(), "element.padding || '0'"),
        StyleDecl::deferred(
            "borderStyle",
            style.border.style.as_css(),
            "element.borderStyle || 'solid'",
        )
        .gated(border_active, border_gate),
        StyleDecl::deferred(
            "borderWidth",
            style.border.width.clone(),
            "element.borderWidth || '1px'",
        )
        .gated(border_active, border_gate),
        StyleDecl::deferred(
            "borderColor",
            style.border.color.clone(),
            "element.borderColor || '#dee2e6'",
        )
        .gated(border_active, border_gate),
        StyleDecl::deferred(
            "borderRadius",
            style.border.radius.clone(),
            "element.borderRadius || '0'",
        ),
        StyleDecl::deferred(
            "backgroundColor",
            style.background_color.clone(),
            "element.backgroundColor || 'transparent'",
        ),
        StyleDecl::deferred(
            "backgroundImage",
            style.gradient.to_css(),
            "element.backgroundGradient",
        )
        .gated(
            style.gradient.enabled,
            "element.backgroundGradient && element.backgroundGradient !== 'none'",
        ),
        StyleDecl::deferred("boxShadow", style.shadow.to_css(), "element.boxShadow").gated(
            style.shadow.enabled,
            "element.boxShadow && element.boxShadow !== 'none'",
        ),
    ]
}

#[allow(clippy::too_many_lines)]
fn image_plan(element: &Element, props: &ImageProps) -> ElementPlan {
    let style = &element.style;
    let class_name = format!("image-{}", element.id);
    let image_url = format_image_url(&props.src);

    let mut container = PlanNode::new("div");
    container.classes.push("image-element-container".to_string());
    container.classes.push(class_name.clone());
    container.classes.extend(responsive_classes(style));
    container.class_expr = Some(
        "image-element-container <%= elementId %><%= responsiveClasses %>".to_string(),
    );
    container.styles.push(StyleDecl::fixed("position", "relative"));
    container.styles.extend(container_styles(style));
    container.styles.push(StyleDecl::fixed("display", "inline-block"));

    let mut img = PlanNode::new("img");
    img.classes.push("img-fluid".to_string());
    if props.lightbox.enabled {
        img.classes.push("lightbox-enabled".to_string());
    }
    img.class_expr = Some(
        "img-fluid <%= element.enableLightbox ? 'lightbox-enabled' : '' %>".to_string(),
    );
    img.attrs.push(AttrDecl::deferred("src", image_url.clone(), "imageUrl"));
    img.attrs.push(AttrDecl::deferred(
        "alt",
        element.alt_text(),
        "element.imageAlt || element.alt || element.label || 'Image'",
    ));
    img.styles.push(StyleDecl::fixed("width", "100%"));
    img.styles.push(StyleDecl::fixed("height", "100%"));
    img.styles.push(StyleDecl::deferred(
        "objectFit",
        props.object_fit.as_css(),
        "element.objectFit || 'contain'",
    ));
    img.styles.push(StyleDecl::deferred(
        "borderRadius",
        style.border.radius.clone(),
        "element.borderRadius || '0'",
    ));
    img.styles.push(
        StyleDecl::fixed("cursor", "pointer").gated(props.lightbox.enabled, "element.enableLightbox"),
    );
    let filter_css = props.filter.to_css();
    img.styles.push(
        StyleDecl::deferred("filter", filter_css.clone(), "filters.join(' ')")
            .gated(filter_css != "none", "filters.length > 0"),
    );
    img.styles.push(
        StyleDecl::deferred(
            "animation",
            style.animation.shorthand().unwrap_or_default(),
            "element.animation + ' ' + (element.animationDuration || '1s') + ' ' \
             + (element.animationEasing || 'ease') + ' ' + (element.animationDelay || '0s')",
        )
        .gated(
            style.animation.name.is_some(),
            "element.animation && element.animation !== 'none'",
        ),
    );

    let mut caption = PlanNode::new("div");
    caption.gate = Some(Gate::new(!props.caption.is_empty(), "element.caption"));
    caption.styles.push(StyleDecl::fixed("marginTop", "8px"));
    caption.styles.push(StyleDecl::fixed("textAlign", "center"));
    caption.styles.push(StyleDecl::fixed("fontSize", "0.9rem"));
    caption.styles.push(StyleDecl::fixed("color", "#6c757d"));
    caption.text = Some(TextContent {
        value: props.caption.clone(),
        expr: Some("element.caption".to_string()),
    });

    let (align_items, justify_content) = props.overlay.position.alignment();
    let mut overlay = PlanNode::new("div");
    overlay.gate = Some(Gate::new(props.overlay.enabled, "element.overlay"));
    overlay.styles.push(StyleDecl::fixed("position", "absolute"));
    overlay.styles.push(StyleDecl::fixed("top", "0"));
    overlay.styles.push(StyleDecl::fixed("left", "0"));
    overlay.styles.push(StyleDecl::fixed("width", "100%"));
    overlay.styles.push(StyleDecl::fixed("height", "100%"));
    overlay.styles.push(StyleDecl::fixed("display", "flex"));
    overlay.styles.push(StyleDecl::deferred(
        "alignItems",
        align_items.as_css(),
        "element.overlayPosition?.includes('top') ? 'flex-start' : \
         element.overlayPosition?.includes('bottom') ? 'flex-end' : 'center'",
    ));
    overlay.styles.push(StyleDecl::deferred(
        "justifyContent",
        justify_content.as_css(),
        "element.overlayPosition?.includes('left') ? 'flex-start' : \
         element.overlayPosition?.includes('right') ? 'flex-end' : 'center'",
    ));
    overlay.styles.push(StyleDecl::deferred(
        "backgroundColor",
        props.overlay.color.clone(),
        "element.overlayColor || 'rgba(0,0,0,0.5)'",
    ));
    overlay.styles.push(StyleDecl::deferred(
        "opacity",
        format!("{}", props.overlay.opacity),
        "element.overlayOpacity || 0.5",
    ));
    overlay.styles.push(StyleDecl::deferred(
        "borderRadius",
        style.border.radius.clone(),
        "element.borderRadius || '0'",
    ));

    let mut overlay_text = PlanNode::new("span");
    overlay_text.gate = Some(Gate::new(
        !props.overlay.text.is_empty(),
        "element.overlayText",
    ));
    overlay_text.styles.push(StyleDecl::deferred(
        "color",
        props.overlay.text_color.clone(),
        "element.overlayTextColor || '#ffffff'",
    ));
    overlay_text.styles.push(StyleDecl::deferred(
        "fontSize",
        props.overlay.text_size.clone(),
        "element.overlayTextSize || '1rem'",
    ));
    overlay_text.styles.push(StyleDecl::fixed("padding", "10px"));
    overlay_text.styles.push(StyleDecl::fixed("textAlign", "center"));
    overlay_text.text = Some(TextContent {
        value: props.overlay.text.clone(),
        expr: Some("element.overlayText".to_string()),
    });
    overlay.children.push(overlay_text);

    container.children.push(img);
    container.children.push(caption);
    container.children.push(overlay);

    let hover = props.hover.enabled.then(|| HoverPlan {
        target: " img".to_string(),
        declarations: props
            .hover
            .kind
            .declarations(&props.hover.transition)
            .into_iter()
            .map(|(property, value)| (property.to_string(), value))
            .collect(),
        effect_tag: props.hover.kind.as_tag().to_string(),
    });

    let lightbox = props.lightbox.enabled.then(|| LightboxPlan {
        image_url,
        caption: if props.lightbox.caption.is_empty() {
            props.caption.clone()
        } else {
            props.lightbox.caption.clone()
        },
    });

    ElementPlan {
        class_name,
        root: container,
        hover,
        responsive: style.responsive.clone(),
        lightbox,
    }
}

/// Typography declarations for one text branch, prefixed by the legacy field
/// namespace (`heading`, `paragraph`, `list`).
struct BranchTypography<'a> {
    prefix: &'a str,
    color: &'a str,
    size: &'a str,
    weight: &'a str,
    transform: &'a str,
    font_style: &'a str,
    decoration: &'a str,
    line_height: &'a str,
    letter_spacing: &'a str,
    shadow_css: String,
}

#[allow(clippy::too_many_lines)]
fn text_branch(
    element: &Element,
    props: &TextProps,
    typography: &BranchTypography<'_>,
) -> PlanNode {
    let style = &element.style;
    let prefix = typography.prefix;
    let mut branch = PlanNode::new("div");
    branch.classes.push("text-element-container".to_string());
    branch.classes.push(format!("text-{}", element.id));
    branch.classes.extend(responsive_classes(style));
    branch.class_expr = Some(
        "text-element-container <%= elementId %><%= responsiveClasses %>".to_string(),
    );
    branch.styles.push(StyleDecl::deferred(
        "color",
        typography.color,
        format!("element.{prefix}Color || '#212529'"),
    ));
    branch.styles.push(StyleDecl::deferred(
        "fontFamily",
        props.font_family.clone(),
        "element.fontFamily || 'inherit'",
    ));
    branch.styles.push(StyleDecl::deferred(
        "fontSize",
        typography.size,
        format!("element.{prefix}Size || element.fontSize"),
    ));
    branch.styles.push(StyleDecl::deferred(
        "fontWeight",
        typography.weight,
        format!("element.{prefix}Weight || 'normal'"),
    ));
    branch.styles.push(StyleDecl::deferred(
        "textTransform",
        typography.transform,
        format!("element.{prefix}Transform || 'none'"),
    ));
    branch.styles.push(StyleDecl::deferred(
        "fontStyle",
        typography.font_style,
        if prefix == "list" {
            "element.listStyle2 || 'normal'".to_string()
        } else {
            format!("element.{prefix}Style || 'normal'")
        },
    ));
    branch.styles.push(StyleDecl::deferred(
        "textDecoration",
        typography.decoration,
        format!("element.{prefix}Decoration || 'none'"),
    ));
    branch.styles.push(StyleDecl::deferred(
        "lineHeight",
        typography.line_height,
        format!("element.{prefix}LineHeight || '1.5'"),
    ));
    branch.styles.push(StyleDecl::deferred(
        "letterSpacing",
        typography.letter_spacing,
        format!("element.{prefix}LetterSpacing || 'normal'"),
    ));
    branch.styles.push(StyleDecl::deferred(
        "textShadow",
        typography.shadow_css.clone(),
        format!(
            "(element.{prefix}TextShadow && element.{prefix}TextShadow !== 'none') ? \
             `${{element.{prefix}TextShadowOffsetX || '1px'}} \
${{element.{prefix}TextShadowOffsetY || '1px'}} \
${{element.{prefix}TextShadowBlur || '2px'}} \
${{element.{prefix}TextShadowColor || 'rgba(0,0,0,0.3)'}}` : 'none'"
        ),
    ));
    branch.styles.extend(container_styles(style));
    branch.styles.push(StyleDecl::deferred(
        "overflow",
        props.overflow.clone(),
        "element.overflow || 'visible'",
    ));
    branch.styles.push(StyleDecl::deferred(
        "wordBreak",
        props.word_break.clone(),
        "element.wordBreak || 'normal'",
    ));
    branch.styles.push(StyleDecl::deferred(
        "wordWrap",
        props.word_wrap.clone(),
        "element.wordWrap || 'normal'",
    ));
    branch
}

#[allow(clippy::too_many_lines)]
fn text_plan(element: &Element, props: &TextProps) -> ElementPlan {
    let class_name = format!("text-{}", element.id);
    let text_type = props.text_type;

    // Heading branch.
    let mut heading_div = text_branch(
        element,
        props,
        &BranchTypography {
            prefix: "heading",
            color: &props.heading.color,
            size: &props.heading.size,
            weight: &props.heading.weight,
            transform: &props.heading.transform,
            font_style: &props.heading.font_style,
            decoration: &props.heading.decoration,
            line_height: &props.heading.line_height,
            letter_spacing: &props.heading.letter_spacing,
            shadow_css: props.heading.shadow.to_css(),
        },
    );
    heading_div.gate = Some(Gate::new(
        text_type == TextType::Heading,
        "element.textType === 'heading'",
    ));
    heading_div.styles.push(StyleDecl::deferred(
        "textAlign",
        props.heading.alignment.clone(),
        "element.headingAlignment || 'left'",
    ));
    let level = props.heading.level.clamp(1, 6);
    let mut heading = PlanNode::new(&format!("h{level}"));
    heading.text = Some(TextContent {
        value: if props.content.is_empty() {
            format!("Heading {level}")
        } else {
            props.content.clone()
        },
        expr: Some("element.content || `Heading ${headingLevel}`".to_string()),
    });
    heading_div.children.push(heading);

    // List branch.
    let mut list_div = text_branch(
        element,
        props,
        &BranchTypography {
            prefix: "list",
            color: &props.list.color,
            size: &props.list.size,
            weight: &props.list.weight,
            transform: &props.list.transform,
            font_style: &props.list.font_style,
            decoration: &props.list.decoration,
            line_height: &props.list.line_height,
            letter_spacing: &props.list.letter_spacing,
            shadow_css: props.list.shadow.to_css(),
        },
    );
    list_div.gate = Some(Gate::new(
        text_type == TextType::List,
        "element.textType === 'list'",
    ));
    list_div.styles.push(StyleDecl::deferred(
        "listStyleType",
        props.list.marker.clone(),
        "element.listStyle || (element.listType === 'ordered' ? 'decimal' : 'disc')",
    ));
    list_div
        .styles
        .push(StyleDecl::fixed("listStylePosition", "inside"));
    let ordered = props.list.list_type == engage_core::style::ListType::Ordered;
    let mut list = PlanNode::new(if ordered { "ol" } else { "ul" });
    list.repeat = Some(ListRepeat {
        each_expr: "element.listItems || ['Item 1', 'Item 2', 'Item 3']".to_string(),
    });
    for item in &props.list.items {
        let mut li = PlanNode::new("li");
        li.styles.push(StyleDecl::deferred(
            "marginBottom",
            props.list.spacing.clone(),
            "element.listSpacing || '0.5rem'",
        ));
        li.text = Some(TextContent {
            value: item.clone(),
            expr: Some("item".to_string()),
        });
        list.children.push(li);
    }
    list_div.children.push(list);

    // Paragraph branch doubles as the fallback for unknown type tags.
    let mut paragraph_div = text_branch(
        element,
        props,
        &BranchTypography {
            prefix: "paragraph",
            color: &props.paragraph.color,
            size: &props.paragraph.size,
            weight: &props.paragraph.weight,
            transform: &props.paragraph.transform,
            font_style: &props.paragraph.font_style,
            decoration: &props.paragraph.decoration,
            line_height: &props.paragraph.line_height,
            letter_spacing: &props.paragraph.letter_spacing,
            shadow_css: props.paragraph.shadow.to_css(),
        },
    );
    paragraph_div.gate = Some(Gate::new(
        text_type == TextType::Paragraph,
        "element.textType !== 'heading' && element.textType !== 'list'",
    ));
    paragraph_div.styles.push(StyleDecl::deferred(
        "textAlign",
        props.paragraph.alignment.clone(),
        "element.paragraphAlignment || 'left'",
    ));
    paragraph_div.styles.push(StyleDecl::deferred(
        "textIndent",
        props.paragraph.indent.clone(),
        "element.paragraphIndent || '0'",
    ));
    let mut paragraph = PlanNode::new("p");
    paragraph.text = Some(TextContent {
        value: if props.content.is_empty() {
            "Paragraph text content goes here.".to_string()
        } else {
            props.content.clone()
        },
        expr: Some("element.content || 'Paragraph text content goes here.'".to_string()),
    });
    paragraph_div.children.push(paragraph);

    let mut root = PlanNode::new("");
    root.children.push(heading_div);
    root.children.push(list_div);
    root.children.push(paragraph_div);

    ElementPlan {
        class_name,
        root,
        hover: None,
        responsive: element.style.responsive.clone(),
        lightbox: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engage_core::css::PLACEHOLDER_IMAGE_URL;
    use engage_core::HoverKind;

    #[test]
    fn test_image_plan_falls_back_to_placeholder() {
        let element = Element::image("Empty");
        let plan = element_plan(&element);
        let img = &plan.root.children[0];
        let src = img.attrs.iter().find(|a| a.name == "src").expect("src");
        assert_eq!(src.value, PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn test_inactive_groups_are_gated_off() {
        let element = Element::image("Plain");
        let plan = element_plan(&element);
        assert!(plan.root.style_value("boxShadow").is_none());
        assert!(plan.root.style_value("backgroundImage").is_none());
        assert!(plan.hover.is_none());
        assert!(plan.lightbox.is_none());
        // overlay and caption nodes gated off
        assert!(!plan.root.children[1].is_active());
        assert!(!plan.root.children[2].is_active());
    }

    #[test]
    fn test_enabled_shadow_resolves_in_plan() {
        let mut element = Element::image("Shadowed");
        element.style.shadow.enabled = true;
        let plan = element_plan(&element);
        assert_eq!(
            plan.root.style_value("boxShadow"),
            Some("0 4px 10px 0 rgba(0,0,0,0.2)")
        );
    }

    #[test]
    fn test_text_plan_activates_exactly_one_branch() {
        let element = Element::text("Body");
        let plan = element_plan(&element);
        let active: Vec<bool> = plan.root.children.iter().map(PlanNode::is_active).collect();
        assert_eq!(active, vec![false, false, true]);
    }

    #[test]
    fn test_heading_branch_resolves_level_and_size() {
        let mut element = Element::text("Title");
        if let ElementKind::Text(props) = &mut element.kind {
            props.text_type = TextType::Heading;
            props.heading.level = 3;
            props.content = "Quarterly results".to_string();
        }
        let plan = element_plan(&element);
        let heading_div = &plan.root.children[0];
        assert!(heading_div.is_active());
        assert_eq!(heading_div.style_value("fontSize"), Some("1.75rem"));
        let heading = &heading_div.children[0];
        assert_eq!(heading.tag, "h3");
        assert_eq!(
            heading.text.as_ref().map(|t| t.value.as_str()),
            Some("Quarterly results")
        );
    }

    #[test]
    fn test_hover_plan_carries_effect_declarations() {
        let mut element = Element::image("Hero");
        if let ElementKind::Image(props) = &mut element.kind {
            props.hover.enabled = true;
            props.hover.kind = HoverKind::Zoom;
        }
        let plan = element_plan(&element);
        let hover = plan.hover.expect("hover");
        assert_eq!(hover.effect_tag, "zoom");
        assert_eq!(hover.target, " img");
        assert_eq!(
            hover.declarations,
            vec![
                ("transform".to_string(), "scale(1.1)".to_string()),
                ("transition".to_string(), "transform 0.3s ease".to_string()),
            ]
        );
    }

    #[test]
    fn test_opacity_resolves_inside_the_filter_only() {
        let mut element = Element::image("Faded");
        if let ElementKind::Image(props) = &mut element.kind {
            props.filter.opacity = 0.5;
        }
        let plan = element_plan(&element);
        let img = &plan.root.children[0];
        assert_eq!(img.style_value("filter"), Some("opacity(0.5)"));
        assert_eq!(img.style_value("opacity"), None);
    }

    #[test]
    fn test_lightbox_caption_falls_back_to_image_caption() {
        let mut element = Element::image("Shot");
        if let ElementKind::Image(props) = &mut element.kind {
            props.lightbox.enabled = true;
            props.caption = "A caption".to_string();
        }
        let plan = element_plan(&element);
        let lightbox = plan.lightbox.expect("lightbox");
        assert_eq!(lightbox.caption, "A caption");
    }
}

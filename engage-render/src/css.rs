//! CSS text formatting shared by the HTML and template renderers.

use crate::plan::{ElementPlan, PlanNode};

/// Mobile breakpoint used by visibility classes and overrides.
pub const MOBILE_BREAKPOINT_PX: u16 = 768;

/// Convert a `camelCase` property name to its kebab-case CSS form.
///
/// The conversion is mechanical: every uppercase letter becomes a hyphen
/// followed by its lowercase form.
#[must_use]
pub fn to_kebab_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for ch in property.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Format a node's active declarations as an inline `style` attribute value.
#[must_use]
pub fn inline_style(node: &PlanNode) -> String {
    node.active_styles()
        .map(|decl| format!("{}: {};", to_kebab_case(&decl.property), decl.value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Hover rule block for the element's unique class, or an empty string.
#[must_use]
pub fn hover_css(plan: &ElementPlan) -> String {
    let Some(hover) = &plan.hover else {
        return String::new();
    };
    let declarations = hover
        .declarations
        .iter()
        .map(|(property, value)| format!("  {}: {};", to_kebab_case(property), value))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        ".{}:hover{} {{\n{}\n}}",
        plan.class_name, hover.target, declarations
    )
}

/// Responsive rule blocks: visibility classes plus mobile size overrides.
#[must_use]
pub fn responsive_css(plan: &ElementPlan) -> String {
    let mut blocks = Vec::new();
    if plan.responsive.hide_on_mobile {
        blocks.push(format!(
            "@media (max-width: {MOBILE_BREAKPOINT_PX}px) {{ .hide-on-mobile {{ display: none !important; }} }}"
        ));
    }
    if plan.responsive.hide_on_desktop {
        blocks.push(format!(
            "@media (min-width: {}px) {{ .hide-on-desktop {{ display: none !important; }} }}",
            MOBILE_BREAKPOINT_PX + 1
        ));
    }
    let mut overrides = Vec::new();
    if let Some(width) = &plan.responsive.mobile_width {
        overrides.push(format!("width: {width};"));
    }
    if let Some(height) = &plan.responsive.mobile_height {
        overrides.push(format!("height: {height};"));
    }
    if !overrides.is_empty() {
        blocks.push(format!(
            "@media (max-width: {MOBILE_BREAKPOINT_PX}px) {{ .{} {{ {} }} }}",
            plan.class_name,
            overrides.join(" ")
        ));
    }
    blocks.join("\n")
}

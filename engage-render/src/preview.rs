//! Live preview renderer.
//!
//! Produces an in-process node tree with `camelCase` style pairs, the shape the
//! editor preview and in-app page rendering consume directly. Gated-off nodes
//! and declarations are pruned; nothing here is deferred.

use serde::Serialize;

use crate::plan::{element_plan, PlanNode};
use engage_core::Element;

/// One node of the preview tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewNode {
    /// HTML tag name; empty for a fragment.
    pub tag: String,
    /// Class list.
    pub classes: Vec<String>,
    /// `camelCase` style pairs, in declaration order.
    pub style: Vec<(String, String)>,
    /// Attributes other than `class` and `style`.
    pub attrs: Vec<(String, String)>,
    /// Text content, rendered before children.
    pub text: Option<String>,
    /// Child nodes.
    pub children: Vec<PreviewNode>,
}

impl PreviewNode {
    /// Style value by `camelCase` property name.
    #[must_use]
    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }
}

/// Render the live preview tree for one element.
#[must_use]
pub fn render_preview(element: &Element) -> PreviewNode {
    let plan = element_plan(element);
    lower(&plan.root)
}

fn lower(node: &PlanNode) -> PreviewNode {
    PreviewNode {
        tag: node.tag.clone(),
        classes: node.classes.clone(),
        style: node
            .active_styles()
            .map(|decl| (decl.property.clone(), decl.value.clone()))
            .collect(),
        attrs: node
            .attrs
            .iter()
            .map(|attr| (attr.name.clone(), attr.value.clone()))
            .collect(),
        text: node.text.as_ref().map(|text| text.value.clone()),
        children: node
            .children
            .iter()
            .filter(|child| child.is_active())
            .map(lower)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engage_core::{Element, ElementKind, TextType};

    #[test]
    fn test_preview_prunes_inactive_nodes() {
        let element = Element::image("Plain");
        let preview = render_preview(&element);
        assert_eq!(preview.tag, "div");
        // img survives, caption and overlay are pruned
        assert_eq!(preview.children.len(), 1);
        assert_eq!(preview.children[0].tag, "img");
    }

    #[test]
    fn test_preview_styles_are_camel_case() {
        let mut element = Element::image("Shadowed");
        element.style.shadow.enabled = true;
        let preview = render_preview(&element);
        assert_eq!(
            preview.style_value("boxShadow"),
            Some("0 4px 10px 0 rgba(0,0,0,0.2)")
        );
        assert_eq!(preview.style_value("backgroundColor"), Some("transparent"));
    }

    #[test]
    fn test_text_preview_is_single_active_branch() {
        let mut element = Element::text("List");
        if let ElementKind::Text(props) = &mut element.kind {
            props.text_type = TextType::List;
        }
        let preview = render_preview(&element);
        assert_eq!(preview.tag, "");
        assert_eq!(preview.children.len(), 1);
        let list_div = &preview.children[0];
        assert_eq!(list_div.style_value("listStylePosition"), Some("inside"));
        assert_eq!(list_div.children[0].tag, "ul");
        assert_eq!(list_div.children[0].children.len(), 3);
    }
}

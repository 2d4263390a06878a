//! Static HTML renderer.
//!
//! Emits a portable, self-contained HTML fragment: inline kebab-case styles,
//! a `<style>` block for hover and responsive rules (which inline styles
//! cannot express), and the lightbox `<script>` when enabled.

use std::fmt::Write as _;

use crate::css::{hover_css, inline_style, responsive_css};
use crate::plan::{element_plan, ElementPlan, PlanNode};
use engage_core::Element;

/// Render one element as a portable HTML fragment.
#[must_use]
pub fn render_html(element: &Element) -> String {
    let plan = element_plan(element);
    let mut out = String::new();

    let mut css = Vec::new();
    let hover = hover_css(&plan);
    if !hover.is_empty() {
        css.push(hover);
    }
    let responsive = responsive_css(&plan);
    if !responsive.is_empty() {
        css.push(responsive);
    }
    if !css.is_empty() {
        let _ = writeln!(out, "<style>\n{}\n</style>", css.join("\n"));
    }

    write_node(&mut out, &plan.root);

    if let Some(script) = lightbox_script(&plan) {
        out.push('\n');
        out.push_str(&script);
    }
    out.trim().to_string()
}

fn write_node(out: &mut String, node: &PlanNode) {
    if !node.is_active() {
        return;
    }
    if node.tag.is_empty() {
        for child in &node.children {
            write_node(out, child);
        }
        return;
    }

    let _ = write!(out, "<{}", node.tag);
    if !node.classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", node.classes.join(" "));
    }
    for attr in &node.attrs {
        let _ = write!(out, " {}=\"{}\"", attr.name, attr.value);
    }
    let style = inline_style(node);
    if !style.is_empty() {
        let _ = write!(out, " style=\"{style}\"");
    }
    out.push('>');

    if node.tag == "img" {
        return;
    }
    if let Some(text) = &node.text {
        out.push_str(&text.value);
    }
    for child in &node.children {
        write_node(out, child);
    }
    let _ = write!(out, "</{}>", node.tag);
}

/// Click-to-enlarge script wiring the element's image to a fullscreen
/// overlay, mirroring what the server-side template emits.
fn lightbox_script(plan: &ElementPlan) -> Option<String> {
    let lightbox = plan.lightbox.as_ref()?;
    let caption = if lightbox.caption.is_empty() {
        String::new()
    } else {
        format!(
            "      const caption = document.createElement('div');\n\
             \x20     caption.textContent = '{}';\n\
             \x20     caption.style.position = 'absolute';\n\
             \x20     caption.style.bottom = '20px';\n\
             \x20     caption.style.left = '0';\n\
             \x20     caption.style.width = '100%';\n\
             \x20     caption.style.textAlign = 'center';\n\
             \x20     caption.style.color = 'white';\n\
             \x20     caption.style.padding = '10px';\n\
             \x20     caption.style.backgroundColor = 'rgba(0,0,0,0.5)';\n\
             \x20     lightbox.appendChild(caption);\n",
            lightbox.caption
        )
    };
    Some(format!(
        "<script>\n\
         \x20 document.querySelector('.{class} img').addEventListener('click', function() {{\n\
         \x20     const lightbox = document.createElement('div');\n\
         \x20     lightbox.className = 'lightbox-overlay';\n\
         \x20     lightbox.style.position = 'fixed';\n\
         \x20     lightbox.style.top = '0';\n\
         \x20     lightbox.style.left = '0';\n\
         \x20     lightbox.style.width = '100%';\n\
         \x20     lightbox.style.height = '100%';\n\
         \x20     lightbox.style.backgroundColor = 'rgba(0,0,0,0.9)';\n\
         \x20     lightbox.style.display = 'flex';\n\
         \x20     lightbox.style.alignItems = 'center';\n\
         \x20     lightbox.style.justifyContent = 'center';\n\
         \x20     lightbox.style.zIndex = '9999';\n\
         \x20     const img = document.createElement('img');\n\
         \x20     img.src = '{url}';\n\
         \x20     img.style.maxWidth = '90%';\n\
         \x20     img.style.maxHeight = '90%';\n\
         \x20     img.style.objectFit = 'contain';\n\
         {caption}\
         \x20     lightbox.onclick = function() {{ document.body.removeChild(lightbox); }};\n\
         \x20     lightbox.appendChild(img);\n\
         \x20     document.body.appendChild(lightbox);\n\
         \x20 }});\n\
         </script>",
        class = plan.class_name,
        url = lightbox.image_url,
        caption = caption
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use engage_core::css::PLACEHOLDER_IMAGE_URL;
    use engage_core::{Element, ElementKind, TextType};

    #[test]
    fn test_plain_image_html() {
        let element = Element::image("Hero");
        let html = render_html(&element);
        assert!(html.starts_with("<div class=\"image-element-container image-"));
        assert!(html.contains(&format!("<img class=\"img-fluid\" src=\"{PLACEHOLDER_IMAGE_URL}\"")));
        assert!(html.contains("object-fit: contain;"));
        // gated-off groups leave no trace
        assert!(!html.contains("box-shadow"));
        assert!(!html.contains("filter:"));
        assert!(!html.contains("<style>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_styles_are_kebab_case() {
        let mut element = Element::image("Hero");
        element.style.shadow.enabled = true;
        if let ElementKind::Image(props) = &mut element.kind {
            props.filter.brightness = 120;
        }
        let html = render_html(&element);
        assert!(html.contains("box-shadow: 0 4px 10px 0 rgba(0,0,0,0.2);"));
        assert!(html.contains("filter: brightness(120%);"));
        assert!(html.contains("background-color: transparent;"));
    }

    #[test]
    fn test_hover_and_lightbox_blocks() {
        let mut element = Element::image("Hero");
        if let ElementKind::Image(props) = &mut element.kind {
            props.hover.enabled = true;
            props.lightbox.enabled = true;
            props.src = "/uploads/media/hero.png".to_string();
        }
        let html = render_html(&element);
        assert!(html.contains("<style>"));
        assert!(html.contains("filter: brightness(1.2);"));
        assert!(html.contains("lightbox-enabled"));
        assert!(html.contains("cursor: pointer;"));
        assert!(html.contains("img.src = '/uploads/media/hero.png';"));
    }

    #[test]
    fn test_heading_html_uses_level_tag() {
        let mut element = Element::text("Title");
        if let ElementKind::Text(props) = &mut element.kind {
            props.text_type = TextType::Heading;
            props.heading.level = 4;
            props.content = "Results".to_string();
        }
        let html = render_html(&element);
        assert!(html.contains("<h4>Results</h4>"));
        assert!(!html.contains("<p>"));
        assert!(!html.contains("<ul>"));
    }

    #[test]
    fn test_list_html_emits_items() {
        let mut element = Element::text("Steps");
        if let ElementKind::Text(props) = &mut element.kind {
            props.text_type = TextType::List;
            props.list.list_type = engage_core::style::ListType::Ordered;
            props.list.marker = "decimal".to_string();
            props.list.items = vec!["First".to_string(), "Second".to_string()];
        }
        let html = render_html(&element);
        assert!(html.contains("<ol>"));
        assert!(html.contains("<li style=\"margin-bottom: 0.5rem;\">First</li>"));
        assert!(html.contains("list-style-type: decimal;"));
    }
}

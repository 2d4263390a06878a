//! Template-source renderer.
//!
//! Emits EJS source text, not evaluated output: a separate server-side pass
//! evaluates it against a live `element` object at request time. Deferred
//! expressions come straight from the plan, so an evaluation of this source
//! against the same element yields the declarations the HTML renderer
//! resolves in-process.

use std::fmt::Write as _;

use crate::css::{to_kebab_case, MOBILE_BREAKPOINT_PX};
use crate::plan::{element_plan, PlanNode, StyleDecl};
use engage_core::{Element, ElementKind, HoverKind};

/// Render one element as EJS template source.
#[must_use]
pub fn render_template(element: &Element) -> String {
    let plan = element_plan(element);
    let is_image = matches!(element.kind, ElementKind::Image(_));
    let mut out = String::new();

    out.push_str(prologue(is_image));
    if is_image {
        out.push_str(&hover_block());
    }
    out.push_str(&responsive_block());
    write_node(&mut out, &plan.root);
    if is_image {
        out.push_str(LIGHTBOX_BLOCK);
    }
    out.trim().to_string()
}

/// Request-time setup: URL normalization and responsive classes recomputed
/// against the live element, mirroring the plan's resolved logic.
fn prologue(is_image: bool) -> &'static str {
    if is_image {
        "<%\n\
         \x20 let imageUrl = element.imageUrl || element.src || 'https://via.placeholder.com/800x400';\n\
         \x20 if (imageUrl && !imageUrl.startsWith('http') && !imageUrl.startsWith('/')) {\n\
         \x20   imageUrl = '/' + imageUrl;\n\
         \x20 }\n\
         \x20 if (imageUrl && imageUrl.includes('/uploads/media/')) {\n\
         \x20   imageUrl = '/' + imageUrl.replace(/^\\/+/, '');\n\
         \x20 }\n\
         \x20 const elementId = `image-${element.id}`;\n\
         \x20 let responsiveClasses = '';\n\
         \x20 if (element.hideOnMobile) { responsiveClasses += ' hide-on-mobile'; }\n\
         \x20 if (element.hideOnDesktop) { responsiveClasses += ' hide-on-desktop'; }\n\
         \x20 const filters = [];\n\
         \x20 if (element.brightness !== undefined && element.brightness !== 100) { filters.push(`brightness(${element.brightness}%)`); }\n\
         \x20 if (element.contrast !== undefined && element.contrast !== 100) { filters.push(`contrast(${element.contrast}%)`); }\n\
         \x20 if (element.saturation !== undefined && element.saturation !== 100) { filters.push(`saturate(${element.saturation}%)`); }\n\
         \x20 if (element.hueRotate !== undefined && element.hueRotate !== 0) { filters.push(`hue-rotate(${element.hueRotate}deg)`); }\n\
         \x20 if (element.blur !== undefined && element.blur !== '0px' && element.blur !== '') { filters.push(`blur(${element.blur})`); }\n\
         \x20 if (element.grayscale !== undefined && element.grayscale !== 0) { filters.push(`grayscale(${element.grayscale}%)`); }\n\
         \x20 if (element.sepia !== undefined && element.sepia !== 0) { filters.push(`sepia(${element.sepia}%)`); }\n\
         \x20 if (element.opacity !== undefined && element.opacity !== 1) { filters.push(`opacity(${element.opacity})`); }\n\
         %>\n"
    } else {
        "<%\n\
         \x20 const elementId = `text-${element.id}`;\n\
         \x20 let responsiveClasses = '';\n\
         \x20 if (element.hideOnMobile) { responsiveClasses += ' hide-on-mobile'; }\n\
         \x20 if (element.hideOnDesktop) { responsiveClasses += ' hide-on-desktop'; }\n\
         %>\n"
    }
}

/// Hover rules for every effect tag, dispatched at request time.
fn hover_block() -> String {
    let kinds = [
        HoverKind::Zoom,
        HoverKind::Brighten,
        HoverKind::Darken,
        HoverKind::Blur,
        HoverKind::Grayscale,
        HoverKind::Sepia,
        HoverKind::Shadow,
    ];
    let mut out = String::from("<% if (element.hoverEffect) { %>\n<style>\n");
    for (index, kind) in kinds.iter().enumerate() {
        let keyword = if index == 0 { "if" } else { "} else if" };
        let _ = writeln!(
            out,
            "  <% {keyword} (element.hoverEffectType === '{}') {{ %>",
            kind.as_tag()
        );
        out.push_str("  .<%= elementId %>:hover img {\n");
        for (property, value) in kind.declarations("0.3s") {
            let _ = writeln!(out, "    {}: {};", to_kebab_case(&property), value);
        }
        out.push_str("  }\n");
    }
    out.push_str("  <% } %>\n</style>\n<% } %>\n");
    out
}

/// Visibility classes and mobile overrides, gated at request time.
fn responsive_block() -> String {
    format!(
        "<% if (element.hideOnMobile || element.hideOnDesktop || element.mobileWidth || element.mobileHeight) {{ %>\n\
         <style>\n\
         <% if (element.hideOnMobile) {{ %>\n\
         @media (max-width: {MOBILE_BREAKPOINT_PX}px) {{ .hide-on-mobile {{ display: none !important; }} }}\n\
         <% }} %>\n\
         <% if (element.hideOnDesktop) {{ %>\n\
         @media (min-width: {}px) {{ .hide-on-desktop {{ display: none !important; }} }}\n\
         <% }} %>\n\
         <% if (element.mobileWidth || element.mobileHeight) {{ %>\n\
         @media (max-width: {MOBILE_BREAKPOINT_PX}px) {{ .<%= elementId %> {{\n\
         <% if (element.mobileWidth) {{ %>  width: <%= element.mobileWidth %>;\n<% }} %>\
         <% if (element.mobileHeight) {{ %>  height: <%= element.mobileHeight %>;\n<% }} %>\
         }} }}\n\
         <% }} %>\n\
         </style>\n\
         <% }} %>\n",
        MOBILE_BREAKPOINT_PX + 1
    )
}

fn style_decl(out: &mut String, decl: &StyleDecl) {
    let property = to_kebab_case(&decl.property);
    let value = decl.expr.as_ref().map_or_else(
        || decl.value.clone(),
        |expr| format!("<%= {expr} %>"),
    );
    match &decl.gate {
        Some(gate) => {
            let _ = write!(out, "<% if ({}) {{ %>{property}: {value};<% }} %> ", gate.expr);
        }
        None => {
            let _ = write!(out, "{property}: {value}; ");
        }
    }
}

fn is_heading_tag(tag: &str) -> bool {
    tag.len() == 2 && tag.starts_with('h') && tag.as_bytes()[1].is_ascii_digit()
}

#[allow(clippy::too_many_lines)]
fn write_node(out: &mut String, node: &PlanNode) {
    if let Some(gate) = &node.gate {
        let _ = writeln!(out, "<% if ({}) {{ %>", gate.expr);
    }

    if node.tag.is_empty() {
        for child in &node.children {
            write_node(out, child);
        }
    } else if is_heading_tag(&node.tag) {
        // The tag itself depends on a request-time field, so dispatch over
        // the level the way the style attribute dispatches over gates.
        out.push_str("<% const headingLevel = element.headingLevel || 2; %>\n");
        for level in 1..=6u8 {
            let keyword = if level == 1 { "if" } else { "} else if" };
            let _ = writeln!(out, "<% {keyword} (headingLevel == {level}) {{ %>");
            let _ = writeln!(
                out,
                "<h{level}><%= element.content || `Heading ${{headingLevel}}` %></h{level}>"
            );
        }
        out.push_str("<% } %>\n");
    } else {
        let _ = write!(out, "<{}", node.tag);
        match &node.class_expr {
            Some(expr) => {
                let _ = write!(out, " class=\"{expr}\"");
            }
            None if !node.classes.is_empty() => {
                let _ = write!(out, " class=\"{}\"", node.classes.join(" "));
            }
            None => {}
        }
        for attr in &node.attrs {
            match &attr.expr {
                Some(expr) => {
                    let _ = write!(out, " {}=\"<%= {expr} %>\"", attr.name);
                }
                None => {
                    let _ = write!(out, " {}=\"{}\"", attr.name, attr.value);
                }
            }
        }
        if !node.styles.is_empty() {
            out.push_str(" style=\"");
            for decl in &node.styles {
                style_decl(out, decl);
            }
            let trimmed = out.trim_end().len();
            out.truncate(trimmed);
            out.push('"');
        }
        out.push('>');
        out.push('\n');

        if node.tag != "img" {
            if let Some(repeat) = &node.repeat {
                let _ = writeln!(out, "<% ({}).forEach(item => {{ %>", repeat.each_expr);
                out.push_str("  <li style=\"margin-bottom: <%= element.listSpacing || '0.5rem' %>;\"><%= item %></li>\n");
                out.push_str("<% }); %>\n");
            } else {
                if let Some(text) = &node.text {
                    match &text.expr {
                        Some(expr) => {
                            let _ = writeln!(out, "<%= {expr} %>");
                        }
                        None => {
                            out.push_str(&text.value);
                            out.push('\n');
                        }
                    }
                }
                for child in &node.children {
                    write_node(out, child);
                }
            }
            let _ = writeln!(out, "</{}>", node.tag);
        }
    }

    if node.gate.is_some() {
        out.push_str("<% } %>\n");
    }
}

/// Lightbox wiring evaluated at request time.
const LIGHTBOX_BLOCK: &str = "\
<% if (element.enableLightbox) { %>\n\
<script>\n\
  document.addEventListener('DOMContentLoaded', function() {\n\
    document.querySelector('.<%= elementId %> img').addEventListener('click', function() {\n\
      const lightbox = document.createElement('div');\n\
      lightbox.className = 'lightbox-overlay';\n\
      lightbox.style.position = 'fixed';\n\
      lightbox.style.top = '0';\n\
      lightbox.style.left = '0';\n\
      lightbox.style.width = '100%';\n\
      lightbox.style.height = '100%';\n\
      lightbox.style.backgroundColor = 'rgba(0,0,0,0.9)';\n\
      lightbox.style.display = 'flex';\n\
      lightbox.style.alignItems = 'center';\n\
      lightbox.style.justifyContent = 'center';\n\
      lightbox.style.zIndex = '9999';\n\
      const img = document.createElement('img');\n\
      img.src = '<%= imageUrl %>';\n\
      img.style.maxWidth = '90%';\n\
      img.style.maxHeight = '90%';\n\
      img.style.objectFit = 'contain';\n\
      <% if (element.lightboxCaption || element.caption) { %>\n\
      const caption = document.createElement('div');\n\
      caption.textContent = '<%= element.lightboxCaption || element.caption %>';\n\
      caption.style.position = 'absolute';\n\
      caption.style.bottom = '20px';\n\
      caption.style.left = '0';\n\
      caption.style.width = '100%';\n\
      caption.style.textAlign = 'center';\n\
      caption.style.color = 'white';\n\
      caption.style.padding = '10px';\n\
      caption.style.backgroundColor = 'rgba(0,0,0,0.5)';\n\
      lightbox.appendChild(caption);\n\
      <% } %>\n\
      lightbox.onclick = function() { document.body.removeChild(lightbox); };\n\
      lightbox.appendChild(img);\n\
      document.body.appendChild(lightbox);\n\
    });\n\
  });\n\
</script>\n\
<% } %>\n";

#[cfg(test)]
mod tests {
    use super::*;
    use engage_core::{Element, TextType};

    #[test]
    fn test_image_template_has_prologue_and_gates() {
        let element = Element::image("Hero");
        let source = render_template(&element);
        assert!(source.starts_with("<%"));
        assert!(source.contains("let imageUrl = element.imageUrl || element.src"));
        assert!(source.contains("const filters = [];"));
        assert!(source.contains(
            "if (element.blur !== undefined && element.blur !== '0px' && element.blur !== '')"
        ));
        assert!(source.contains("filters.push(`opacity(${element.opacity})`)"));
        assert!(source.contains("<% if (element.overlay) { %>"));
        assert!(source.contains("<% if (element.caption) { %>"));
        assert!(source.contains("src=\"<%= imageUrl %>\""));
        assert!(source.contains(
            "<% if (element.boxShadow && element.boxShadow !== 'none') { %>box-shadow: <%= element.boxShadow %>;<% } %>"
        ));
    }

    #[test]
    fn test_image_template_hover_dispatch_covers_all_effects() {
        let element = Element::image("Hero");
        let source = render_template(&element);
        for tag in ["zoom", "brighten", "darken", "blur", "grayscale", "sepia", "shadow"] {
            assert!(
                source.contains(&format!("element.hoverEffectType === '{tag}'")),
                "missing hover branch for {tag}"
            );
        }
        assert!(source.contains("transform: scale(1.1);"));
        assert!(source.contains("box-shadow: 0 5px 15px rgba(0,0,0,0.3);"));
    }

    #[test]
    fn test_text_template_branches_on_text_type() {
        let element = Element::text("Body");
        let source = render_template(&element);
        assert!(source.contains("<% if (element.textType === 'heading') { %>"));
        assert!(source.contains("<% if (element.textType === 'list') { %>"));
        assert!(source.contains(
            "<% if (element.textType !== 'heading' && element.textType !== 'list') { %>"
        ));
        assert!(source.contains("forEach(item => {"));
        assert!(source.contains("<% if (headingLevel == 1) { %>"));
        assert!(source.contains("<h6><%= element.content || `Heading ${headingLevel}` %></h6>"));
    }

    #[test]
    fn test_template_is_source_not_output() {
        let mut element = Element::text("Title");
        if let engage_core::ElementKind::Text(props) = &mut element.kind {
            props.text_type = TextType::Heading;
            props.content = "Resolved title".to_string();
        }
        let source = render_template(&element);
        // deferred: the template never bakes in resolved content
        assert!(!source.contains("Resolved title"));
        assert!(source.contains("<%= element.content"));
    }

    #[test]
    fn test_lightbox_block_is_gated() {
        let element = Element::image("Hero");
        let source = render_template(&element);
        assert!(source.contains("<% if (element.enableLightbox) { %>"));
        assert!(source.contains("img.src = '<%= imageUrl %>';"));
    }
}

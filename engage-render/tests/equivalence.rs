//! Cross-renderer equivalence.
//!
//! For one fixed element, the HTML renderer's inline declarations, the
//! preview tree's `camelCase` pairs, and the plan's resolved values (what the
//! template yields when evaluated against the same element) must agree on
//! filter, box-shadow, border, and overlay styling.

use pretty_assertions::assert_eq;

use engage_core::style::{BorderStyle, OverlayPosition};
use engage_core::{Element, ElementKind};
use engage_render::css::to_kebab_case;
use engage_render::{element_plan, render_html, render_preview, render_template};

fn styled_image() -> Element {
    let mut element = Element::image("Equivalence fixture");
    element.style.border.style = BorderStyle::Solid;
    element.style.border.width = "2px".to_string();
    element.style.border.color = "#333333".to_string();
    element.style.shadow.enabled = true;
    element.style.shadow.blur = "12px".to_string();
    if let ElementKind::Image(props) = &mut element.kind {
        props.src = "/uploads/media/fixture.png".to_string();
        props.filter.brightness = 110;
        props.filter.sepia = 25;
        props.filter.opacity = 0.5;
        props.overlay.enabled = true;
        props.overlay.text = "Overlaid".to_string();
        props.overlay.position = OverlayPosition::BottomRight;
    }
    element
}

#[test]
fn html_matches_plan_for_container_styles() {
    let element = styled_image();
    let plan = element_plan(&element);
    let html = render_html(&element);

    for property in ["boxShadow", "borderStyle", "borderWidth", "borderColor"] {
        let value = plan
            .root
            .style_value(property)
            .unwrap_or_else(|| panic!("plan resolves {property}"));
        let declaration = format!("{}: {};", to_kebab_case(property), value);
        assert!(
            html.contains(&declaration),
            "HTML is missing `{declaration}`"
        );
    }
}

#[test]
fn html_matches_plan_for_filter() {
    let element = styled_image();
    let plan = element_plan(&element);
    let html = render_html(&element);

    let img = &plan.root.children[0];
    let filter = img.style_value("filter").expect("plan resolves filter");
    assert_eq!(filter, "brightness(110%) sepia(25%) opacity(0.5)");
    assert!(html.contains(&format!("filter: {filter};")));
}

#[test]
fn opacity_flows_through_the_shared_filter() {
    let element = styled_image();
    let plan = element_plan(&element);
    let html = render_html(&element);
    let template = render_template(&element);

    // One representation everywhere: opacity is a filter function, never a
    // standalone declaration on the image node.
    let img = &plan.root.children[0];
    assert_eq!(img.style_value("opacity"), None);
    assert!(html.contains("filter: brightness(110%) sepia(25%) opacity(0.5);"));
    assert!(template.contains("filters.push(`opacity(${element.opacity})`)"));
    assert!(!template.contains("opacity(0.5)"));
}

#[test]
fn preview_matches_plan_for_overlay_alignment() {
    let element = styled_image();
    let plan = element_plan(&element);
    let preview = render_preview(&element);

    let overlay_plan = &plan.root.children[2];
    // the preview prunes the gated-off caption, so the overlay sits at 1
    let overlay_preview = &preview.children[1];
    for property in ["alignItems", "justifyContent", "backgroundColor"] {
        assert_eq!(
            overlay_preview.style_value(property),
            overlay_plan.style_value(property),
            "preview and plan disagree on {property}"
        );
    }
    assert_eq!(overlay_preview.style_value("alignItems"), Some("flex-end"));
    assert_eq!(
        overlay_preview.style_value("justifyContent"),
        Some("flex-end")
    );
}

#[test]
fn template_defers_exactly_the_gated_declarations() {
    let element = styled_image();
    let plan = element_plan(&element);
    let template = render_template(&element);

    // Every gated container declaration appears in the template under its
    // gate expression, so request-time evaluation reproduces the plan.
    for decl in &plan.root.styles {
        if let Some(gate) = &decl.gate {
            assert!(
                template.contains(&format!("<% if ({}) {{ %>", gate.expr)),
                "template is missing gate `{}`",
                gate.expr
            );
        }
    }
    // and the template never bakes in a resolved composite
    assert!(!template.contains("0 4px 12px 0 rgba(0,0,0,0.2)"));
    assert!(!template.contains("brightness(110%)"));
}

#[test]
fn all_three_targets_share_url_normalization() {
    let mut element = Element::image("URL fixture");
    if let ElementKind::Image(props) = &mut element.kind {
        props.src = "//uploads/media/double.png".to_string();
    }
    let plan = element_plan(&element);
    let preview = render_preview(&element);
    let html = render_html(&element);

    let normalized = "/uploads/media/double.png";
    let src_in_plan = plan.root.children[0]
        .attrs
        .iter()
        .find(|attr| attr.name == "src")
        .map(|attr| attr.value.as_str());
    assert_eq!(src_in_plan, Some(normalized));
    assert_eq!(
        preview.children[0]
            .attrs
            .iter()
            .find(|(name, _)| name == "src")
            .map(|(_, value)| value.as_str()),
        Some(normalized)
    );
    assert!(html.contains(&format!("src=\"{normalized}\"")));
}

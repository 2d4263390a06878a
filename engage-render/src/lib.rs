//! # Engage Render
//!
//! Multi-target renderers for Engage page elements.
//!
//! One shared [`plan::ElementPlan`] carries every style decision for an
//! element; three thin formatters serialize it for their consumption context:
//!
//! ```text
//!                 ┌──────────────┐
//!   Element ────► │  ElementPlan │ ── preview ──► camelCase node tree
//!                 │  (all style  │ ── html ─────► kebab-case HTML string
//!                 │   logic)     │ ── template ─► EJS source text
//!                 └──────────────┘
//! ```
//!
//! The three targets exist because they genuinely differ: inline preview
//! styles cannot express media queries or hover selectors, exported HTML must
//! be self-contained, and the template path defers evaluation to request
//! time. What they must never differ on is the style semantics, which is why
//! the plan computes those once.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod css;
pub mod html;
pub mod plan;
pub mod preview;
pub mod template;

pub use html::render_html;
pub use plan::{element_plan, ElementPlan, PlanNode, StyleDecl};
pub use preview::{render_preview, PreviewNode};
pub use template::render_template;

//! # Engage Core
//!
//! Core element model for the Engage page builder.
//!
//! One declarative [`Element`] (Image or Text variant) is the single source of
//! truth for a placed page element. Property editing mutates it through
//! [`editor::PropertyEditor`], pure functions in [`css`] derive composite CSS
//! values from its scalar fields, and the `engage-render` crate serializes the
//! same element into three visually identical targets.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                engage-core                  │
//! ├──────────────────┬──────────────────────────┤
//! │  Element Model   │  Property Editing        │
//! │  - Image / Text  │  - field patches         │
//! │  - VisualStyle   │  - whole-object replace  │
//! │  - defaults      │  - media selection       │
//! ├──────────────────┼──────────────────────────┤
//! │  Style Derivation│  Legacy Documents        │
//! │  - filter/shadow │  - alias pairs           │
//! │  - gradients     │  - composite strings     │
//! │  - URL fixup     │  - fontSize projection   │
//! └──────────────────┴──────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod collapse;
pub mod css;
pub mod document;
pub mod editor;
pub mod element;
pub mod error;
pub mod media;
pub mod page;
pub mod style;

pub use collapse::{CollapseState, SectionHeight, SectionKind, SectionPane};
pub use document::ElementDocument;
pub use editor::{PropertyEditor, PropertyValue};
pub use element::{Element, ElementId, ElementKind, ImageProps, TextProps};
pub use error::{CoreError, CoreResult};
pub use media::MediaItem;
pub use page::Page;
pub use style::{
    Animation, BorderStyle, FilterSettings, Gradient, HoverEffect, HoverKind, Lightbox,
    ObjectFit, Overlay, OverlayPosition, Shadow, TextShadow, TextType, VisualStyle,
};

/// Engage core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

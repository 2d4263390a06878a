//! Ordered element container.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::document::ElementDocument;
use crate::element::{Element, ElementId};
use crate::error::{CoreError, CoreResult};

/// A page: elements in display order.
#[derive(Debug, Clone, Default)]
pub struct Page {
    elements: HashMap<ElementId, Element>,
    order: Vec<ElementId>,
}

/// Serialized page shape: a flat list of element documents in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PageDocument {
    elements: Vec<ElementDocument>,
}

impl Page {
    /// Create an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the page has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Append an element, returning its id.
    pub fn add(&mut self, element: Element) -> ElementId {
        let id = element.id;
        tracing::debug!(element_id = %id, kind = element.kind.as_tag(), "adding element");
        self.elements.insert(id, element);
        self.order.push(id);
        id
    }

    /// Remove an element.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ElementNotFound`] when the id is not on this page.
    pub fn remove(&mut self, id: ElementId) -> CoreResult<Element> {
        let element = self
            .elements
            .remove(&id)
            .ok_or_else(|| CoreError::ElementNotFound(id.to_string()))?;
        self.order.retain(|entry| *entry != id);
        tracing::debug!(element_id = %id, "removed element");
        Ok(element)
    }

    /// Look up an element.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Look up an element for mutation.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(&id)
    }

    /// Elements in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.order.iter().filter_map(|id| self.elements.get(id))
    }

    /// Serialize to the persisted JSON shape (flat documents in order).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Serialization`] when encoding fails.
    pub fn to_json(&self) -> CoreResult<String> {
        let doc = PageDocument {
            elements: self.iter().map(ElementDocument::from_element).collect(),
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    /// Deserialize from the persisted JSON shape.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Serialization`] when the JSON is malformed.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let doc: PageDocument = serde_json::from_str(json)?;
        let mut page = Self::new();
        for element_doc in doc.elements {
            page.add(element_doc.into_element());
        }
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_iterate_in_order() {
        let mut page = Page::new();
        let first = page.add(Element::image("First"));
        let second = page.add(Element::text("Second"));
        assert_eq!(page.len(), 2);

        let labels: Vec<&str> = page.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["First", "Second"]);
        assert!(page.get(first).is_some());
        assert!(page.get(second).is_some());
    }

    #[test]
    fn test_remove_unknown_id_errors() {
        let mut page = Page::new();
        let missing = ElementId::new();
        assert!(matches!(
            page.remove(missing),
            Err(CoreError::ElementNotFound(_))
        ));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut page = Page::new();
        page.add(Element::text("A"));
        let middle = page.add(Element::text("B"));
        page.add(Element::text("C"));

        page.remove(middle).expect("remove");
        let labels: Vec<&str> = page.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "C"]);
    }

    #[test]
    fn test_json_round_trip() {
        let mut page = Page::new();
        let id = page.add(Element::image("Hero"));
        if let Some(element) = page.get_mut(id) {
            element.style.shadow.enabled = true;
        }
        page.add(Element::text("Intro"));

        let json = page.to_json().expect("serialize");
        let restored = Page::from_json(&json).expect("parse");
        assert_eq!(restored.len(), 2);

        let hero = restored.get(id).expect("hero survives with its id");
        assert!(hero.style.shadow.enabled);
    }
}

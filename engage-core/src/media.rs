//! Media picker boundary types.
//!
//! The media library itself is an external collaborator; the editor consumes
//! only the descriptor a selection resolves with.

use serde::{Deserialize, Serialize};

/// One record resolved by the external media-selection dialog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    /// Media-library record identifier.
    pub id: String,
    /// Public URL of the asset.
    pub url: String,
    /// Optional thumbnail URL.
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// Optional alt text authored in the library.
    #[serde(default)]
    pub alt: Option<String>,
    /// Optional display title.
    #[serde(default)]
    pub title: Option<String>,
    /// Original upload filename.
    #[serde(default)]
    pub original_name: Option<String>,
}

/// Parameters the editor passes when opening the media dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRequest {
    /// Allowed media types, e.g. `["IMAGE"]`.
    pub allowed_types: Vec<String>,
    /// Application section the dialog is scoped to.
    pub section: String,
    /// Company the media library belongs to.
    pub company_id: String,
}

impl MediaRequest {
    /// Request images for the page-builder section.
    #[must_use]
    pub fn images(company_id: impl Into<String>) -> Self {
        Self {
            allowed_types: vec!["IMAGE".to_string()],
            section: "pages".to_string(),
            company_id: company_id.into(),
        }
    }
}

impl MediaItem {
    /// Best-available alt text: `alt`, then `title`, then `original_name`.
    #[must_use]
    pub fn alt_text(&self) -> Option<&str> {
        self.alt
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.title.as_deref().filter(|s| !s.is_empty()))
            .or_else(|| self.original_name.as_deref().filter(|s| !s.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alt_text_fallback_chain() {
        let mut item = MediaItem {
            id: "m1".to_string(),
            url: "/uploads/media/team.png".to_string(),
            original_name: Some("team.png".to_string()),
            ..MediaItem::default()
        };
        assert_eq!(item.alt_text(), Some("team.png"));

        item.title = Some("Team photo".to_string());
        assert_eq!(item.alt_text(), Some("Team photo"));

        item.alt = Some("The whole team".to_string());
        assert_eq!(item.alt_text(), Some("The whole team"));
    }

    #[test]
    fn test_empty_strings_do_not_count() {
        let item = MediaItem {
            id: "m2".to_string(),
            url: "/a.png".to_string(),
            alt: Some(String::new()),
            ..MediaItem::default()
        };
        assert_eq!(item.alt_text(), None);
    }
}

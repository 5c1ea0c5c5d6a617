//! External link models and DTOs.

use folio_core::assets::Category;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Link kind
// ---------------------------------------------------------------------------

/// Where an external link points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Youtube,
    Vimeo,
    #[default]
    Video,
    Image,
}

impl LinkKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkKind::Youtube => "youtube",
            LinkKind::Vimeo => "vimeo",
            LinkKind::Video => "video",
            LinkKind::Image => "image",
        }
    }

    /// Parse a client-supplied kind, falling back to [`LinkKind::Video`].
    pub fn from_label_or_default(label: &str) -> Self {
        match label {
            "youtube" => LinkKind::Youtube,
            "vimeo" => LinkKind::Vimeo,
            "video" => LinkKind::Video,
            "image" => LinkKind::Image,
            _ => LinkKind::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `external_links` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalLink {
    pub id: DbId,
    pub title: String,
    pub url: String,
    pub category: String,
    pub kind: String,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Normalized input for inserting a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateExternalLink {
    pub title: String,
    pub url: String,
    pub category: Category,
    pub kind: LinkKind,
}

impl CreateExternalLink {
    /// Normalize raw request fields. A missing or empty title falls back to
    /// the URL; unknown categories and kinds fall back to their defaults.
    pub fn normalized(
        url: String,
        title: Option<&str>,
        category: Option<&str>,
        kind: Option<&str>,
    ) -> Self {
        let title = title
            .filter(|t| !t.is_empty())
            .map_or_else(|| url.clone(), str::to_string);
        Self {
            title,
            url,
            category: category.map(Category::from_label_or_default).unwrap_or_default(),
            kind: kind.map(LinkKind::from_label_or_default).unwrap_or_default(),
        }
    }
}

//! Portfolio asset read model.
//!
//! Assets live in the remote asset host; this module mirrors what the host
//! reports for one resource and decodes the naming convention carried in its
//! public id (see [`crate::public_id`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::public_id;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Fixed classification of portfolio assets, encoded as the first segment of
/// a public id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[default]
    MotionSaas,
    Shorts,
    StaticVisuals,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::MotionSaas,
        Category::Shorts,
        Category::StaticVisuals,
    ];

    /// The label used inside public ids and JSON payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::MotionSaas => "motion-saas",
            Category::Shorts => "shorts",
            Category::StaticVisuals => "static-visuals",
        }
    }

    /// Look up a category by its exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == label)
    }

    /// Look up a category by label, falling back to [`Category::MotionSaas`].
    pub fn from_label_or_default(label: &str) -> Self {
        Self::from_label(label).unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| CoreError::Validation(format!("Unknown category: {s}")))
    }
}

// ---------------------------------------------------------------------------
// ResourceKind
// ---------------------------------------------------------------------------

/// Media type of an asset. The remote host keeps a separate namespace per
/// kind, so every call against it must name one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Image,
    Video,
}

impl ResourceKind {
    /// Listing order: images first, then videos.
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Image, ResourceKind::Video];

    /// Order in which kinds are tried when the caller does not know the
    /// kind of an asset.
    pub const FALLBACK_ORDER: [ResourceKind; 2] = [ResourceKind::Video, ResourceKind::Image];

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Image => "image",
            ResourceKind::Video => "video",
        }
    }

    /// Parse a client-supplied kind. Anything other than `image` or `video`
    /// yields `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "image" => Some(ResourceKind::Image),
            "video" => Some(ResourceKind::Video),
            _ => None,
        }
    }

    /// Classify a kind reported by the remote host. Only `video` maps to
    /// video; every other resource type is served as an image.
    pub fn from_remote(resource_type: &str) -> Self {
        if resource_type == "video" {
            ResourceKind::Video
        } else {
            ResourceKind::Image
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Asset
// ---------------------------------------------------------------------------

/// One asset as seen in a listing snapshot, with its naming-convention
/// metadata decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Asset {
    pub public_id: String,
    pub kind: ResourceKind,
    /// Folder path before the base name; empty when the id has no folder.
    pub prefix: String,
    pub category: Category,
    pub featured: bool,
    pub base_name: String,
    pub rest_name: String,
    pub secure_url: Option<String>,
    pub created_at: Option<Timestamp>,
}

impl Asset {
    /// Build an asset from its public id and kind, decoding the metadata.
    pub fn new(public_id: impl Into<String>, kind: ResourceKind) -> Self {
        let public_id = public_id.into();
        let meta = public_id::parse(&public_id);
        Self {
            public_id,
            kind,
            prefix: meta.prefix,
            category: meta.category,
            featured: meta.featured,
            base_name: meta.base_name,
            rest_name: meta.rest_name,
            secure_url: None,
            created_at: None,
        }
    }
}

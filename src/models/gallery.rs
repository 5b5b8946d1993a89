//! Gallery item model
//!
//! This module provides:
//! - `ServiceMode` enum for the two business lines
//! - `MediaKind` enum distinguishing photos from videos
//! - `GalleryItem` entity representing one published project
//! - `NewGalleryItem` validated input for creating a project

use serde::{Deserialize, Serialize};

/// The two business lines. The active mode drives theming and content
/// filtering across the whole site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServiceMode {
    /// Aluminium fabrication and glazing (default)
    #[default]
    Aluminium,
    /// Interior painting and finishing
    Painting,
}

impl ServiceMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ServiceMode::Aluminium => ServiceMode::Painting,
            ServiceMode::Painting => ServiceMode::Aluminium,
        }
    }

    /// String representation used in cookies, queries and remote rows
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceMode::Aluminium => "aluminium",
            ServiceMode::Painting => "painting",
        }
    }

    /// Parse from the string representation
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "aluminium" => Some(ServiceMode::Aluminium),
            "painting" => Some(ServiceMode::Painting),
            _ => None,
        }
    }
}

impl std::fmt::Display for ServiceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of media a gallery item shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// One or more photographs (default)
    #[default]
    Image,
    /// A single video clip
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "image" => Some(MediaKind::Image),
            "video" => Some(MediaKind::Video),
            _ => None,
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One published project in the gallery
///
/// When `image_urls` is present the cover `image_url` equals its first
/// element; `images()` is the canonical way to enumerate the media.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryItem {
    /// Identifier assigned by the store on creation
    pub id: String,
    /// Project title
    pub title: String,
    /// Business line the project belongs to
    pub category: ServiceMode,
    /// Specific offering within the category (from the service catalog)
    #[serde(default)]
    pub service: Option<String>,
    /// Worker who executed the project
    pub author: String,
    /// ISO-formatted creation date
    pub date: String,
    /// Cover image URL
    pub image_url: String,
    /// Ordered list of all image URLs, cover first
    #[serde(default)]
    pub image_urls: Option<Vec<String>>,
    /// Media kind
    #[serde(default, rename = "type")]
    pub kind: MediaKind,
    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,
}

impl GalleryItem {
    /// All image URLs for this item, cover first
    pub fn images(&self) -> Vec<&str> {
        match &self.image_urls {
            Some(urls) if !urls.is_empty() => urls.iter().map(String::as_str).collect(),
            _ => vec![self.image_url.as_str()],
        }
    }
}

/// Validation error for user-supplied input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// Input for creating a new gallery item
///
/// The identifier is assigned by the store; the caller never supplies one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGalleryItem {
    pub title: String,
    pub category: ServiceMode,
    pub service: String,
    pub author: String,
    /// ISO-formatted creation date
    pub date: String,
    /// All uploaded image URLs in staging order
    pub image_urls: Vec<String>,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub description: String,
}

impl NewGalleryItem {
    /// Check required fields and the image invariant.
    ///
    /// Every field of the admin form is required, and at least one image
    /// must have been uploaded before submission.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError("Title is required".into()));
        }
        if self.service.trim().is_empty() {
            return Err(ValidationError("Service is required".into()));
        }
        if self.author.trim().is_empty() {
            return Err(ValidationError("Author is required".into()));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError("Description is required".into()));
        }
        if self.image_urls.is_empty() {
            return Err(ValidationError(
                "Please upload at least one image before submitting".into(),
            ));
        }
        Ok(())
    }

    /// Cover image URL: always the first staged image
    pub fn cover(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }
}

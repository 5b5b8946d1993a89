//! Gallery service
//!
//! Implements business logic for the project gallery:
//! - List, create and delete posts through the content store
//! - Validation of new posts before any remote call
//! - Pure filter composition over the fetched list
//!
//! Remote failures are caught here, logged, and degraded to values the
//! UI renders explicitly: listing failures are distinguishable from an
//! empty gallery, deletion failures surface as a flag.

use std::sync::Arc;

use crate::models::catalog;
use crate::models::{GalleryItem, NewGalleryItem, ServiceMode, ValidationError};
use crate::store::DynContentStore;

/// Error types for gallery operations
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    /// A required field is missing or no image was uploaded
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The content store could not be reached or rejected the call
    #[error("The gallery is temporarily unavailable")]
    Unavailable(#[source] anyhow::Error),
}

/// Gallery service over the active content store
pub struct GalleryService {
    store: DynContentStore,
}

impl GalleryService {
    pub fn new(store: DynContentStore) -> Self {
        Self { store }
    }

    /// Create a shared service for dependency injection
    pub fn shared(store: DynContentStore) -> Arc<Self> {
        Arc::new(Self::new(store))
    }

    /// All posts, newest first.
    ///
    /// A failing store is reported as `Unavailable` so callers can render
    /// an error state with a retry control instead of an empty gallery.
    pub async fn list(&self) -> Result<Vec<GalleryItem>, GalleryError> {
        self.store.list_gallery().await.map_err(|e| {
            tracing::error!("failed to list gallery items: {e:#}");
            GalleryError::Unavailable(e)
        })
    }

    /// Validate and insert a new post. The store assigns the identifier;
    /// the cover is the first staged image.
    pub async fn create(&self, input: &NewGalleryItem) -> Result<(), GalleryError> {
        input.validate()?;
        self.store.insert_gallery(input).await.map_err(|e| {
            tracing::error!("failed to create gallery item '{}': {e:#}", input.title);
            GalleryError::Unavailable(e)
        })
    }

    /// Delete a post by identifier.
    ///
    /// Deleting an identifier that no longer exists is a no-op; only a
    /// store failure yields `false`.
    pub async fn delete(&self, id: &str) -> bool {
        match self.store.delete_gallery(id).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("failed to delete gallery item {id}: {e:#}");
                false
            }
        }
    }
}

/// Category filter: everything, or one business line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ServiceMode),
}

impl CategoryFilter {
    /// Parse a query value; anything unrecognized means "all"
    pub fn parse(value: &str) -> Self {
        match ServiceMode::from_str(value) {
            Some(mode) => CategoryFilter::Only(mode),
            None => CategoryFilter::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(mode) => mode.as_str(),
        }
    }
}

/// Composed gallery filter state
///
/// Filtering is pure predicate composition over the already-fetched list;
/// the store is never asked to filter. The service-type options derive
/// from the active category, and the category controls deliberately drop
/// the service selection, so a stale service never outlives a category
/// change through the UI. A hand-edited URL can still combine a category
/// with a foreign service; the composition then yields an empty result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryFilter {
    pub category: CategoryFilter,
    /// `None` means all authors
    pub author: Option<String>,
    /// `None` means all services
    pub service: Option<String>,
}

impl GalleryFilter {
    /// Build from query parameters. A missing category follows the active
    /// theme mode, so switching modes re-filters the gallery to match.
    pub fn from_query(
        mode: ServiceMode,
        category: Option<&str>,
        author: Option<&str>,
        service: Option<&str>,
    ) -> Self {
        let category = match category {
            Some(value) => CategoryFilter::parse(value),
            None => CategoryFilter::Only(mode),
        };
        Self {
            category,
            author: normalize_choice(author),
            service: normalize_choice(service),
        }
    }

    /// Whether one item passes all three predicates
    pub fn matches(&self, item: &GalleryItem) -> bool {
        if let CategoryFilter::Only(mode) = self.category {
            if item.category != mode {
                return false;
            }
        }
        if let Some(author) = &self.author {
            if item.author != *author {
                return false;
            }
        }
        if let Some(service) = &self.service {
            if item.service.as_deref() != Some(service.as_str()) {
                return false;
            }
        }
        true
    }

    /// Apply the composed predicates to a fetched list
    pub fn apply<'a>(&self, items: &'a [GalleryItem]) -> Vec<&'a GalleryItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }

    /// Service titles offered by the service dropdown for the active
    /// category filter
    pub fn service_options(&self) -> Vec<&'static str> {
        match self.category {
            CategoryFilter::All => catalog::service_titles(None),
            CategoryFilter::Only(mode) => catalog::service_titles(Some(mode)),
        }
    }
}

fn normalize_choice(value: Option<&str>) -> Option<String> {
    match value {
        None => None,
        Some(v) if v.is_empty() || v.eq_ignore_ascii_case("all") => None,
        Some(v) => Some(v.to_string()),
    }
}

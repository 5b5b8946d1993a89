//! Storage access layer
//!
//! All remote-record lifecycle operations live behind the narrow
//! `ContentStore` trait: list/insert/delete for the two collections plus
//! binary uploads to the object bucket. Two drivers exist:
//! - `RestStore` — the hosted PostgREST-style backend (default)
//! - `MemoryStore` — in-process fallback with local-disk uploads
//!
//! The driver is selected from configuration, and nothing above this
//! layer knows which one is active.

pub mod memory;
pub mod rest;

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::{StoreConfig, StoreDriver, UploadConfig};
use crate::models::{Enquiry, GalleryItem, NewEnquiry, NewGalleryItem};

pub use memory::MemoryStore;
pub use rest::RestStore;

/// Repository interface over the remote collections and the object bucket
///
/// Identifier assignment is the store's job: inserts never carry an id.
/// Deleting an absent id is not an error.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// All gallery rows, newest first
    async fn list_gallery(&self) -> Result<Vec<GalleryItem>>;

    /// Insert one gallery row; the store assigns the identifier
    async fn insert_gallery(&self, input: &NewGalleryItem) -> Result<()>;

    /// Remove the gallery row with the given identifier, if present
    async fn delete_gallery(&self, id: &str) -> Result<()>;

    /// All enquiry rows, newest first
    async fn list_enquiries(&self) -> Result<Vec<Enquiry>>;

    /// Insert one enquiry row stamped with the given ISO date
    async fn insert_enquiry(&self, input: &NewEnquiry, date: &str) -> Result<()>;

    /// Store one binary object under a randomized name and return its
    /// publicly resolvable URL
    async fn upload_media(
        &self,
        filename: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<String>;
}

/// Shared handle to the active store
pub type DynContentStore = Arc<dyn ContentStore>;

/// Create the content store selected by configuration
pub fn create_store(store: &StoreConfig, upload: &UploadConfig) -> Result<DynContentStore> {
    match store.driver {
        StoreDriver::Rest => Ok(Arc::new(RestStore::new(store)?)),
        StoreDriver::Memory => Ok(Arc::new(MemoryStore::seeded(upload.path.clone()))),
    }
}

/// Randomized object name preserving the original file extension
pub fn object_name(filename: &str, content_type: &str) -> String {
    format!("{}.{}", Uuid::new_v4(), get_extension(filename, content_type))
}

/// Get file extension from filename or content type
fn get_extension(filename: &str, content_type: &str) -> String {
    // Try to get from filename first
    if let Some(ext) = filename.rsplit('.').next() {
        if !ext.is_empty() && ext.len() < 10 && ext != filename {
            return ext.to_lowercase();
        }
    }

    // Fall back to content type
    match content_type {
        "image/jpeg" => "jpg".to_string(),
        "image/png" => "png".to_string(),
        "image/gif" => "gif".to_string(),
        "image/webp" => "webp".to_string(),
        "video/mp4" => "mp4".to_string(),
        _ => "bin".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_name_preserves_extension() {
        let name = object_name("site photo.JPG", "image/jpeg");
        assert!(name.ends_with(".jpg"));
        // uuid + dot + extension
        assert_eq!(name.len(), 36 + 4);
    }

    #[test]
    fn test_object_name_falls_back_to_content_type() {
        let name = object_name("photo", "image/webp");
        assert!(name.ends_with(".webp"));

        let name = object_name("clip", "video/mp4");
        assert!(name.ends_with(".mp4"));

        let name = object_name("blob", "application/octet-stream");
        assert!(name.ends_with(".bin"));
    }

    #[test]
    fn test_object_name_is_randomized() {
        let a = object_name("a.png", "image/png");
        let b = object_name("a.png", "image/png");
        assert_ne!(a, b);
    }
}

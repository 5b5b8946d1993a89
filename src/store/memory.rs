//! In-process content store
//!
//! Fallback driver for development and demos: records live in memory and
//! uploads are written to the local upload directory, served back under
//! `/uploads/`. Seeded with a handful of representative projects so the
//! gallery is never empty on a fresh run.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Enquiry, GalleryItem, MediaKind, NewEnquiry, NewGalleryItem, ServiceMode};

use super::{object_name, ContentStore};

/// Memory-backed store with local-disk uploads
pub struct MemoryStore {
    gallery: RwLock<Vec<GalleryItem>>,
    enquiries: RwLock<Vec<Enquiry>>,
    upload_dir: PathBuf,
}

impl MemoryStore {
    /// Empty store
    pub fn new(upload_dir: PathBuf) -> Self {
        Self {
            gallery: RwLock::new(Vec::new()),
            enquiries: RwLock::new(Vec::new()),
            upload_dir,
        }
    }

    /// Store pre-populated with the starter projects
    pub fn seeded(upload_dir: PathBuf) -> Self {
        Self {
            gallery: RwLock::new(seed_posts()),
            enquiries: RwLock::new(Vec::new()),
            upload_dir,
        }
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn list_gallery(&self) -> Result<Vec<GalleryItem>> {
        let mut items = self.gallery.read().await.clone();
        // ISO dates order lexicographically
        items.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(items)
    }

    async fn insert_gallery(&self, input: &NewGalleryItem) -> Result<()> {
        let item = GalleryItem {
            id: Uuid::new_v4().to_string(),
            title: input.title.clone(),
            category: input.category,
            service: Some(input.service.clone()),
            author: input.author.clone(),
            date: input.date.clone(),
            image_url: input.cover().unwrap_or_default().to_string(),
            image_urls: Some(input.image_urls.clone()),
            kind: input.kind,
            description: Some(input.description.clone()),
        };
        self.gallery.write().await.insert(0, item);
        Ok(())
    }

    async fn delete_gallery(&self, id: &str) -> Result<()> {
        self.gallery.write().await.retain(|item| item.id != id);
        Ok(())
    }

    async fn list_enquiries(&self) -> Result<Vec<Enquiry>> {
        let mut items = self.enquiries.read().await.clone();
        items.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(items)
    }

    async fn insert_enquiry(&self, input: &NewEnquiry, date: &str) -> Result<()> {
        let enquiry = Enquiry {
            id: Uuid::new_v4().to_string(),
            name: input.name.clone(),
            phone: input.phone.clone(),
            message: input.message.clone(),
            worker: input.worker.clone(),
            date: Some(date.to_string()),
        };
        self.enquiries.write().await.insert(0, enquiry);
        Ok(())
    }

    async fn upload_media(
        &self,
        filename: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<String> {
        let name = object_name(filename, content_type);
        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .with_context(|| format!("failed to create upload dir {:?}", self.upload_dir))?;
        let path = self.upload_dir.join(&name);
        tokio::fs::write(&path, &data)
            .await
            .with_context(|| format!("failed to write upload {:?}", path))?;
        Ok(format!("/uploads/{name}"))
    }
}

/// Starter projects shown until real posts exist
fn seed_posts() -> Vec<GalleryItem> {
    let posts = [
        (
            "Modern Office Partition",
            ServiceMode::Aluminium,
            "Office Partitions",
            "Shankar Soni",
            "2023-10-15",
            "https://images.unsplash.com/photo-1497366216548-37526070297c?auto=format&fit=crop&q=80&w=1000",
            "Glass and aluminium partition for a tech startup.",
        ),
        (
            "Living Room Makeover",
            ServiceMode::Painting,
            "Texture Design",
            "MANOJ SONI",
            "2023-11-02",
            "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?auto=format&fit=crop&q=80&w=1000",
            "Royal texture paint with false ceiling integration.",
        ),
        (
            "Heavy Duty Sliding Door",
            ServiceMode::Aluminium,
            "Sliding Doors",
            "Santosh Soni",
            "2023-12-10",
            "https://images.unsplash.com/photo-1600607686527-6fb886090705?auto=format&fit=crop&q=80&w=1000",
            "Balcony slider with mosquito mesh.",
        ),
        (
            "Exterior Villa Painting",
            ServiceMode::Painting,
            "Exterior Painting",
            "Shankar Soni",
            "2024-01-05",
            "https://images.unsplash.com/photo-1513584685908-2274653fa36f?auto=format&fit=crop&q=80&w=1000",
            "Weather-proof coating for a 2-story villa.",
        ),
    ];

    posts
        .into_iter()
        .enumerate()
        .map(|(i, (title, category, service, author, date, image, desc))| GalleryItem {
            id: (i + 1).to_string(),
            title: title.to_string(),
            category,
            service: Some(service.to_string()),
            author: author.to_string(),
            date: date.to_string(),
            image_url: image.to_string(),
            image_urls: None,
            kind: MediaKind::Image,
            description: Some(desc.to_string()),
        })
        .collect()
}

//! Enquiry service
//!
//! Submission stamps the current time and returns a success flag rather
//! than an error, so the contact form can show a user-facing failure
//! message without unwinding. Listing distinguishes a failing store from
//! an empty inbox for the admin panel.

use std::sync::Arc;

use chrono::Utc;

use crate::models::{Enquiry, NewEnquiry};
use crate::store::DynContentStore;

/// Error types for enquiry listing
#[derive(Debug, thiserror::Error)]
pub enum EnquiryError {
    #[error("Enquiries are temporarily unavailable")]
    Unavailable(#[source] anyhow::Error),
}

/// Enquiry service over the active content store
pub struct EnquiryService {
    store: DynContentStore,
}

impl EnquiryService {
    pub fn new(store: DynContentStore) -> Self {
        Self { store }
    }

    pub fn shared(store: DynContentStore) -> Arc<Self> {
        Arc::new(Self::new(store))
    }

    /// All enquiries, newest first
    pub async fn list(&self) -> Result<Vec<Enquiry>, EnquiryError> {
        self.store.list_enquiries().await.map_err(|e| {
            tracing::error!("failed to list enquiries: {e:#}");
            EnquiryError::Unavailable(e)
        })
    }

    /// Insert one enquiry, stamped with the submission time.
    ///
    /// The caller validates the input first; this only reports whether
    /// the store accepted the row.
    pub async fn submit(&self, input: &NewEnquiry) -> bool {
        let date = Utc::now().to_rfc3339();
        match self.store.insert_enquiry(input, &date).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("failed to submit enquiry from '{}': {e:#}", input.name);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ContentStore, MemoryStore};
    use anyhow::anyhow;
    use async_trait::async_trait;
    use std::path::PathBuf;

    struct BrokenStore;

    #[async_trait]
    impl ContentStore for BrokenStore {
        async fn list_gallery(&self) -> anyhow::Result<Vec<crate::models::GalleryItem>> {
            Err(anyhow!("down"))
        }
        async fn insert_gallery(&self, _: &crate::models::NewGalleryItem) -> anyhow::Result<()> {
            Err(anyhow!("down"))
        }
        async fn delete_gallery(&self, _: &str) -> anyhow::Result<()> {
            Err(anyhow!("down"))
        }
        async fn list_enquiries(&self) -> anyhow::Result<Vec<Enquiry>> {
            Err(anyhow!("down"))
        }
        async fn insert_enquiry(&self, _: &NewEnquiry, _: &str) -> anyhow::Result<()> {
            Err(anyhow!("down"))
        }
        async fn upload_media(&self, _: &str, _: &str, _: Vec<u8>) -> anyhow::Result<String> {
            Err(anyhow!("down"))
        }
    }

    fn enquiry() -> NewEnquiry {
        NewEnquiry {
            name: "Asha".into(),
            phone: "+91 90000 00000".into(),
            message: "Need a quote".into(),
            worker: None,
        }
    }

    #[tokio::test]
    async fn test_submit_reports_success_flag() {
        let ok = EnquiryService::new(Arc::new(MemoryStore::new(PathBuf::from("uploads"))));
        assert!(ok.submit(&enquiry()).await);

        let broken = EnquiryService::new(Arc::new(BrokenStore));
        assert!(!broken.submit(&enquiry()).await);
    }

    #[tokio::test]
    async fn test_submit_stamps_date() {
        let store = Arc::new(MemoryStore::new(PathBuf::from("uploads")));
        let service = EnquiryService::new(store);
        service.submit(&enquiry()).await;

        let list = service.list().await.unwrap();
        let date = list[0].date.as_deref().unwrap();
        // RFC 3339 stamp
        assert!(date.contains('T'));
    }

    #[tokio::test]
    async fn test_list_failure_is_distinguishable() {
        let broken = EnquiryService::new(Arc::new(BrokenStore));
        assert!(matches!(
            broken.list().await.unwrap_err(),
            EnquiryError::Unavailable(_)
        ));
    }
}

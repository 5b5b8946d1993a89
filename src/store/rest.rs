//! Remote PostgREST-style store
//!
//! Talks to the hosted backend over HTTPS: two record collections under
//! `/rest/v1/` and an object bucket under `/storage/v1/`. Remote rows are
//! decoded tolerantly — optional columns default, identifiers arrive as
//! string or number, and the submission timestamp may live under one of
//! several column names — and normalized into the local record shapes
//! here, at the boundary, so nothing above this module deals with remote
//! quirks.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::StoreConfig;
use crate::models::{Enquiry, GalleryItem, MediaKind, NewEnquiry, NewGalleryItem, ServiceMode};

use super::{object_name, ContentStore};

/// Client for the hosted backend
pub struct RestStore {
    http: reqwest::Client,
    base: String,
    gallery_table: String,
    enquiries_table: String,
    bucket: String,
}

impl RestStore {
    /// Build a client from configuration.
    ///
    /// The access key is attached to every request, both as the `apikey`
    /// header and as a bearer token. No local timeout is set; failures
    /// surface from the call itself.
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&config.key).context("store access key is not a valid header value")?;
        headers.insert("apikey", key);
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.key))
            .context("store access key is not a valid header value")?;
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            base: config.url.trim_end_matches('/').to_string(),
            gallery_table: config.gallery_table.clone(),
            enquiries_table: config.enquiries_table.clone(),
            bucket: config.bucket.clone(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base, table)
    }

    fn object_url(&self, name: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base, self.bucket, name)
    }

    /// Publicly resolvable URL for an uploaded object
    fn public_url(&self, name: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base, self.bucket, name
        )
    }
}

#[async_trait]
impl ContentStore for RestStore {
    async fn list_gallery(&self) -> Result<Vec<GalleryItem>> {
        let rows: Vec<GalleryRow> = self
            .http
            .get(self.table_url(&self.gallery_table))
            .query(&[("select", "*"), ("order", "date.desc")])
            .send()
            .await
            .context("gallery list request failed")?
            .error_for_status()
            .context("gallery list request rejected")?
            .json()
            .await
            .context("gallery list response was not valid JSON")?;

        Ok(rows.into_iter().map(GalleryRow::normalize).collect())
    }

    async fn insert_gallery(&self, input: &NewGalleryItem) -> Result<()> {
        let row = NewGalleryRow::from(input);
        self.http
            .post(self.table_url(&self.gallery_table))
            .header("Prefer", "return=minimal")
            .json(&row)
            .send()
            .await
            .context("gallery insert request failed")?
            .error_for_status()
            .context("gallery insert rejected")?;
        Ok(())
    }

    async fn delete_gallery(&self, id: &str) -> Result<()> {
        // PostgREST deletes are idempotent: no matching row is still 2xx.
        self.http
            .delete(self.table_url(&self.gallery_table))
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await
            .context("gallery delete request failed")?
            .error_for_status()
            .context("gallery delete rejected")?;
        Ok(())
    }

    async fn list_enquiries(&self) -> Result<Vec<Enquiry>> {
        let rows: Vec<EnquiryRow> = self
            .http
            .get(self.table_url(&self.enquiries_table))
            .query(&[("select", "*"), ("order", "date.desc")])
            .send()
            .await
            .context("enquiry list request failed")?
            .error_for_status()
            .context("enquiry list request rejected")?
            .json()
            .await
            .context("enquiry list response was not valid JSON")?;

        Ok(rows.into_iter().map(EnquiryRow::normalize).collect())
    }

    async fn insert_enquiry(&self, input: &NewEnquiry, date: &str) -> Result<()> {
        let row = NewEnquiryRow {
            name: &input.name,
            phone: &input.phone,
            message: &input.message,
            worker: input.worker.as_deref(),
            date,
        };
        self.http
            .post(self.table_url(&self.enquiries_table))
            .header("Prefer", "return=minimal")
            .json(&row)
            .send()
            .await
            .context("enquiry insert request failed")?
            .error_for_status()
            .context("enquiry insert rejected")?;
        Ok(())
    }

    async fn upload_media(
        &self,
        filename: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<String> {
        let name = object_name(filename, content_type);
        self.http
            .post(self.object_url(&name))
            .header(CONTENT_TYPE, content_type.to_string())
            .body(data)
            .send()
            .await
            .context("media upload request failed")?
            .error_for_status()
            .context("media upload rejected")?;
        Ok(self.public_url(&name))
    }
}

/// Accept identifiers stored as either string or number
fn de_loose_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Loose::deserialize(deserializer)? {
        Loose::Text(s) => s,
        Loose::Number(n) => n.to_string(),
    })
}

/// Remote gallery row as stored
#[derive(Debug, Deserialize)]
struct GalleryRow {
    #[serde(deserialize_with = "de_loose_id")]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    category: ServiceMode,
    #[serde(default)]
    service: Option<String>,
    #[serde(default)]
    author: String,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    inserted_at: Option<String>,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    image_urls: Option<Vec<String>>,
    #[serde(default, rename = "type")]
    kind: MediaKind,
    #[serde(default)]
    description: Option<String>,
}

impl GalleryRow {
    /// Collapse the candidate timestamp columns and produce the local shape
    fn normalize(self) -> GalleryItem {
        let date = self
            .date
            .or(self.created_at)
            .or(self.inserted_at)
            .unwrap_or_default();
        GalleryItem {
            id: self.id,
            title: self.title,
            category: self.category,
            service: self.service,
            author: self.author,
            date,
            image_url: self.image_url,
            image_urls: self.image_urls,
            kind: self.kind,
            description: self.description,
        }
    }
}

/// Gallery insert payload; the store assigns the identifier
#[derive(Debug, Serialize)]
struct NewGalleryRow<'a> {
    title: &'a str,
    category: ServiceMode,
    service: &'a str,
    author: &'a str,
    date: &'a str,
    image_url: &'a str,
    image_urls: &'a [String],
    #[serde(rename = "type")]
    kind: MediaKind,
    description: &'a str,
}

impl<'a> From<&'a NewGalleryItem> for NewGalleryRow<'a> {
    fn from(input: &'a NewGalleryItem) -> Self {
        Self {
            title: &input.title,
            category: input.category,
            service: &input.service,
            author: &input.author,
            date: &input.date,
            // Cover invariant: the first staged image is the cover.
            image_url: input.cover().unwrap_or_default(),
            image_urls: &input.image_urls,
            kind: input.kind,
            description: &input.description,
        }
    }
}

/// Remote enquiry row as stored
#[derive(Debug, Deserialize)]
struct EnquiryRow {
    #[serde(deserialize_with = "de_loose_id")]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    worker: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    inserted_at: Option<String>,
}

impl EnquiryRow {
    fn normalize(self) -> Enquiry {
        let date = self.date.or(self.created_at).or(self.inserted_at);
        Enquiry {
            id: self.id,
            name: self.name,
            phone: self.phone,
            message: self.message,
            worker: self.worker,
            date,
        }
    }
}

#[derive(Debug, Serialize)]
struct NewEnquiryRow<'a> {
    name: &'a str,
    phone: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    worker: Option<&'a str>,
    date: &'a str,
}

//! Service layer
//!
//! Business logic between the HTTP handlers and the storage access layer:
//! gallery listing/creation/deletion with client-side filter composition,
//! enquiry submission, and the admin session gate.

pub mod enquiry;
pub mod gallery;
pub mod session;

pub use enquiry::{EnquiryError, EnquiryService};
pub use gallery::{CategoryFilter, GalleryError, GalleryFilter, GalleryService};
pub use session::AdminSessions;

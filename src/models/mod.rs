//! Data models
//!
//! Entities for the two remote collections (gallery items and enquiries),
//! their validated input types, and the static service catalog that seeds
//! the public pages and the admin form.

pub mod catalog;
pub mod enquiry;
pub mod gallery;

pub use catalog::{ServiceDescriptor, TeamMember, WORKERS};
pub use enquiry::{Enquiry, NewEnquiry};
pub use gallery::{GalleryItem, MediaKind, NewGalleryItem, ServiceMode, ValidationError};

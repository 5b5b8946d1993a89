//! Sneha Sliding — marketing site with an embedded admin panel
//!
//! This library provides the core functionality for the Sneha Sliding
//! website: the themed landing page, the filterable project gallery, the
//! enquiry form, and the password-gated admin panel. Persistence lives in
//! a hosted remote store reached over HTTPS.

pub mod config;
pub mod models;
pub mod services;
pub mod store;
pub mod theme;
pub mod web;

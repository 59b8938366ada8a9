//! estate-lister - draft, upload and publish real-estate listings
//!
//! The library models the listing-creation workflow: a draft editor that
//! accumulates property data and images, uploads images concurrently to an
//! object store, validates the draft and submits it to the listing backend.

pub mod auth;
pub mod config;
pub mod draft;
pub mod error;
pub mod listing;
pub mod session;
pub mod submit;
pub mod types;
pub mod upload;
pub mod validate;

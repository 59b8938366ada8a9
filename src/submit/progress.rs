//! Progress callback trait for interface-agnostic updates
//!
//! This trait allows different front ends (CLI, GUI, web) to receive
//! progress updates while images upload and the listing is submitted.

use crate::error::Error;
use crate::types::ListingRoute;
use async_trait::async_trait;

/// Submission phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Running pre-submit checks
    Validating,
    /// Waiting on the listing backend
    Submitting,
    /// Listing created
    Success,
    /// Backend rejected the listing or could not be reached
    Failed,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validating => write!(f, "Validating"),
            Self::Submitting => write!(f, "Creating listing"),
            Self::Success => write!(f, "Done"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

/// Single image upload status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadStatus {
    /// Upload started
    Started,
    /// Upload succeeded
    Success,
    /// Upload failed with error message
    Failed(String),
}

impl std::fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Started => write!(f, "started"),
            Self::Success => write!(f, "uploaded"),
            Self::Failed(msg) => write!(f, "failed: {msg}"),
        }
    }
}

/// Progress callback trait
///
/// Implement this trait to receive progress updates from the editor.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when the submission enters a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called as each image of a batch moves through its upload
    async fn on_upload(&self, file: &str, status: UploadStatus);

    /// Called once a listing is created; the front end should show the route
    async fn on_navigate(&self, route: &ListingRoute);

    /// Called when an action fails (the editor stays usable)
    async fn on_error(&self, error: &Error);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_upload(&self, _file: &str, _status: UploadStatus) {}
    async fn on_navigate(&self, _route: &ListingRoute) {}
    async fn on_error(&self, _error: &Error) {}
    async fn on_message(&self, _message: &str) {}
}

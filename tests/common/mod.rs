//! Common test utilities for estate-lister tests

pub mod fixtures;
pub mod mock_listing;
pub mod mock_uploader;
pub mod recording_progress;

// Re-exports for convenience - not all test binaries use all exports
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use mock_listing::MockListingService;
#[allow(unused_imports)]
pub use mock_uploader::{GatedUploader, MockUploader};
#[allow(unused_imports)]
pub use recording_progress::{Event, RecordingProgress};

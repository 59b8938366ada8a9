//! Image upload to object storage
//!
//! [`ImageUploader`] is the single-call seam; [`BatchUploader`] fans a
//! user's selection out over it and gathers the results.

mod batch;
mod cloudinary;

pub use batch::BatchUploader;
pub use cloudinary::CloudinaryUploader;

use crate::error::Result;
use crate::types::ImageFile;
use async_trait::async_trait;

/// Uploads one file and returns its durable URL
///
/// One attempt per call; implementations never retry.
#[async_trait]
pub trait ImageUploader: Send + Sync {
    /// Upload `file`, failing with [`Error::UploadFailed`] on any problem
    ///
    /// [`Error::UploadFailed`]: crate::error::Error::UploadFailed
    async fn upload(&self, file: &ImageFile) -> Result<String>;
}

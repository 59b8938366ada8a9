//! Concurrent batch upload

use crate::error::{Error, Result};
use crate::submit::{BusyFlag, ProgressCallback, UploadStatus};
use crate::types::{ImageFile, MAX_IMAGES};
use crate::upload::ImageUploader;
use futures::future::try_join_all;
use tracing::{debug, info, warn};

/// Uploads a user's image selection as one all-or-nothing batch
pub struct BatchUploader<'a> {
    uploader: &'a dyn ImageUploader,
    uploading: BusyFlag,
}

impl<'a> BatchUploader<'a> {
    /// Create a batch uploader over a single-file uploader
    pub fn new(uploader: &'a dyn ImageUploader) -> Self {
        Self {
            uploader,
            uploading: BusyFlag::new(),
        }
    }

    /// The "uploading" indicator, set while a batch is in flight
    pub fn busy_flag(&self) -> BusyFlag {
        self.uploading.clone()
    }

    /// Upload `files` concurrently for a draft that already holds
    /// `current_count` images
    ///
    /// Returns the URLs in the order of `files`. If any upload fails the whole
    /// batch fails with [`Error::BatchUploadFailed`] and no URL is returned.
    /// An empty selection, or one that would exceed [`MAX_IMAGES`], fails with
    /// [`Error::BatchTooLarge`] before anything is sent.
    pub async fn submit_batch(
        &self,
        files: &[ImageFile],
        current_count: usize,
        progress: &dyn ProgressCallback,
    ) -> Result<Vec<String>> {
        if files.is_empty() || current_count + files.len() > MAX_IMAGES {
            warn!(
                selected = files.len(),
                current_count, "rejecting image batch over the limit"
            );
            return Err(Error::BatchTooLarge);
        }

        let Some(_guard) = self.uploading.try_acquire() else {
            return Err(Error::UploadInProgress);
        };

        debug!(count = files.len(), "starting image batch");
        let uploads = files.iter().map(|file| async move {
            progress.on_upload(&file.name, UploadStatus::Started).await;
            match self.uploader.upload(file).await {
                Ok(url) => {
                    progress.on_upload(&file.name, UploadStatus::Success).await;
                    Ok(url)
                }
                Err(e) => {
                    warn!(file = %file.name, error = %e, "image upload failed");
                    progress
                        .on_upload(&file.name, UploadStatus::Failed(e.to_string()))
                        .await;
                    Err(e)
                }
            }
        });

        // Results land in input order; the first failure ends the join early
        match try_join_all(uploads).await {
            Ok(urls) => {
                info!(count = urls.len(), "image batch uploaded");
                Ok(urls)
            }
            Err(_) => Err(Error::BatchUploadFailed),
        }
    }
}

//! Editing session
//!
//! [`ListingEditor`] ties the draft, the batch uploader and the submission
//! controller together for one user. Failures never escape it: each is
//! turned into the short message the front end shows next to the control
//! that triggered it, and the draft stays editable.

use crate::draft::{DraftStore, FieldChange};
use crate::listing::ListingService;
use crate::submit::{BusyFlag, ProgressCallback, SubmissionController, SubmitOutcome, SubmitState};
use crate::types::{ImageFile, ListingDraft, MAX_IMAGES};
use crate::upload::{BatchUploader, ImageUploader};
use tracing::debug;

/// One user's listing-creation session
pub struct ListingEditor<'a> {
    store: DraftStore,
    uploader: BatchUploader<'a>,
    controller: SubmissionController<'a>,
    progress: &'a dyn ProgressCallback,
    upload_error: Option<String>,
}

impl<'a> ListingEditor<'a> {
    /// Start a session with a blank draft
    pub fn new(
        images: &'a dyn ImageUploader,
        listings: &'a dyn ListingService,
        user_ref: impl Into<String>,
        progress: &'a dyn ProgressCallback,
    ) -> Self {
        Self::with_store(DraftStore::new(), images, listings, user_ref, progress)
    }

    /// Start a session from an existing draft store
    pub fn with_store(
        store: DraftStore,
        images: &'a dyn ImageUploader,
        listings: &'a dyn ListingService,
        user_ref: impl Into<String>,
        progress: &'a dyn ProgressCallback,
    ) -> Self {
        let uploader = BatchUploader::new(images);
        let controller = SubmissionController::new(listings, user_ref, uploader.busy_flag());
        Self {
            store,
            uploader,
            controller,
            progress,
            upload_error: None,
        }
    }

    /// Current draft
    pub const fn draft(&self) -> &ListingDraft {
        self.store.draft()
    }

    /// Apply a field edit
    pub fn set_field(&mut self, change: FieldChange) -> &ListingDraft {
        self.store.set_field(change)
    }

    /// Remove an image; out-of-range indices are ignored
    pub fn remove_image_at(&mut self, index: usize) -> &ListingDraft {
        self.store.remove_image_at(index)
    }

    /// Upload a selection of images and append them to the draft
    ///
    /// Returns whether the images were added. On failure the draft is left
    /// untouched and [`upload_error`](Self::upload_error) holds the message.
    pub async fn upload_images(&mut self, files: &[ImageFile]) -> bool {
        let result = self
            .uploader
            .submit_batch(files, self.store.image_count(), self.progress)
            .await;
        match result {
            Ok(urls) => {
                self.upload_error = None;
                let added = urls.len();
                self.store.append_images(urls);
                debug!(total = self.store.image_count(), "merged uploaded images");
                self.progress
                    .on_message(&format!(
                        "Added {added} image{} ({}/{})",
                        if added == 1 { "" } else { "s" },
                        self.store.image_count(),
                        MAX_IMAGES
                    ))
                    .await;
                true
            }
            Err(e) => {
                self.upload_error = Some(e.user_message());
                self.progress.on_error(&e).await;
                false
            }
        }
    }

    /// Validate and submit the draft
    pub async fn submit(&mut self) -> SubmitOutcome {
        self.controller.submit(self.store.draft(), self.progress).await
    }

    /// Submission state
    pub const fn state(&self) -> &SubmitState {
        self.controller.state()
    }

    /// Message from the last failed upload
    pub fn upload_error(&self) -> Option<&str> {
        self.upload_error.as_deref()
    }

    /// Message from the last failed submit
    pub fn submit_error(&self) -> Option<&str> {
        self.controller.error()
    }

    /// Set while a batch is uploading
    pub fn uploading(&self) -> BusyFlag {
        self.uploader.busy_flag()
    }

    /// Set while the listing is being created, and after it was
    pub fn loading(&self) -> BusyFlag {
        self.controller.busy_flag()
    }
}

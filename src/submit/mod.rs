//! Submission state machine
//!
//! Drives a draft through validation and creation:
//! 1. Validating - local checks, no network
//! 2. Submitting - one create request to the listing backend
//! 3. Success (terminal) or Failed (back to Idle with a message)

mod busy;
mod progress;

pub use busy::{BusyFlag, BusyGuard};
pub use progress::{NoopProgress, Phase, ProgressCallback, UploadStatus};

use crate::error::Error;
use crate::listing::{ListingPayload, ListingService};
use crate::types::{ListingDraft, ListingRoute};
use crate::validate::validate;
use tracing::{info, warn};

/// Where the controller stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitState {
    /// Editable; carries the last failure message, if any
    Idle {
        /// Message to display next to the submit button
        error: Option<String>,
    },
    /// Running pre-submit checks
    Validating,
    /// Create request in flight
    Submitting,
    /// Listing created; the session is over
    Success(String),
    /// Create request failed; transient, settles into `Idle`
    Failed(String),
}

impl Default for SubmitState {
    fn default() -> Self {
        Self::Idle { error: None }
    }
}

/// What a submit action did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another action is running or the listing already exists
    Ignored,
    /// Rejected by local validation; nothing was sent
    Invalid(String),
    /// Listing created; navigate to the route
    Created(ListingRoute),
    /// Backend rejected the listing or was unreachable
    Failed(String),
}

/// Owns the submission state machine for one editing session
pub struct SubmissionController<'a> {
    service: &'a dyn ListingService,
    user_ref: String,
    state: SubmitState,
    loading: BusyFlag,
    uploading: BusyFlag,
}

impl<'a> SubmissionController<'a> {
    /// Create a controller submitting on behalf of `user_ref`
    ///
    /// `uploading` is the batch uploader's busy flag; submitting is refused
    /// while it is set.
    pub fn new(service: &'a dyn ListingService, user_ref: impl Into<String>, uploading: BusyFlag) -> Self {
        Self {
            service,
            user_ref: user_ref.into(),
            state: SubmitState::default(),
            loading: BusyFlag::new(),
            uploading,
        }
    }

    /// Current state
    pub const fn state(&self) -> &SubmitState {
        &self.state
    }

    /// The "loading" indicator, set while a create request is in flight
    /// and kept set after success
    pub fn busy_flag(&self) -> BusyFlag {
        self.loading.clone()
    }

    /// Message from the last failed attempt
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SubmitState::Idle { error } => error.as_deref(),
            _ => None,
        }
    }

    /// Validate and submit `draft`
    pub async fn submit(&mut self, draft: &ListingDraft, progress: &dyn ProgressCallback) -> SubmitOutcome {
        if matches!(self.state, SubmitState::Success(_))
            || self.loading.is_set()
            || self.uploading.is_set()
        {
            info!("submit ignored while busy");
            return SubmitOutcome::Ignored;
        }

        self.state = SubmitState::Validating;
        progress.on_phase(Phase::Validating).await;

        let payload = match validate(draft)
            .and_then(|()| ListingPayload::from_draft(draft, &self.user_ref))
        {
            Ok(payload) => payload,
            Err(e) => {
                let message = e.to_string();
                info!(reason = %message, "draft failed validation");
                self.state = SubmitState::Idle {
                    error: Some(message.clone()),
                };
                progress.on_error(&Error::Validation(e)).await;
                return SubmitOutcome::Invalid(message);
            }
        };

        let Some(guard) = self.loading.try_acquire() else {
            self.state = SubmitState::Idle { error: None };
            return SubmitOutcome::Ignored;
        };
        self.state = SubmitState::Submitting;
        progress.on_phase(Phase::Submitting).await;

        match self.service.create_listing(&payload).await {
            Ok(listing_id) => {
                info!(listing_id = %listing_id, "listing created");
                // Stay "loading" until the front end has navigated away
                guard.hold();
                self.state = SubmitState::Success(listing_id.clone());
                progress.on_phase(Phase::Success).await;

                let route = ListingRoute::new(listing_id);
                progress.on_navigate(&route).await;
                SubmitOutcome::Created(route)
            }
            Err(e) => {
                let message = e.user_message();
                warn!(reason = %message, "listing submission failed");
                drop(guard);
                self.state = SubmitState::Failed(message.clone());
                progress.on_phase(Phase::Failed).await;
                progress.on_error(&e).await;
                self.state = SubmitState::Idle {
                    error: Some(message.clone()),
                };
                SubmitOutcome::Failed(message)
            }
        }
    }
}

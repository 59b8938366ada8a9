//! Test double for the listing backend

use async_trait::async_trait;
use estate_lister::error::{Error, Result};
use estate_lister::listing::{CreateListingResponse, ListingPayload, ListingService};
use serde_json::Value;
use std::sync::Mutex;

enum Reply {
    Body(Value),
    Transport(String),
}

/// Listing service answering every create with a canned response
pub struct MockListingService {
    reply: Reply,
    payloads: Mutex<Vec<ListingPayload>>,
}

#[allow(dead_code)]
impl MockListingService {
    /// Answer with this JSON body
    pub fn responding(body: Value) -> Self {
        Self {
            reply: Reply::Body(body),
            payloads: Mutex::new(Vec::new()),
        }
    }

    /// Fail as if the network were down
    pub fn unreachable(message: &str) -> Self {
        Self {
            reply: Reply::Transport(message.to_string()),
            payloads: Mutex::new(Vec::new()),
        }
    }

    /// Payloads received so far
    pub fn payloads(&self) -> Vec<ListingPayload> {
        self.payloads.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }
}

#[async_trait]
impl ListingService for MockListingService {
    async fn create_listing(&self, payload: &ListingPayload) -> Result<String> {
        self.payloads.lock().unwrap().push(payload.clone());
        match &self.reply {
            Reply::Body(body) => serde_json::from_value::<CreateListingResponse>(body.clone())?
                .into_listing_id(),
            Reply::Transport(message) => Err(Error::SubmissionFailed(message.clone())),
        }
    }
}

//! Listing backend
//!
//! [`ListingService`] abstracts the create-endpoint so the submission
//! controller can run against the real backend or a test double.

mod http;

pub use http::{CREATE_PATH, HttpListingService};

use crate::error::{Error, Result, ValidationError};
use crate::types::{ListingDraft, ListingType};
use crate::validate::coerce_int;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Message used when the backend rejects a listing without saying why
pub const DEFAULT_FAILURE_MESSAGE: &str = "Listing creation failed";

/// Listing service trait
#[async_trait]
pub trait ListingService: Send + Sync {
    /// Create a listing and return its identifier
    ///
    /// Backend rejections and transport faults both surface as
    /// [`Error::SubmissionFailed`].
    async fn create_listing(&self, payload: &ListingPayload) -> Result<String>;
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPayload {
    /// Image URLs, cover first
    pub image_urls: Vec<String>,
    /// Listing title
    pub name: String,
    /// Description
    pub description: String,
    /// Street address
    pub address: String,
    /// Sale or rent
    #[serde(rename = "type")]
    pub listing_type: ListingType,
    /// Bedroom count
    pub bedrooms: i64,
    /// Bathroom count
    pub bathrooms: i64,
    /// Regular price
    pub regular_price: i64,
    /// Discounted price
    pub discount_price: i64,
    /// Discounted price applies
    pub offer: bool,
    /// Parking included
    pub parking: bool,
    /// Furnished
    pub furnished: bool,
    /// Owner of the listing
    pub user_ref: String,
}

impl ListingPayload {
    /// Coerce a draft into the wire form, attaching the owner reference
    ///
    /// Without an offer an unreadable discount is sent as zero.
    pub fn from_draft(draft: &ListingDraft, user_ref: &str) -> std::result::Result<Self, ValidationError> {
        let number = |field: &'static str, raw: &str| {
            coerce_int(raw).ok_or_else(|| ValidationError::InvalidField {
                field,
                reason: "must be a whole number".to_string(),
            })
        };

        let discount_price = if draft.offer {
            number("discountPrice", &draft.discount_price)?
        } else {
            coerce_int(&draft.discount_price).unwrap_or(0)
        };

        Ok(Self {
            image_urls: draft.image_urls.clone(),
            name: draft.name.clone(),
            description: draft.description.clone(),
            address: draft.address.clone(),
            listing_type: draft.listing_type,
            bedrooms: number("bedrooms", &draft.bedrooms)?,
            bathrooms: number("bathrooms", &draft.bathrooms)?,
            regular_price: number("regularPrice", &draft.regular_price)?,
            discount_price,
            offer: draft.offer,
            parking: draft.parking,
            furnished: draft.furnished,
            user_ref: user_ref.to_string(),
        })
    }
}

/// Body of a create response
///
/// The backend signals failure through `success`, not only the HTTP status.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateListingResponse {
    /// Whether the listing was created; absent counts as false
    #[serde(default)]
    pub success: bool,
    /// Identifier of the created listing
    #[serde(rename = "_id")]
    pub id: Option<String>,
    /// Error message on failure
    pub message: Option<String>,
}

impl CreateListingResponse {
    /// Interpret the response as a listing id or a submission failure
    pub fn into_listing_id(self) -> Result<String> {
        if !self.success {
            return Err(Error::SubmissionFailed(
                self.message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
            ));
        }
        self.id.filter(|id| !id.is_empty()).ok_or_else(|| {
            Error::SubmissionFailed("listing service response has no listing id".to_string())
        })
    }
}

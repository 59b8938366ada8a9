//! Draft store
//!
//! Owns the [`ListingDraft`] for an editing session. Every mutation goes
//! through here; none of them validate, so the draft may pass through
//! invalid intermediate states while the user types.

use crate::error::{Error, Result};
use crate::types::{ListingDraft, ListingType, MAX_IMAGES};
use tracing::debug;

/// Boolean checkbox fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    /// Discounted price applies
    Offer,
    /// Parking included
    Parking,
    /// Furnished
    Furnished,
}

/// Free-text and numeric input fields, stored verbatim
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    /// Listing title
    Name,
    /// Description
    Description,
    /// Street address
    Address,
    /// Bedroom count
    Bedrooms,
    /// Bathroom count
    Bathrooms,
    /// Regular price
    RegularPrice,
    /// Discounted price
    DiscountPrice,
}

impl TextField {
    /// Form id of the field
    pub const fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Address => "address",
            Self::Bedrooms => "bedrooms",
            Self::Bathrooms => "bathrooms",
            Self::RegularPrice => "regularPrice",
            Self::DiscountPrice => "discountPrice",
        }
    }
}

/// A single edit to the draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    /// Select sale or rent
    Type(ListingType),
    /// Set a checkbox to its checked state
    Flag(Flag, bool),
    /// Replace a text field's raw value
    Text(TextField, String),
}

impl FieldChange {
    /// Build a change from a form event: the control's id, its value and its
    /// checked state
    ///
    /// The "sale" and "rent" checkboxes both select the listing type, whatever
    /// their checked state.
    pub fn from_input(id: &str, value: &str, checked: bool) -> Result<Self> {
        let change = match id {
            "sale" => Self::Type(ListingType::Sale),
            "rent" => Self::Type(ListingType::Rent),
            "offer" => Self::Flag(Flag::Offer, checked),
            "parking" => Self::Flag(Flag::Parking, checked),
            "furnished" => Self::Flag(Flag::Furnished, checked),
            "name" => Self::Text(TextField::Name, value.to_string()),
            "description" => Self::Text(TextField::Description, value.to_string()),
            "address" => Self::Text(TextField::Address, value.to_string()),
            "bedrooms" => Self::Text(TextField::Bedrooms, value.to_string()),
            "bathrooms" => Self::Text(TextField::Bathrooms, value.to_string()),
            "regularPrice" => Self::Text(TextField::RegularPrice, value.to_string()),
            "discountPrice" => Self::Text(TextField::DiscountPrice, value.to_string()),
            other => return Err(Error::UnknownField(other.to_string())),
        };
        Ok(change)
    }
}

/// Exclusive owner of the listing draft
#[derive(Debug, Clone, Default)]
pub struct DraftStore {
    draft: ListingDraft,
}

impl DraftStore {
    /// Start from a blank form
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing draft
    pub const fn from_draft(draft: ListingDraft) -> Self {
        Self { draft }
    }

    /// Current draft state
    pub const fn draft(&self) -> &ListingDraft {
        &self.draft
    }

    /// Number of images currently attached
    pub fn image_count(&self) -> usize {
        self.draft.image_urls.len()
    }

    /// Apply a field edit
    pub fn set_field(&mut self, change: FieldChange) -> &ListingDraft {
        let draft = &mut self.draft;
        match change {
            FieldChange::Type(listing_type) => draft.listing_type = listing_type,
            FieldChange::Flag(flag, checked) => match flag {
                Flag::Offer => draft.offer = checked,
                Flag::Parking => draft.parking = checked,
                Flag::Furnished => draft.furnished = checked,
            },
            FieldChange::Text(field, value) => {
                let slot = match field {
                    TextField::Name => &mut draft.name,
                    TextField::Description => &mut draft.description,
                    TextField::Address => &mut draft.address,
                    TextField::Bedrooms => &mut draft.bedrooms,
                    TextField::Bathrooms => &mut draft.bathrooms,
                    TextField::RegularPrice => &mut draft.regular_price,
                    TextField::DiscountPrice => &mut draft.discount_price,
                };
                *slot = value;
            }
        }
        &self.draft
    }

    /// Append uploaded image URLs in order
    ///
    /// Does nothing if the result would exceed [`MAX_IMAGES`].
    pub fn append_images(&mut self, urls: Vec<String>) -> &ListingDraft {
        if self.draft.image_urls.len() + urls.len() > MAX_IMAGES {
            debug!(
                current = self.draft.image_urls.len(),
                incoming = urls.len(),
                "ignoring image merge past limit"
            );
            return &self.draft;
        }
        self.draft.image_urls.extend(urls);
        &self.draft
    }

    /// Remove the image at `index`; out-of-range indices are ignored
    pub fn remove_image_at(&mut self, index: usize) -> &ListingDraft {
        if index < self.draft.image_urls.len() {
            self.draft.image_urls.remove(index);
        }
        &self.draft
    }
}

//! Core types for estate-lister

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Maximum number of images a listing may carry
pub const MAX_IMAGES: usize = 6;

/// Whether the property is offered for sale or for rent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    /// Property is for sale
    Sale,
    /// Property is for rent
    #[default]
    Rent,
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sale => write!(f, "sale"),
            Self::Rent => write!(f, "rent"),
        }
    }
}

/// In-progress listing being authored
///
/// Numeric fields hold the raw text typed into the form. They are coerced
/// to integers only when the draft is validated or submitted, so partially
/// typed values (including empty strings) are legal while editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingDraft {
    /// Uploaded image URLs; the first one is the cover image
    pub image_urls: Vec<String>,
    /// Listing title
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Street address
    pub address: String,
    /// Sale or rent
    pub listing_type: ListingType,
    /// Raw bedroom count
    pub bedrooms: String,
    /// Raw bathroom count
    pub bathrooms: String,
    /// Raw regular price
    pub regular_price: String,
    /// Raw discounted price, only meaningful with `offer`
    pub discount_price: String,
    /// A discounted price applies
    pub offer: bool,
    /// Parking spot included
    pub parking: bool,
    /// Property is furnished
    pub furnished: bool,
}

impl Default for ListingDraft {
    fn default() -> Self {
        Self {
            image_urls: Vec::new(),
            name: String::new(),
            description: String::new(),
            address: String::new(),
            listing_type: ListingType::Rent,
            bedrooms: "1".to_string(),
            bathrooms: "1".to_string(),
            regular_price: "50".to_string(),
            discount_price: "0".to_string(),
            offer: false,
            parking: false,
            furnished: false,
        }
    }
}

impl ListingDraft {
    /// The cover image, if any image has been uploaded
    pub fn cover_image(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }
}

/// An image selected for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// File name sent with the multipart part
    pub name: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
    /// MIME type guessed from the extension
    pub mime: Option<&'static str>,
}

impl ImageFile {
    /// Create an in-memory image file
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime = guess_mime(&name);
        Self { name, bytes, mime }
    }

    /// Read an image from disk
    pub async fn from_path(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map_or_else(|| "image".to_string(), |n| n.to_string_lossy().into_owned());
        Ok(Self::new(name, bytes))
    }
}

fn guess_mime(name: &str) -> Option<&'static str> {
    let ext = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "avif" => Some("image/avif"),
        _ => None,
    }
}

/// Detail view of a created listing, where the editor navigates on success
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRoute {
    /// Identifier assigned by the backend
    pub listing_id: String,
}

impl ListingRoute {
    /// Route for the given listing id
    pub fn new(listing_id: impl Into<String>) -> Self {
        Self {
            listing_id: listing_id.into(),
        }
    }

    /// Path of the detail view, e.g. `/listing/abc123`
    pub fn path(&self) -> String {
        format!("/listing/{}", urlencoding::encode(&self.listing_id))
    }
}

impl fmt::Display for ListingRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

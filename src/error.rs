//! Error types for estate-lister

use thiserror::Error;

/// Message shown when a batch would push the draft past the image limit
pub const MSG_BATCH_TOO_LARGE: &str = "You can only upload up to 6 images";
/// Message shown when any upload of a batch fails
pub const MSG_UPLOAD_FAILED: &str = "Image upload failed. Please try again.";
/// Message shown when a draft is submitted without images
pub const MSG_MISSING_IMAGES: &str = "You must upload at least one image";
/// Message shown when the discount is not below the regular price
pub const MSG_PRICE_INVERSION: &str = "Discount price must be lower than regular price";

/// Pre-submit validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The draft has no images
    #[error("{}", MSG_MISSING_IMAGES)]
    MissingImages,

    /// An offer is active and the discount exceeds the regular price
    #[error("{}", MSG_PRICE_INVERSION)]
    PriceInversion,

    /// A single field violates its constraint
    #[error("{field}: {reason}")]
    InvalidField {
        /// Form id of the offending field
        field: &'static str,
        /// Human-readable constraint description
        reason: String,
    },
}

/// Errors that can occur in estate-lister
#[derive(Error, Debug)]
pub enum Error {
    /// Selected files would exceed the image limit (or none were selected)
    #[error("{}", MSG_BATCH_TOO_LARGE)]
    BatchTooLarge,

    /// A single upload call failed
    #[error("upload failed: {0}")]
    UploadFailed(String),

    /// At least one upload of a batch failed
    #[error("{}", MSG_UPLOAD_FAILED)]
    BatchUploadFailed,

    /// Another batch is still uploading
    #[error("an upload is already in progress")]
    UploadInProgress,

    /// Draft failed pre-submit validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend rejected the listing or could not be reached
    #[error("{0}")]
    SubmissionFailed(String),

    /// Form event for a field the draft does not have
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// Authentication error
    #[error("authentication error: {0}")]
    Auth(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file parse error
    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Short message suitable for display next to the form control that
    /// triggered the failing action
    pub fn user_message(&self) -> String {
        match self {
            Self::UploadFailed(_) | Self::BatchUploadFailed => MSG_UPLOAD_FAILED.to_string(),
            Self::SubmissionFailed(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for estate-lister operations
pub type Result<T> = std::result::Result<T, Error>;

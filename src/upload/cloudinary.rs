//! Cloudinary-style unsigned upload endpoint

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::ImageFile;
use crate::upload::ImageUploader;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Uploader posting multipart forms with a fixed upload preset
pub struct CloudinaryUploader {
    client: Client,
    endpoint: String,
    preset: String,
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
}

impl CloudinaryUploader {
    /// Create an uploader for `endpoint` using `preset`
    pub fn new(endpoint: String, preset: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint,
            preset,
        })
    }

    /// Create an uploader from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.upload_url.clone(),
            config.upload_preset.clone(),
            config.timeout(),
        )
    }
}

#[async_trait]
impl ImageUploader for CloudinaryUploader {
    async fn upload(&self, file: &ImageFile) -> Result<String> {
        debug!(file = %file.name, bytes = file.bytes.len(), "uploading image");

        let mut part = Part::bytes(file.bytes.clone()).file_name(file.name.clone());
        if let Some(mime) = file.mime {
            part = part
                .mime_str(mime)
                .map_err(|e| Error::UploadFailed(e.to_string()))?;
        }
        let form = Form::new()
            .part("file", part)
            .text("upload_preset", self.preset.clone());

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::UploadFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!(file = %file.name, %status, "upload rejected");
            return Err(Error::UploadFailed(format!("storage returned {status}")));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| Error::UploadFailed(format!("invalid upload response: {e}")))?;

        let url = body
            .secure_url
            .ok_or_else(|| Error::UploadFailed("upload response has no secure_url".to_string()))?;
        debug!(file = %file.name, url = %url, "uploaded image");
        Ok(url)
    }
}

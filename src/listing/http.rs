//! Listing backend over HTTP

use crate::config::Config;
use crate::error::{Error, Result};
use crate::listing::{CreateListingResponse, ListingPayload, ListingService};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Path of the create endpoint relative to the API base URL
pub const CREATE_PATH: &str = "/api/listing/create";

/// Listing service using reqwest
pub struct HttpListingService {
    client: Client,
    create_url: String,
}

impl HttpListingService {
    /// Create a service posting to `create_url`
    pub fn new(create_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, create_url })
    }

    /// Create a service from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_url(CREATE_PATH)?.to_string(), config.timeout())
    }
}

#[async_trait]
impl ListingService for HttpListingService {
    async fn create_listing(&self, payload: &ListingPayload) -> Result<String> {
        debug!(url = %self.create_url, images = payload.image_urls.len(), "creating listing");

        let response = self
            .client
            .post(&self.create_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| Error::SubmissionFailed(e.to_string()))?;

        // Rejections arrive with error statuses too; the body decides
        let status = response.status();
        let body: CreateListingResponse = response.json().await.map_err(|e| {
            Error::SubmissionFailed(format!("invalid response from listing service ({status}): {e}"))
        })?;

        let id = body.into_listing_id()?;
        debug!(listing_id = %id, "created listing");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ListingDraft, ListingType};
    use mockito::Matcher;
    use serde_json::json;

    fn payload() -> ListingPayload {
        let draft = ListingDraft {
            image_urls: vec!["https://cdn.test/a.jpg".to_string()],
            name: "Harbour view loft".to_string(),
            description: "Top floor".to_string(),
            address: "9 Quay Road".to_string(),
            listing_type: ListingType::Rent,
            ..ListingDraft::default()
        };
        ListingPayload::from_draft(&draft, "user-42").unwrap()
    }

    fn service(server: &mockito::Server) -> HttpListingService {
        HttpListingService::new(
            format!("{}{}", server.url(), CREATE_PATH),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_sends_payload_with_user_ref() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", CREATE_PATH)
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(json!({
                "userRef": "user-42",
                "type": "rent",
                "imageUrls": ["https://cdn.test/a.jpg"],
                "regularPrice": 50
            })))
            .with_status(201)
            .with_body(r#"{"success":true,"_id":"abc123"}"#)
            .create_async()
            .await;

        let id = service(&server).create_listing(&payload()).await.unwrap();
        assert_eq!(id, "abc123");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_rejection_carries_backend_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", CREATE_PATH)
            .with_status(409)
            .with_body(r#"{"success":false,"statusCode":409,"message":"duplicate address"}"#)
            .create_async()
            .await;

        let err = service(&server).create_listing(&payload()).await.unwrap_err();
        assert!(matches!(err, Error::SubmissionFailed(ref m) if m == "duplicate address"));
    }

    #[tokio::test]
    async fn test_success_flag_false_with_ok_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", CREATE_PATH)
            .with_status(200)
            .with_body(r#"{"success":false,"message":"not allowed"}"#)
            .create_async()
            .await;

        let err = service(&server).create_listing(&payload()).await.unwrap_err();
        assert_eq!(err.user_message(), "not allowed");
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        let service =
            HttpListingService::new("http://127.0.0.1:9/api/listing/create".to_string(), Duration::from_secs(2))
                .unwrap();
        let err = service.create_listing(&payload()).await.unwrap_err();
        assert!(matches!(err, Error::SubmissionFailed(_)));
    }
}

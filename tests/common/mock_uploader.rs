//! Test doubles for the single-file uploader

use async_trait::async_trait;
use estate_lister::error::{Error, Result};
use estate_lister::types::ImageFile;
use estate_lister::upload::ImageUploader;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Notify;

/// Uploader returning `https://cdn.test/<file name>`, with optional per-file
/// delays and failures
#[derive(Default)]
pub struct MockUploader {
    delays: HashMap<String, Duration>,
    failing: HashSet<String>,
    calls: AtomicUsize,
    uploaded: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl MockUploader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay the named file's upload
    pub fn with_delay(mut self, file: &str, millis: u64) -> Self {
        self.delays
            .insert(file.to_string(), Duration::from_millis(millis));
        self
    }

    /// Fail the named file's upload
    pub fn failing(mut self, file: &str) -> Self {
        self.failing.insert(file.to_string());
        self
    }

    /// Number of upload calls made
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Files whose upload completed successfully, in completion order
    pub fn completed(&self) -> Vec<String> {
        self.uploaded.lock().unwrap().clone()
    }

    pub fn url_for(file: &str) -> String {
        format!("https://cdn.test/{file}")
    }
}

#[async_trait]
impl ImageUploader for MockUploader {
    async fn upload(&self, file: &ImageFile) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(&file.name) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.contains(&file.name) {
            return Err(Error::UploadFailed("storage returned 500".to_string()));
        }
        self.uploaded.lock().unwrap().push(file.name.clone());
        Ok(Self::url_for(&file.name))
    }
}

/// Uploader that blocks until released, to observe an in-flight batch
#[derive(Default)]
pub struct GatedUploader {
    pub gate: Notify,
}

#[async_trait]
impl ImageUploader for GatedUploader {
    async fn upload(&self, file: &ImageFile) -> Result<String> {
        self.gate.notified().await;
        Ok(MockUploader::url_for(&file.name))
    }
}

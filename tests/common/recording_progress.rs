//! Progress callback that records every event

use async_trait::async_trait;
use estate_lister::error::Error;
use estate_lister::submit::{Phase, ProgressCallback, UploadStatus};
use estate_lister::types::ListingRoute;
use std::sync::Mutex;

/// A recorded progress event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Phase(Phase),
    Upload(String, UploadStatus),
    Navigate(String),
    Error(String),
    Message(String),
}

#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<Event>>,
}

#[allow(dead_code)]
impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn phases(&self) -> Vec<Phase> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Phase(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Navigate(path) => Some(path),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_phase(&self, phase: Phase) {
        self.push(Event::Phase(phase));
    }

    async fn on_upload(&self, file: &str, status: UploadStatus) {
        self.push(Event::Upload(file.to_string(), status));
    }

    async fn on_navigate(&self, route: &ListingRoute) {
        self.push(Event::Navigate(route.path()));
    }

    async fn on_error(&self, error: &Error) {
        self.push(Event::Error(error.user_message()));
    }

    async fn on_message(&self, message: &str) {
        self.push(Event::Message(message.to_string()));
    }
}

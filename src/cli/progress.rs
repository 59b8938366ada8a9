//! CLI progress callback

use crate::cli::style::{Stylize, check, cross, spinner_style};
use async_trait::async_trait;
use estate_lister::error::Error;
use estate_lister::submit::{Phase, ProgressCallback, UploadStatus};
use estate_lister::types::ListingRoute;
use indicatif::ProgressBar;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use url::Url;

/// CLI progress callback that prints to the terminal
///
/// Upload events are printed above a spinner while a batch is running.
pub struct CliProgress {
    api_base: Url,
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliProgress {
    /// Create progress output; listing links are resolved against `api_base`
    pub fn new(api_base: Url) -> Self {
        Self {
            api_base,
            spinner: Mutex::new(None),
        }
    }

    fn spinner(&self) -> MutexGuard<'_, Option<ProgressBar>> {
        self.spinner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Show a spinner with `message` until [`finish_spinner`](Self::finish_spinner)
    pub fn start_spinner(&self, message: String) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(80));
        if let Some(old) = self.spinner().replace(spinner) {
            old.finish_and_clear();
        }
    }

    /// Remove the spinner
    pub fn finish_spinner(&self) {
        if let Some(spinner) = self.spinner().take() {
            spinner.finish_and_clear();
        }
    }

    fn line(&self, text: &str) {
        match self.spinner().as_ref() {
            Some(spinner) => spinner.println(text),
            None => anstream::println!("{text}"),
        }
    }

    fn link(&self, route: &ListingRoute) -> String {
        let url = self
            .api_base
            .join(&route.path())
            .map_or_else(|_| route.path(), |u| u.to_string());
        if supports_hyperlinks::on(supports_hyperlinks::Stream::Stdout) {
            terminal_link::Link::new(&url, &url).to_string()
        } else {
            url
        }
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::Validating | Phase::Submitting => self.line(&format!("{phase}...")),
            Phase::Success | Phase::Failed => {}
        }
    }

    async fn on_upload(&self, file: &str, status: UploadStatus) {
        match &status {
            UploadStatus::Started => {}
            UploadStatus::Success => self.line(&format!("  {} {}", check(), file.accent())),
            UploadStatus::Failed(_) => self.line(&format!("  {} {file}: {status}", cross())),
        }
    }

    async fn on_navigate(&self, route: &ListingRoute) {
        self.line(&format!(
            "{} Created listing {}",
            check(),
            route.listing_id.accent()
        ));
        self.line(&format!("  {}", self.link(route)));
    }

    async fn on_error(&self, error: &Error) {
        anstream::eprintln!("{} {}", "Error:".failure(), error.user_message());
    }

    async fn on_message(&self, message: &str) {
        self.line(message);
    }
}

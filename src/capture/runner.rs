use anyhow::{Context, Result};
use fantoccini::{Client, Locator};
use sanitize_filename::sanitize;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::time::sleep;
use tracing::{debug, info, trace, warn};
use url::Url;

use crate::capture::client;
use crate::capture::config::{CaptureConfig, DEFAULT_WEBDRIVER_URL};
use crate::error::BaselineError;

/// Drives one browser session through every (page, breakpoint) pair and
/// writes one baseline PNG per pair.
pub struct CaptureRunner {
    config: CaptureConfig,
}

impl CaptureRunner {
    pub fn new(config: CaptureConfig) -> Self {
        Self { config }
    }

    /// Runs the full capture sequence and returns the written file paths.
    ///
    /// The first failed navigation, resize, or capture aborts the remaining
    /// iterations; the browser session is released on every exit path.
    pub async fn run(&self) -> Result<Vec<PathBuf>, BaselineError> {
        self.run_inner().await.map_err(BaselineError::CaptureFailure)
    }

    async fn run_inner(&self) -> Result<Vec<PathBuf>> {
        prepare_output_dir(&self.config.output_dir)?;

        let webdriver_url = self
            .config
            .webdriver_url
            .as_deref()
            .unwrap_or(DEFAULT_WEBDRIVER_URL);
        let client = client::create_client(webdriver_url, self.config.headless).await?;

        let result = self.capture_all(&client).await;

        // The session must be torn down even when a capture step failed
        // partway through, or the browser process leaks.
        if let Err(e) = client.close().await {
            warn!("Failed to close WebDriver session: {}", e);
        }

        result
    }

    async fn capture_all(&self, client: &Client) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.config.expected_captures());

        for page in &self.config.pages {
            let url = page_url(&self.config.base_url, &page.path)?;
            info!("Capturing {} at {}", page.label, url);

            client
                .goto(&url)
                .await
                .with_context(|| format!("Failed to navigate to {}", url))?;

            client
                .wait()
                .forever()
                .for_element(Locator::Css("body"))
                .await
                .with_context(|| format!("Failed to wait for page to load: {}", url))?;

            debug!("Waiting {:?} for page content to render", self.config.page_settle);
            sleep(self.config.page_settle).await;

            for breakpoint in &self.config.breakpoints {
                client
                    .set_window_size(breakpoint.width, breakpoint.height)
                    .await
                    .with_context(|| {
                        format!(
                            "Failed to resize viewport to {}x{} ({})",
                            breakpoint.width, breakpoint.height, breakpoint.label
                        )
                    })?;

                sleep(self.config.resize_settle).await;

                trace!("Capturing screenshot at {}", breakpoint.label);
                let screenshot_data = client.screenshot().await.with_context(|| {
                    format!("Failed to capture {} at {}", page.label, breakpoint.label)
                })?;

                let file_name = capture_file_name(&page.label, &breakpoint.label);
                let file_path = self.config.output_dir.join(&file_name);
                fs::write(&file_path, &screenshot_data).with_context(|| {
                    format!("Failed to write screenshot to {}", file_path.display())
                })?;

                info!("  {}: {}", breakpoint.label, file_name);
                written.push(file_path);
            }
        }

        Ok(written)
    }
}

/// Creates the output directory, including missing parents. Idempotent.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))
}

/// Deterministic file name for one (page, breakpoint) pair. Re-running a
/// capture overwrites the previous file of the same name.
pub fn capture_file_name(page_label: &str, breakpoint_label: &str) -> String {
    format!("{}_{}.png", sanitize(page_label), sanitize(breakpoint_label))
}

/// Joins the base address and a page's path segment.
pub fn page_url(base_url: &str, path: &str) -> Result<String> {
    let mut base = Url::parse(base_url)
        .with_context(|| format!("Invalid base URL: {}", base_url))?;
    if !base.path().ends_with('/') {
        base.set_path(&format!("{}/", base.path()));
    }
    let url = base
        .join(path.trim_start_matches('/'))
        .with_context(|| format!("Invalid page path: {}", path))?;
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_dir(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("baseline_capture_{}_{}_{}", name, std::process::id(), nanos))
    }

    #[test]
    fn file_names_follow_page_breakpoint_convention() {
        assert_eq!(capture_file_name("leaderboard", "360px"), "leaderboard_360px.png");
        assert_eq!(capture_file_name("winners", "1440px"), "winners_1440px.png");
    }

    #[test]
    fn file_names_are_sanitized() {
        let name = capture_file_name("win/ners", "360px");
        assert!(!name.contains('/'));
        assert!(name.ends_with("_360px.png"));
    }

    #[test]
    fn page_url_joins_base_and_path() {
        assert_eq!(
            page_url("http://localhost:8000", "index.html").unwrap(),
            "http://localhost:8000/index.html"
        );
        assert_eq!(
            page_url("http://localhost:8000/", "winners.html").unwrap(),
            "http://localhost:8000/winners.html"
        );
        assert_eq!(
            page_url("http://localhost:8000", "/index.html").unwrap(),
            "http://localhost:8000/index.html"
        );
    }

    #[test]
    fn page_url_rejects_invalid_base() {
        assert!(page_url("not a url", "index.html").is_err());
    }

    #[test]
    fn output_dir_is_created_recursively_and_idempotently() {
        let dir = scratch_dir("outdir").join("screenshots").join("baseline");
        assert!(!dir.exists());

        prepare_output_dir(&dir).unwrap();
        assert!(dir.is_dir());

        // Second call on an existing directory must not fail
        prepare_output_dir(&dir).unwrap();
        assert!(dir.is_dir());

        fs::remove_dir_all(dir.parent().unwrap().parent().unwrap()).unwrap();
    }
}

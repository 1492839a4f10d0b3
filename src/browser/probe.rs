//! Timed headless-browser page loads
//!
//! The probe launches a fresh headless session per call, navigates, waits a
//! fixed settle interval for script-driven rendering, and reports how many
//! elements matched a diagnostic selector. The timer covers navigation
//! through the element query; process launch and profile setup are excluded.

use crate::browser::session::SessionResources;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptions};
use std::ffi::OsStr;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

/// Outcome of one timed browser trial
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrowserFetch {
    /// Wall-clock seconds from just before navigation to just after the
    /// element query, settle wait included
    pub seconds: f64,
    /// Number of elements matching the diagnostic selector
    pub matched_elements: usize,
}

/// Browser probe trait for abstraction and testing
#[async_trait]
pub trait BrowserProbe: Send + Sync {
    /// Load `url` in an isolated headless session and time it
    async fn fetch(&self, url: &str) -> Result<BrowserFetch>;
}

/// Production probe driving a headless Chrome/Chromium binary
#[derive(Debug, Clone)]
pub struct ChromeProbe {
    binary: PathBuf,
    settle: Duration,
    selector: String,
    nav_timeout: Duration,
}

impl ChromeProbe {
    pub fn new(binary: PathBuf, settle: Duration, selector: String, nav_timeout: Duration) -> Self {
        Self {
            binary,
            settle,
            selector,
            nav_timeout,
        }
    }

    /// Blocking fetch; runs on a worker thread via [`BrowserProbe::fetch`].
    ///
    /// The session resources are declared before the browser so the process
    /// is torn down before the profile directory is removed, on every exit
    /// path including early error returns.
    fn fetch_blocking(&self, url: &str) -> Result<BrowserFetch> {
        let session = SessionResources::allocate()?;

        let options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(false)
            .path(Some(self.binary.clone()))
            .port(Some(session.port()))
            .user_data_dir(Some(session.profile_path().to_path_buf()))
            .args(vec![
                OsStr::new("--disable-gpu"),
                OsStr::new("--disable-dev-shm-usage"),
                OsStr::new("--disable-features=MediaFoundationVideoEncodeAccelerator"),
            ])
            .idle_browser_timeout(self.nav_timeout)
            .build()
            .map_err(|e| AppError::automation(format!("invalid launch options: {}", e)))?;

        let browser = Browser::new(options)
            .map_err(|e| AppError::automation(format!("failed to launch browser: {}", e)))?;
        let tab = browser
            .new_tab()
            .map_err(|e| AppError::automation(format!("failed to open tab: {}", e)))?;
        tab.set_default_timeout(self.nav_timeout);

        let started = Instant::now();
        tab.navigate_to(url)
            .map_err(|e| AppError::automation(format!("navigation to {} failed: {}", url, e)))?;
        tab.wait_until_navigated()
            .map_err(|e| AppError::automation(format!("navigation to {} did not complete: {}", url, e)))?;

        // Allow client-side rendering to finish
        thread::sleep(self.settle);

        // Zero matches is a valid diagnostic result, not an error
        let matched_elements = tab
            .find_elements(&self.selector)
            .map(|elements| elements.len())
            .unwrap_or(0);
        let seconds = started.elapsed().as_secs_f64();

        Ok(BrowserFetch {
            seconds,
            matched_elements,
        })
    }
}

#[async_trait]
impl BrowserProbe for ChromeProbe {
    async fn fetch(&self, url: &str) -> Result<BrowserFetch> {
        let probe = self.clone();
        let url = url.to_string();

        tokio::task::spawn_blocking(move || probe.fetch_blocking(&url))
            .await
            .map_err(|e| AppError::internal(format!("browser fetch task failed: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_construction() {
        let probe = ChromeProbe::new(
            PathBuf::from("/usr/bin/google-chrome"),
            Duration::from_secs(5),
            ".job-card-list__title".to_string(),
            Duration::from_secs(30),
        );
        assert_eq!(probe.settle, Duration::from_secs(5));
        assert_eq!(probe.selector, ".job-card-list__title");
    }

    #[tokio::test]
    async fn test_launch_failure_leaves_no_profile_behind() {
        let probe = ChromeProbe::new(
            PathBuf::from("/definitely/not/a/browser"),
            Duration::from_millis(10),
            ".anything".to_string(),
            Duration::from_secs(2),
        );

        let before = profile_dirs();
        let result = probe.fetch("https://example.com").await;
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().category(), "AUTOMATION");

        // Any directory the failed fetch created must be gone again. Short
        // grace period so concurrently running session tests cannot leak
        // their own momentarily-live directories into the snapshot.
        let leftovers: Vec<_> = profile_dirs().difference(&before).cloned().collect();
        if !leftovers.is_empty() {
            std::thread::sleep(Duration::from_millis(200));
            for dir in leftovers {
                assert!(!dir.exists(), "profile directory left behind: {:?}", dir);
            }
        }
    }

    /// Session profile directories currently present in the temp root
    fn profile_dirs() -> std::collections::HashSet<PathBuf> {
        let tmp = std::env::temp_dir();
        std::fs::read_dir(tmp)
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .filter(|e| {
                        e.file_name()
                            .to_string_lossy()
                            .starts_with("fetchcmp-profile-")
                    })
                    .map(|e| e.path())
                    .collect()
            })
            .unwrap_or_default()
    }
}

//! Fetch Comparator
//!
//! A benchmarking harness that compares the latency of fetching data with a
//! plain HTTP client against driving a headless browser to load a
//! JavaScript-heavy page, then renders the collected timings as a
//! box-and-whisker chart.

pub mod app;
pub mod browser;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod report;
pub mod runner;
pub mod stats;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use models::{DurationSample, FetchMethod, RunResults, SampleGroup, Target, TrialFailure};
pub use stats::SummaryStatistics;

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Default configuration values
pub mod defaults {
    use std::time::Duration;

    pub const DEFAULT_TRIAL_COUNT: u32 = 5;
    pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);
    pub const DEFAULT_SETTLE_SECONDS: f64 = 5.0;
    pub const DEFAULT_NAV_TIMEOUT: Duration = Duration::from_secs(30);
    pub const DEFAULT_OUTPUT_PATH: &str = "comparison_boxplot.png";
    pub const DEFAULT_SELECTOR: &str = ".job-card-list__title";
    pub const DEFAULT_TARGETS: &[(&str, &str)] = &[
        ("API", "https://catfact.ninja/fact"),
        ("Text page", "https://example.com"),
    ];
    pub const DEFAULT_ENABLE_COLOR: bool = true;
}

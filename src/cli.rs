//! Command-line interface

use clap::{ArgAction, Parser};

/// Fetch Comparator - compares HTTP client latency against headless-browser page loads
#[derive(Parser, Debug, Clone)]
#[command(name = "fetch-comparator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Number of trials per target
    #[arg(short, long, env = "TRIAL_COUNT", default_value_t = crate::defaults::DEFAULT_TRIAL_COUNT)]
    pub count: u32,

    /// Benchmark target as LABEL=URL (can be used multiple times)
    #[arg(long = "target", value_name = "LABEL=URL", action = ArgAction::Append)]
    pub targets: Vec<String>,

    /// Settle wait after navigation, in seconds
    #[arg(long, env = "SETTLE_SECONDS", allow_negative_numbers = true, default_value_t = crate::defaults::DEFAULT_SETTLE_SECONDS)]
    pub settle: f64,

    /// CSS selector counted after the settle wait (diagnostic only)
    #[arg(long, env = "ELEMENT_SELECTOR", default_value = crate::defaults::DEFAULT_SELECTOR)]
    pub selector: String,

    /// HTTP request timeout in seconds
    #[arg(short, long, env = "HTTP_TIMEOUT_SECONDS", default_value_t = crate::defaults::DEFAULT_HTTP_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Browser navigation timeout in seconds
    #[arg(long, env = "NAV_TIMEOUT_SECONDS", default_value_t = crate::defaults::DEFAULT_NAV_TIMEOUT.as_secs())]
    pub nav_timeout: u64,

    /// Output path for the box-and-whisker chart
    #[arg(short, long, env = "BOXPLOT_PATH", default_value = crate::defaults::DEFAULT_OUTPUT_PATH)]
    pub output: std::path::PathBuf,

    /// Explicit browser binary path (skips location probing)
    #[arg(long, env = "BROWSER_BINARY")]
    pub browser: Option<std::path::PathBuf>,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        if self.count == 0 {
            return Err("Trial count must be at least 1".to_string());
        }

        if self.settle < 0.0 || !self.settle.is_finite() {
            return Err("Settle duration must be a non-negative number of seconds".to_string());
        }

        if self.timeout == 0 {
            return Err("HTTP timeout must be at least 1 second".to_string());
        }

        if self.nav_timeout == 0 {
            return Err("Navigation timeout must be at least 1 second".to_string());
        }

        Ok(())
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        if self.color {
            true
        } else if self.no_color {
            false
        } else {
            supports_color()
        }
    }
}

/// Detect whether the terminal supports colored output
fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::IsTerminal::is_terminal(&std::io::stdout())
}

//! Configuration management
//!
//! CLI arguments (with env fallbacks picked up by clap after `.env` loading)
//! are merged into a validated [`Config`] that the rest of the application
//! consumes.

use crate::cli::Cli;
use crate::error::{AppError, Result};
use crate::models::Target;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Validated application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Benchmark targets, in execution order
    pub targets: Vec<Target>,
    /// Trials per (method, target) pair
    pub trial_count: u32,
    /// HTTP request timeout
    pub http_timeout: Duration,
    /// Fixed wait after browser navigation
    pub settle: Duration,
    /// Diagnostic CSS selector counted after the settle wait
    pub selector: String,
    /// Browser navigation timeout
    pub nav_timeout: Duration,
    /// Chart output path, overwritten each run
    pub output_path: PathBuf,
    /// Explicit browser binary override
    pub browser_binary: Option<PathBuf>,
    pub debug: bool,
    pub verbose: bool,
    pub enable_color: bool,
}

impl Config {
    /// Validate cross-field constraints
    pub fn validate(&self) -> Result<()> {
        if self.targets.is_empty() {
            return Err(AppError::config("at least one target is required"));
        }
        for target in &self.targets {
            let url = Url::parse(&target.url)?;
            match url.scheme() {
                "http" | "https" => {}
                other => {
                    return Err(AppError::config(format!(
                        "target '{}' uses unsupported scheme '{}'",
                        target.label, other
                    )))
                }
            }
        }
        if self.selector.trim().is_empty() {
            return Err(AppError::config("element selector must not be empty"));
        }
        Ok(())
    }
}

/// Load `.env` from the current directory if present.
///
/// Must run before CLI parsing so clap's env fallbacks see the values.
pub fn load_env_file() {
    if Path::new(".env").exists() {
        let _ = dotenv::from_filename(".env");
    }
}

/// Build the complete configuration from parsed CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    cli.validate().map_err(AppError::config)?;

    let targets = if cli.targets.is_empty() {
        crate::defaults::DEFAULT_TARGETS
            .iter()
            .map(|(label, url)| Target::new(*label, *url))
            .collect()
    } else {
        cli.targets
            .iter()
            .map(|raw| parse_target(raw))
            .collect::<Result<Vec<_>>>()?
    };

    let enable_color = cli.use_colors();
    let config = Config {
        targets,
        trial_count: cli.count,
        http_timeout: Duration::from_secs(cli.timeout),
        settle: Duration::from_secs_f64(cli.settle),
        selector: cli.selector,
        nav_timeout: Duration::from_secs(cli.nav_timeout),
        output_path: cli.output,
        browser_binary: cli.browser,
        debug: cli.debug,
        verbose: cli.verbose,
        enable_color,
    };

    config.validate()?;
    Ok(config)
}

/// Parse a `LABEL=URL` target definition
fn parse_target(raw: &str) -> Result<Target> {
    match raw.split_once('=') {
        Some((label, url)) if !label.trim().is_empty() && !url.trim().is_empty() => {
            Ok(Target::new(label.trim(), url.trim()))
        }
        _ => Err(AppError::parse(format!(
            "invalid target '{}': expected LABEL=URL",
            raw
        ))),
    }
}

/// Human-readable configuration summary for debug output
pub fn display_config_summary(config: &Config) -> String {
    let mut summary = String::new();
    summary.push_str("Configuration:\n");
    for target in &config.targets {
        summary.push_str(&format!("  Target: {} ({})\n", target.label, target.url));
    }
    summary.push_str(&format!("  Trials per target: {}\n", config.trial_count));
    summary.push_str(&format!(
        "  HTTP timeout: {}s\n",
        config.http_timeout.as_secs()
    ));
    summary.push_str(&format!(
        "  Settle wait: {:.1}s\n",
        config.settle.as_secs_f64()
    ));
    summary.push_str(&format!("  Element selector: {}\n", config.selector));
    summary.push_str(&format!(
        "  Navigation timeout: {}s\n",
        config.nav_timeout.as_secs()
    ));
    summary.push_str(&format!("  Chart output: {}\n", config.output_path.display()));
    if let Some(ref binary) = config.browser_binary {
        summary.push_str(&format!("  Browser binary: {}\n", binary.display()));
    }
    summary
}

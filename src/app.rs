//! Main application orchestration and execution

use crate::{
    browser::{BrowserLocator, ChromeProbe},
    cli::Cli,
    client::ReqwestTransport,
    config::{display_config_summary, load_config, Config},
    error::{AppError, Result},
    logging::Logger,
    output::SummaryFormatter,
    report::ReportRenderer,
    runner::ExperimentRunner,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Main application struct that coordinates all components
pub struct App {
    cli: Cli,
}

impl App {
    /// Create a new application instance with CLI configuration
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the application
    pub async fn run(self) -> Result<()> {
        let config = load_config(self.cli)?;
        let logger = Logger::from_flags(config.debug, config.enable_color);

        if config.debug {
            logger.debug(&format!(
                "{} v{} (built {}{})",
                crate::PKG_NAME,
                crate::VERSION,
                env!("BUILD_TIME"),
                option_env!("GIT_COMMIT")
                    .map(|c| format!(", commit {}", c))
                    .unwrap_or_default()
            ));
            logger.debug(&display_config_summary(&config));
        }

        // The browser binary is resolved once at startup and threaded into
        // the probe; the harness cannot proceed without one.
        let binary = resolve_browser_binary(&config)?;
        logger.info(&format!("Using browser binary: {}", binary.display()));

        let transport = Arc::new(ReqwestTransport::new(config.http_timeout)?);
        let probe = Arc::new(ChromeProbe::new(
            binary,
            config.settle,
            config.selector.clone(),
            config.nav_timeout,
        ));

        logger.info(&format!(
            "Running {} trials over {} target(s)...",
            config.trial_count,
            config.targets.len()
        ));
        let runner = ExperimentRunner::new(transport, probe, logger.clone());
        let results = runner.run(&config.targets, config.trial_count).await;

        let formatter = SummaryFormatter::new(config.enable_color, config.verbose);
        println!("{}", formatter.format_results(&results));

        if config.debug {
            match serde_json::to_string_pretty(&results) {
                Ok(json) => logger.debug(&format!("collected results:\n{}", json)),
                Err(e) => logger.warn(&format!("failed to serialize results: {}", e)),
            }
        }

        ReportRenderer::new(config.output_path.clone()).render(&results)?;
        logger.info(&format!(
            "Box-and-whisker chart written to {}",
            config.output_path.display()
        ));

        Ok(())
    }
}

/// Resolve the browser binary: explicit override first, then probing.
///
/// A missing override path is fatal; falling back to probing could silently
/// measure a different browser than the one asked for.
fn resolve_browser_binary(config: &Config) -> Result<PathBuf> {
    if let Some(ref binary) = config.browser_binary {
        if binary.is_file() {
            return Ok(binary.clone());
        }
        return Err(AppError::browser_not_found(format!(
            "configured browser binary '{}' does not exist",
            binary.display()
        )));
    }

    BrowserLocator::with_defaults().locate().ok_or_else(|| {
        AppError::browser_not_found(
            "no browser binary found in well-known locations or on PATH; \
             install Chrome/Chromium or pass --browser",
        )
    })
}

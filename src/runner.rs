//! Experiment runner
//!
//! Executes the two timed fetches for every target, N times, strictly
//! sequentially and interleaved (HTTP then browser per target per
//! repetition). A failed trial is recorded and the batch continues; the
//! sibling groups keep collecting.

use crate::browser::BrowserProbe;
use crate::client::{timed_get, HttpTransport};
use crate::logging::Logger;
use crate::models::{DurationSample, FetchMethod, RunResults, SampleGroup, Target, TrialFailure};
use std::sync::Arc;

/// Runs the configured trials and collects labeled sample groups
pub struct ExperimentRunner {
    http: Arc<dyn HttpTransport>,
    browser: Arc<dyn BrowserProbe>,
    logger: Logger,
}

impl ExperimentRunner {
    pub fn new(http: Arc<dyn HttpTransport>, browser: Arc<dyn BrowserProbe>, logger: Logger) -> Self {
        Self {
            http,
            browser,
            logger,
        }
    }

    /// Execute `trials` repetitions over the targets.
    ///
    /// Group order is stable: for each target, the HTTP group precedes the
    /// browser group. Trials run in issue order; each browser trial tears
    /// down its session before the next trial starts.
    pub async fn run(&self, targets: &[Target], trials: u32) -> RunResults {
        let mut groups: Vec<SampleGroup> = Vec::with_capacity(targets.len() * 2);
        for target in targets {
            groups.push(SampleGroup::new(FetchMethod::Http, &target.label, trials));
            groups.push(SampleGroup::new(FetchMethod::Browser, &target.label, trials));
        }
        let mut failures: Vec<TrialFailure> = Vec::new();

        for trial in 1..=trials {
            for (index, target) in targets.iter().enumerate() {
                self.logger.debug(&format!(
                    "trial {}/{} for target '{}'",
                    trial, trials, target.label
                ));

                match timed_get(self.http.as_ref(), &target.url).await {
                    Ok(fetch) => {
                        if fetch.is_success() {
                            self.logger
                                .debug(&format!("HTTP {} in {:.3}s", fetch.status, fetch.seconds));
                        } else {
                            self.logger.warn(&format!(
                                "HTTP fetch of '{}' returned status {}",
                                target.label, fetch.status
                            ));
                        }
                        groups[index * 2].push(DurationSample::new(
                            fetch.seconds,
                            FetchMethod::Http,
                            &target.label,
                        ));
                    }
                    Err(e) => {
                        self.logger.warn(&format!(
                            "HTTP trial {} for '{}' failed: {}",
                            trial, target.label, e
                        ));
                        failures.push(TrialFailure {
                            method: FetchMethod::Http,
                            target_label: target.label.clone(),
                            trial,
                            message: e.to_string(),
                        });
                    }
                }

                match self.browser.fetch(&target.url).await {
                    Ok(fetch) => {
                        self.logger.debug(&format!(
                            "browser loaded '{}' in {:.3}s ({} matched elements)",
                            target.label, fetch.seconds, fetch.matched_elements
                        ));
                        groups[index * 2 + 1].push(DurationSample::new(
                            fetch.seconds,
                            FetchMethod::Browser,
                            &target.label,
                        ));
                    }
                    Err(e) => {
                        self.logger.warn(&format!(
                            "browser trial {} for '{}' failed: {}",
                            trial, target.label, e
                        ));
                        failures.push(TrialFailure {
                            method: FetchMethod::Browser,
                            target_label: target.label.clone(),
                            trial,
                            message: e.to_string(),
                        });
                    }
                }
            }
        }

        RunResults::new(groups, failures)
    }
}

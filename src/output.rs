//! Console summary formatting

use crate::models::RunResults;
use crate::stats::SummaryStatistics;
use colored::Colorize;
use std::fmt::Write as _;

/// Formats run results as a per-group summary table
pub struct SummaryFormatter {
    enable_color: bool,
    verbose: bool,
}

impl SummaryFormatter {
    pub fn new(enable_color: bool, verbose: bool) -> Self {
        Self {
            enable_color,
            verbose,
        }
    }

    /// Format the full results summary: table, short-group warnings, and
    /// failure notes
    pub fn format_results(&self, results: &RunResults) -> String {
        let mut out = String::new();

        out.push_str(&self.heading("Latency comparison results"));
        out.push('\n');
        out.push_str(&format!(
            "{:<24} {:>7} {:>10} {:>10} {:>10} {:>10} {:>10}\n",
            "Group", "n", "mean (s)", "std (s)", "median", "min", "max"
        ));

        for group in &results.groups {
            match SummaryStatistics::from_samples(&group.seconds()) {
                Some(stats) => {
                    let _ = writeln!(
                        out,
                        "{:<24} {:>4}/{:<2} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>10.3}",
                        group.display_label(),
                        group.len(),
                        group.requested,
                        stats.mean,
                        stats.std_dev,
                        stats.median,
                        stats.min,
                        stats.max
                    );
                }
                None => {
                    let _ = writeln!(
                        out,
                        "{:<24} {:>4}/{:<2} {}",
                        group.display_label(),
                        0,
                        group.requested,
                        self.warn_text("no samples collected")
                    );
                }
            }
        }

        let incomplete = results.incomplete_groups();
        if !incomplete.is_empty() {
            out.push('\n');
            for group in incomplete {
                let line = format!(
                    "Warning: group '{}' collected {} of {} requested samples",
                    group.display_label(),
                    group.len(),
                    group.requested
                );
                out.push_str(&self.warn_text(&line));
                out.push('\n');
            }
        }

        if !results.failures.is_empty() {
            out.push('\n');
            out.push_str(&self.heading(&format!("Failed trials ({})", results.failures.len())));
            out.push('\n');
            for failure in &results.failures {
                let _ = writeln!(out, "  {}", failure);
            }
        } else if self.verbose {
            out.push('\n');
            out.push_str("All requested trials completed.\n");
        }

        out
    }

    fn heading(&self, text: &str) -> String {
        if self.enable_color {
            text.bold().underline().to_string()
        } else {
            text.to_string()
        }
    }

    fn warn_text(&self, text: &str) -> String {
        if self.enable_color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FetchMethod, SampleGroup, TrialFailure};

    fn results_with_short_group() -> RunResults {
        use crate::models::DurationSample;

        let mut http = SampleGroup::new(FetchMethod::Http, "API", 3);
        http.push(DurationSample::new(0.1, FetchMethod::Http, "API"));
        http.push(DurationSample::new(0.2, FetchMethod::Http, "API"));
        let mut browser = SampleGroup::new(FetchMethod::Browser, "API", 3);
        browser.push(DurationSample::new(5.0, FetchMethod::Browser, "API"));
        browser.push(DurationSample::new(5.1, FetchMethod::Browser, "API"));
        browser.push(DurationSample::new(5.2, FetchMethod::Browser, "API"));
        RunResults::new(
            vec![http, browser],
            vec![TrialFailure {
                method: FetchMethod::Http,
                target_label: "API".to_string(),
                trial: 2,
                message: "connection refused".to_string(),
            }],
        )
    }

    #[test]
    fn test_table_lists_every_group() {
        let text = SummaryFormatter::new(false, false).format_results(&results_with_short_group());
        assert!(text.contains("API - HTTP"));
        assert!(text.contains("API - Browser"));
        assert!(text.contains("2/3"));
        assert!(text.contains("3/3"));
    }

    #[test]
    fn test_short_group_warning_present() {
        let text = SummaryFormatter::new(false, false).format_results(&results_with_short_group());
        assert!(text.contains("collected 2 of 3 requested samples"));
    }

    #[test]
    fn test_failures_listed() {
        let text = SummaryFormatter::new(false, false).format_results(&results_with_short_group());
        assert!(text.contains("Failed trials (1)"));
        assert!(text.contains("connection refused"));
    }

    #[test]
    fn test_empty_group_noted() {
        let results = RunResults::new(
            vec![SampleGroup::new(FetchMethod::Browser, "API", 2)],
            Vec::new(),
        );
        let text = SummaryFormatter::new(false, false).format_results(&results);
        assert!(text.contains("no samples collected"));
    }
}

//! Data models for targets, duration samples, and run results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two fetch methods being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FetchMethod {
    /// Plain HTTP GET via the HTTP client
    Http,
    /// Headless browser page load
    Browser,
}

impl FetchMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchMethod::Http => "HTTP",
            FetchMethod::Browser => "Browser",
        }
    }
}

impl fmt::Display for FetchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A benchmark target: a URL plus a short label used in reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub label: String,
    pub url: String,
}

impl Target {
    pub fn new<L: Into<String>, U: Into<String>>(label: L, url: U) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// One timed trial result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationSample {
    /// Elapsed wall-clock time in seconds
    pub seconds: f64,
    /// Fetch method that produced the sample
    pub method: FetchMethod,
    /// Label of the target that was fetched
    pub target_label: String,
    /// When the trial completed
    pub recorded_at: DateTime<Utc>,
}

impl DurationSample {
    pub fn new(seconds: f64, method: FetchMethod, target_label: &str) -> Self {
        Self {
            seconds,
            method,
            target_label: target_label.to_string(),
            recorded_at: Utc::now(),
        }
    }
}

/// Ordered durations for one (method, target) pair across a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleGroup {
    pub method: FetchMethod,
    pub target_label: String,
    /// Number of trials that were requested for this group
    pub requested: u32,
    samples: Vec<DurationSample>,
}

impl SampleGroup {
    pub fn new(method: FetchMethod, target_label: &str, requested: u32) -> Self {
        Self {
            method,
            target_label: target_label.to_string(),
            requested,
            samples: Vec::with_capacity(requested as usize),
        }
    }

    /// Record one trial sample in arrival order
    pub fn push(&mut self, sample: DurationSample) {
        self.samples.push(sample);
    }

    pub fn samples(&self) -> &[DurationSample] {
        &self.samples
    }

    /// Elapsed seconds of every sample, in arrival order
    pub fn seconds(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.seconds).collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Whether the group collected every requested trial
    pub fn is_complete(&self) -> bool {
        self.samples.len() as u32 == self.requested
    }

    /// Chart/table label, e.g. "API - HTTP"
    pub fn display_label(&self) -> String {
        format!("{} - {}", self.target_label, self.method)
    }
}

/// A failed trial, recorded without aborting the batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialFailure {
    pub method: FetchMethod,
    pub target_label: String,
    /// 1-based repetition index
    pub trial: u32,
    pub message: String,
}

impl fmt::Display for TrialFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "trial {} of '{}' via {}: {}",
            self.trial, self.target_label, self.method, self.message
        )
    }
}

/// Everything collected by one experiment run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResults {
    pub groups: Vec<SampleGroup>,
    pub failures: Vec<TrialFailure>,
}

impl RunResults {
    pub fn new(groups: Vec<SampleGroup>, failures: Vec<TrialFailure>) -> Self {
        Self { groups, failures }
    }

    /// Look up the group for one (method, target) pair
    pub fn group(&self, method: FetchMethod, target_label: &str) -> Option<&SampleGroup> {
        self.groups
            .iter()
            .find(|g| g.method == method && g.target_label == target_label)
    }

    /// Groups that collected fewer samples than requested
    pub fn incomplete_groups(&self) -> Vec<&SampleGroup> {
        self.groups.iter().filter(|g| !g.is_complete()).collect()
    }

    pub fn total_samples(&self) -> usize {
        self.groups.iter().map(|g| g.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label() {
        let group = SampleGroup::new(FetchMethod::Http, "API", 5);
        assert_eq!(group.display_label(), "API - HTTP");

        let group = SampleGroup::new(FetchMethod::Browser, "Text page", 5);
        assert_eq!(group.display_label(), "Text page - Browser");
    }

    #[test]
    fn test_group_completeness() {
        let mut group = SampleGroup::new(FetchMethod::Http, "API", 2);
        assert!(!group.is_complete());
        group.push(DurationSample::new(0.1, FetchMethod::Http, "API"));
        group.push(DurationSample::new(0.2, FetchMethod::Http, "API"));
        assert!(group.is_complete());
        assert_eq!(group.seconds(), vec![0.1, 0.2]);
    }

    #[test]
    fn test_results_lookup() {
        let mut http = SampleGroup::new(FetchMethod::Http, "API", 1);
        http.push(DurationSample::new(0.05, FetchMethod::Http, "API"));
        let browser = SampleGroup::new(FetchMethod::Browser, "API", 1);
        let results = RunResults::new(vec![http, browser], Vec::new());

        assert_eq!(results.group(FetchMethod::Http, "API").unwrap().len(), 1);
        assert_eq!(results.incomplete_groups().len(), 1);
        assert_eq!(results.total_samples(), 1);
    }

    #[test]
    fn test_sample_serialization_round_trip() {
        let sample = DurationSample::new(1.25, FetchMethod::Browser, "API");
        let json = serde_json::to_string(&sample).unwrap();
        let back: DurationSample = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seconds, 1.25);
        assert_eq!(back.method, FetchMethod::Browser);
    }
}

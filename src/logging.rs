//! Leveled stderr logging for the fetch comparator
//!
//! Keeps the measurement path quiet by default; `--debug` lowers the
//! threshold so per-trial details (status codes, matched element counts,
//! session setup) become visible.

use chrono::Utc;
use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    /// Debug level - detailed per-trial information
    Debug = 0,
    /// Info level - general application progress
    Info = 1,
    /// Warning level - degraded but continuing
    Warn = 2,
    /// Error level - a trial or the run failed
    Error = 3,
}

impl LogLevel {
    /// Get log level name as string
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    fn colorize(&self, tag: &str) -> String {
        match self {
            LogLevel::Debug => tag.cyan().to_string(),
            LogLevel::Info => tag.green().to_string(),
            LogLevel::Warn => tag.yellow().to_string(),
            LogLevel::Error => tag.red().to_string(),
        }
    }
}

/// Minimal leveled logger writing timestamped lines to stderr
#[derive(Debug, Clone)]
pub struct Logger {
    min_level: LogLevel,
    use_color: bool,
}

impl Logger {
    /// Create a logger with an explicit threshold
    pub fn new(min_level: LogLevel, use_color: bool) -> Self {
        Self { min_level, use_color }
    }

    /// Derive the logger from configuration flags
    pub fn from_flags(debug: bool, use_color: bool) -> Self {
        let min_level = if debug { LogLevel::Debug } else { LogLevel::Info };
        Self::new(min_level, use_color)
    }

    /// Whether a message at `level` would be emitted
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }
        eprintln!("{}", self.format_line(level, message));
    }

    fn format_line(&self, level: LogLevel, message: &str) -> String {
        let timestamp = Utc::now().format("%H:%M:%S%.3f");
        let tag = format!("[{:>5}]", level.as_str());
        let tag = if self.use_color {
            level.colorize(&tag)
        } else {
            tag
        };
        format!("{} {} {}", timestamp, tag, message)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Info, false)
    }
}

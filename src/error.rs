//! Error handling for the fetch comparator

use thiserror::Error;

/// Custom error types for the fetch comparator
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// No usable browser executable could be located
    #[error("Browser not found: {0}")]
    BrowserNotFound(String),

    /// HTTP transport errors (DNS failure, refused connection, timeout)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Browser automation errors (launch or navigation failure)
    #[error("Automation error: {0}")]
    Automation(String),

    /// I/O errors (file operations, port allocation)
    #[error("I/O error: {0}")]
    Io(String),

    /// Parsing errors (URLs, target definitions)
    #[error("Parsing error: {0}")]
    Parse(String),

    /// Chart rendering errors
    #[error("Render error: {0}")]
    Render(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new browser-not-found error
    pub fn browser_not_found<S: Into<String>>(message: S) -> Self {
        Self::BrowserNotFound(message.into())
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport(message.into())
    }

    /// Create a new automation error
    pub fn automation<S: Into<String>>(message: S) -> Self {
        Self::Automation(message.into())
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    /// Create a new parsing error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    /// Create a new render error
    pub fn render<S: Into<String>>(message: S) -> Self {
        Self::Render(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG",
            Self::BrowserNotFound(_) => "BROWSER",
            Self::Transport(_) => "TRANSPORT",
            Self::Automation(_) => "AUTOMATION",
            Self::Io(_) => "IO",
            Self::Parse(_) => "PARSE",
            Self::Render(_) => "RENDER",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Check if the error is limited to a single trial rather than the run
    pub fn is_per_trial(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Automation(_))
    }

    /// Get exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            // The harness cannot produce meaningful timings without a browser
            Self::BrowserNotFound(_) => 1,
            Self::Config(_) | Self::Parse(_) => 1,
            Self::Transport(_) => 2,
            Self::Automation(_) => 3,
            Self::Io(_) => 5,
            Self::Render(_) => 6,
            Self::Internal(_) => 99,
        }
    }

    /// Format error for console display with color coding
    pub fn format_for_console(&self, use_color: bool) -> String {
        let category = self.category();
        let message = self.to_string();

        if use_color {
            use colored::Colorize;
            match self {
                Self::Config(_) | Self::Parse(_) => {
                    format!("[{}] {}", category.red().bold(), message.red())
                }
                Self::BrowserNotFound(_) => {
                    format!("[{}] {}", category.red().bold(), message.red())
                }
                Self::Transport(_) | Self::Automation(_) => {
                    format!("[{}] {}", category.yellow().bold(), message.yellow())
                }
                Self::Io(_) | Self::Render(_) => {
                    format!("[{}] {}", category.cyan().bold(), message.cyan())
                }
                Self::Internal(_) => {
                    format!("[{}] {}", category.bright_red().bold(), message.bright_red())
                }
            }
        } else {
            format!("[{}] {}", category, message)
        }
    }
}

// Standard library and dependency error conversions
impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(error: url::ParseError) -> Self {
        Self::parse(format!("URL parse error: {}", error))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        Self::transport(error.to_string())
    }
}

/// Convenience result type alias
pub type Result<T> = std::result::Result<T, AppError>;

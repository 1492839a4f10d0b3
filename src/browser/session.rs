//! Per-trial browser session isolation
//!
//! Each trial gets a debug port that is free at allocation time and an
//! exclusive temporary profile directory. Both are claimed just before
//! launch and released when the value drops, so a reused profile or a port
//! collision can never bleed state between measurements.

use crate::error::{AppError, Result};
use std::net::TcpListener;
use std::path::Path;
use tempfile::TempDir;

/// Exclusive resources backing one headless browser session
#[derive(Debug)]
pub struct SessionResources {
    profile_dir: TempDir,
    port: u16,
}

impl SessionResources {
    /// Claim a free localhost port and a fresh profile directory
    pub fn allocate() -> Result<Self> {
        let profile_dir = TempDir::with_prefix("fetchcmp-profile-")
            .map_err(|e| AppError::io(format!("failed to create profile directory: {}", e)))?;
        let port = free_port()?;

        Ok(Self { profile_dir, port })
    }

    /// The allocated debug port
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Path of the exclusive profile directory
    pub fn profile_path(&self) -> &Path {
        self.profile_dir.path()
    }
}

/// Ask the OS for a port that is free at allocation time
fn free_port() -> Result<u16> {
    let listener = TcpListener::bind(("127.0.0.1", 0))
        .map_err(|e| AppError::io(format!("failed to allocate a free port: {}", e)))?;
    let port = listener
        .local_addr()
        .map_err(|e| AppError::io(format!("failed to read allocated port: {}", e)))?
        .port();
    Ok(port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_yields_usable_resources() {
        let session = SessionResources::allocate().unwrap();
        assert!(session.port() > 0);
        assert!(session.profile_path().is_dir());
    }

    #[test]
    fn test_live_sessions_never_overlap() {
        let first = SessionResources::allocate().unwrap();
        let second = SessionResources::allocate().unwrap();
        assert_ne!(first.port(), second.port());
        assert_ne!(first.profile_path(), second.profile_path());
    }

    #[test]
    fn test_profile_directory_removed_on_drop() {
        let session = SessionResources::allocate().unwrap();
        let profile = session.profile_path().to_path_buf();
        assert!(profile.exists());
        drop(session);
        assert!(!profile.exists());
    }

    #[test]
    fn test_allocated_port_is_bindable() {
        let session = SessionResources::allocate().unwrap();
        // The listener used for discovery is closed, so the port must be
        // available for the browser to bind.
        TcpListener::bind(("127.0.0.1", session.port())).unwrap();
    }
}

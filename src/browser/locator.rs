//! Locating an installed browser executable
//!
//! Probes a static list of well-known install paths for the host platform,
//! then falls back to searching the executable search path. Absence is a
//! fatal startup condition handled by the caller; there is no best-effort
//! fallback that could silently produce meaningless timings.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Well-known install locations per platform
#[cfg(target_os = "linux")]
const WELL_KNOWN_PATHS: &[&str] = &[
    "/usr/bin/google-chrome",
    "/usr/bin/google-chrome-stable",
    "/usr/bin/chromium",
    "/usr/bin/chromium-browser",
    "/opt/google/chrome/google-chrome",
    "/snap/bin/chromium",
];

#[cfg(target_os = "macos")]
const WELL_KNOWN_PATHS: &[&str] = &[
    "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
    "/Applications/Chromium.app/Contents/MacOS/Chromium",
];

#[cfg(target_os = "windows")]
const WELL_KNOWN_PATHS: &[&str] = &[
    r"C:\Program Files\Google\Chrome\Application\chrome.exe",
    r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
];

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
const WELL_KNOWN_PATHS: &[&str] = &[];

/// Executable names probed on the search path
const EXECUTABLE_NAMES: &[&str] = &[
    "google-chrome",
    "google-chrome-stable",
    "chromium",
    "chromium-browser",
    "chrome",
];

/// Finds a usable browser executable across known install locations or the
/// execution search path
#[derive(Debug, Clone)]
pub struct BrowserLocator {
    candidates: Vec<PathBuf>,
    executable_names: Vec<String>,
}

impl BrowserLocator {
    /// Locator with the platform's well-known install paths
    pub fn with_defaults() -> Self {
        Self::new(
            WELL_KNOWN_PATHS.iter().map(PathBuf::from).collect(),
            EXECUTABLE_NAMES.iter().map(|n| n.to_string()).collect(),
        )
    }

    /// Locator with explicit candidate paths and executable names
    pub fn new(candidates: Vec<PathBuf>, executable_names: Vec<String>) -> Self {
        Self {
            candidates,
            executable_names,
        }
    }

    /// Return the first candidate that exists on disk, else the first match
    /// on the execution search path, else `None`
    pub fn locate(&self) -> Option<PathBuf> {
        self.locate_with_path_var(env::var_os("PATH").as_deref())
    }

    fn locate_with_path_var(&self, path_var: Option<&OsStr>) -> Option<PathBuf> {
        if let Some(found) = self.candidates.iter().find(|p| p.is_file()) {
            return Some(found.clone());
        }
        self.search_path(path_var)
    }

    fn search_path(&self, path_var: Option<&OsStr>) -> Option<PathBuf> {
        let path_var = path_var?;
        for dir in env::split_paths(path_var) {
            for name in &self.executable_names {
                let candidate = dir.join(name);
                if is_executable_file(&candidate) {
                    return Some(candidate);
                }
                #[cfg(windows)]
                {
                    let with_ext = dir.join(format!("{}.exe", name));
                    if with_ext.is_file() {
                        return Some(with_ext);
                    }
                }
            }
        }
        None
    }
}

#[cfg(unix)]
fn is_executable_file(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable_file(path: &Path) -> bool {
    path.is_file()
}

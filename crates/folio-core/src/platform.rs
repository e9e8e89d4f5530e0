//! Platform detection for folio
//!
//! Picks the system command that opens a file or URL in its default viewer.

/// Supported platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOS,
    Windows,
    /// Unknown/unsupported platform
    Unknown,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::MacOS => "macos",
            Platform::Windows => "windows",
            Platform::Unknown => "unknown",
        }
    }

    /// Default opener program and its leading arguments
    pub fn default_opener(self) -> Option<(&'static str, &'static [&'static str])> {
        match self {
            Platform::Linux => Some(("xdg-open", &[])),
            Platform::MacOS => Some(("open", &[])),
            // `start` treats the first quoted argument as a window title
            Platform::Windows => Some(("cmd", &["/C", "start", ""])),
            Platform::Unknown => None,
        }
    }
}

/// Detect the current platform
pub fn detect() -> Platform {
    if cfg!(target_os = "macos") {
        Platform::MacOS
    } else if cfg!(target_os = "windows") {
        Platform::Windows
    } else if cfg!(target_os = "linux") {
        Platform::Linux
    } else {
        Platform::Unknown
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum HostOs {
    Linux,
    MacOs,
    Windows,
    Unknown(String),
}

/// Formatting capabilities of the host, resolved once at startup and
/// passed into the display resolver. No cfg branches: every profile is
/// constructible on every platform, which keeps the resolver testable
/// everywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformProfile {
    pub id: HostOs,
    /// Replace serial-looking vendor names with "<model> (<suffix>)".
    pub synthesize_serial_labels: bool,
}

impl PlatformProfile {
    pub fn new(id: HostOs) -> Self {
        // Only the macOS build reformats opaque serials; the other
        // platforms show whatever the vendor reports.
        let synthesize_serial_labels = id == HostOs::MacOs;
        Self {
            id,
            synthesize_serial_labels,
        }
    }

    pub fn detect() -> Self {
        let id = match std::env::consts::OS {
            "linux" => HostOs::Linux,
            "macos" => HostOs::MacOs,
            "windows" => HostOs::Windows,
            other => HostOs::Unknown(other.to_string()),
        };
        Self::new(id)
    }
}

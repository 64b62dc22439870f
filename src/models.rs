use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConnectionMode {
    /// Bound to a vendor cloud account; renames go through the cloud API.
    #[serde(rename = "cloud")]
    Cloud,
    /// Reachable on the local network only; renames are stored locally.
    #[default]
    #[serde(rename = "lan")]
    Lan,
}

impl ConnectionMode {
    pub fn is_lan(&self) -> bool {
        matches!(self, ConnectionMode::Lan)
    }
}

/// Snapshot of a printer as reported by the device manager.
/// This crate only reads these fields; discovery owns them.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct DeviceRecord {
    pub dev_id: String,
    pub raw_name: String,
    pub connection: ConnectionMode,
    pub model_name: Option<String>,
    pub product_name: Option<String>,
}

impl DeviceRecord {
    /// Best available human-readable description, model name first.
    pub fn description(&self) -> Option<&str> {
        self.model_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.product_name.as_deref().filter(|s| !s.is_empty()))
    }
}

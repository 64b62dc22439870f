use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::DeviceRecord;
use crate::settings::DeviceSettings;
use crate::validate::{validate_device_name, NameError};

/// Seam to the component that owns device discovery and the vendor cloud
/// session. This crate never speaks the cloud protocol itself; it only
/// delegates renames for cloud-bound devices.
#[async_trait]
pub trait DeviceManager: Send + Sync {
    async fn rename_cloud_device(&self, dev_id: &str, name: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum RenameOutcome {
    /// LAN-only device; the override went into local settings.
    StoredLocally,
    /// Cloud device; the rename was delegated to the device manager.
    CloudRequested,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenameError {
    Invalid(NameError),
    /// Whatever the device manager surfaced for the cloud call, verbatim.
    Cloud(String),
}

impl std::fmt::Display for RenameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenameError::Invalid(e) => write!(f, "{}", e),
            RenameError::Cloud(msg) => write!(f, "Cloud rename failed: {}", msg),
        }
    }
}

impl std::error::Error for RenameError {}

impl From<NameError> for RenameError {
    fn from(e: NameError) -> Self {
        RenameError::Invalid(e)
    }
}

/// The dual save logic behind the rename dialog: validate, then route by
/// connection mode. LAN-only devices get a local override, cloud devices
/// go through the device manager. Nothing is stored on the cloud path;
/// the vendor name comes back renamed on the next status refresh.
pub async fn apply_rename(
    settings: &mut DeviceSettings,
    manager: &dyn DeviceManager,
    record: &DeviceRecord,
    new_name: &str,
) -> Result<RenameOutcome, RenameError> {
    validate_device_name(new_name)?;

    if record.connection.is_lan() {
        log::info!("Storing local name for {}: {}", record.dev_id, new_name);
        settings.set_device_name(&record.dev_id, new_name);
        Ok(RenameOutcome::StoredLocally)
    } else {
        log::info!("Requesting cloud rename for {}: {}", record.dev_id, new_name);
        manager
            .rename_cloud_device(&record.dev_id, new_name)
            .await
            .map_err(RenameError::Cloud)?;
        Ok(RenameOutcome::CloudRequested)
    }
}

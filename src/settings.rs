use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// On-disk shape of the settings file. The override map lives under the
/// reserved "device_names" key and is omitted from the file entirely
/// while empty.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct StoredSettings {
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    device_names: HashMap<String, String>,
}

/// Owned settings component holding the local display-name overrides.
/// Constructed once at startup and passed by reference to the views that
/// need it; there is no ambient global. Every mutation writes the file
/// through immediately.
#[derive(Debug)]
pub struct DeviceSettings {
    path: PathBuf,
    device_names: HashMap<String, String>,
}

impl DeviceSettings {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("printdeck")
            .join("settings.json")
    }

    pub fn open_default() -> Self {
        Self::load(Self::default_path())
    }

    /// Load from `path`, tolerating damage: a missing or unparseable file
    /// yields empty settings, and inside "device_names" any entry whose
    /// value is not a string is skipped so one bad entry cannot take the
    /// rest down.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut device_names = HashMap::new();

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<serde_json::Value>(&content) {
                Ok(root) => {
                    if let Some(map) = root.get("device_names").and_then(|v| v.as_object()) {
                        for (dev_id, value) in map {
                            match value.as_str() {
                                Some(name) => {
                                    device_names.insert(dev_id.clone(), name.to_string());
                                }
                                None => {
                                    log::warn!(
                                        "Skipping malformed device name entry for '{}': {}",
                                        dev_id,
                                        value
                                    );
                                }
                            }
                        }
                    }
                }
                Err(e) => {
                    log::warn!("Settings file {} is not valid JSON: {}", path.display(), e);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                log::warn!("Could not read settings file {}: {}", path.display(), e);
            }
        }

        Self { path, device_names }
    }

    /// Set or clear the local override for a device. An empty name deletes
    /// the entry: an entry exists exactly while the user has a custom name.
    /// Identifier-agnostic, unknown ids are stored as-is.
    pub fn set_device_name(&mut self, dev_id: &str, name: &str) {
        if name.is_empty() {
            self.remove_device_name(dev_id);
            return;
        }
        self.device_names
            .insert(dev_id.to_string(), name.to_string());
        self.save();
    }

    pub fn device_name(&self, dev_id: &str) -> Option<&str> {
        self.device_names.get(dev_id).map(|s| s.as_str())
    }

    /// Idempotent; removing an absent entry still rewrites the file so the
    /// on-disk state matches memory after any call.
    pub fn remove_device_name(&mut self, dev_id: &str) {
        self.device_names.remove(dev_id);
        self.save();
    }

    pub fn device_names(&self) -> &HashMap<String, String> {
        &self.device_names
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Synchronous write-through. Failures are logged and swallowed; the
    // in-memory state stays authoritative for the session either way.
    fn save(&self) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        let stored = StoredSettings {
            device_names: self.device_names.clone(),
        };

        match std::fs::File::create(&self.path) {
            Ok(file) => {
                if let Err(e) = serde_json::to_writer_pretty(file, &stored) {
                    log::warn!("Could not write settings file {}: {}", self.path.display(), e);
                }
            }
            Err(e) => {
                log::warn!("Could not create settings file {}: {}", self.path.display(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings() -> (tempfile::TempDir, DeviceSettings) {
        let dir = tempfile::tempdir().unwrap();
        let settings = DeviceSettings::load(dir.path().join("settings.json"));
        (dir, settings)
    }

    #[test]
    fn test_set_then_get() {
        let (_dir, mut settings) = temp_settings();
        settings.set_device_name("01P00A123456789A", "Workshop");
        assert_eq!(settings.device_name("01P00A123456789A"), Some("Workshop"));
    }

    #[test]
    fn test_set_replaces_existing() {
        let (_dir, mut settings) = temp_settings();
        settings.set_device_name("dev1", "First");
        settings.set_device_name("dev1", "Second");
        assert_eq!(settings.device_name("dev1"), Some("Second"));
        assert_eq!(settings.device_names().len(), 1);
    }

    #[test]
    fn test_empty_name_deletes_entry() {
        let (_dir, mut settings) = temp_settings();
        settings.set_device_name("dev1", "Workshop");
        settings.set_device_name("dev1", "");
        assert_eq!(settings.device_name("dev1"), None);
        assert!(settings.device_names().is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_dir, mut settings) = temp_settings();
        settings.set_device_name("dev1", "Workshop");
        settings.remove_device_name("dev1");
        settings.remove_device_name("dev1");
        assert_eq!(settings.device_name("dev1"), None);
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = DeviceSettings::load(&path);
        settings.set_device_name("dev1", "Workshop");
        settings.set_device_name("dev2", "Garage");

        let reloaded = DeviceSettings::load(&path);
        assert_eq!(reloaded.device_names(), settings.device_names());
    }

    #[test]
    fn test_empty_map_omitted_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = DeviceSettings::load(&path);
        settings.set_device_name("dev1", "Workshop");
        settings.remove_device_name("dev1");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("device_names"));
    }

    #[test]
    fn test_malformed_entries_skipped_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"device_names": {"dev1": "Workshop", "dev2": 42, "dev3": null}}"#,
        )
        .unwrap();

        let settings = DeviceSettings::load(&path);
        assert_eq!(settings.device_name("dev1"), Some("Workshop"));
        assert_eq!(settings.device_name("dev2"), None);
        assert_eq!(settings.device_name("dev3"), None);
    }

    #[test]
    fn test_corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json at all").unwrap();

        let settings = DeviceSettings::load(&path);
        assert!(settings.device_names().is_empty());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = DeviceSettings::load(dir.path().join("nope.json"));
        assert!(settings.device_names().is_empty());
    }
}

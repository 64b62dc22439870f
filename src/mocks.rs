use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::device_manager::DeviceManager;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MockRename {
    pub dev_id: String,
    pub name: String,
}

#[derive(Clone, Default)]
pub struct MockDeviceManager {
    // Log of delegated renames for assertion
    pub rename_history: Arc<Mutex<Vec<MockRename>>>,
    // Configurable responses
    pub should_fail_next: Arc<Mutex<bool>>,
    pub next_error_message: Arc<Mutex<String>>,
}

impl MockDeviceManager {
    pub fn new() -> Self {
        Self {
            rename_history: Arc::new(Mutex::new(Vec::new())),
            should_fail_next: Arc::new(Mutex::new(false)),
            next_error_message: Arc::new(Mutex::new("Mock Failure".to_string())),
        }
    }

    pub fn reset(&self) {
        if let Ok(mut hist) = self.rename_history.lock() {
            hist.clear();
        }
        if let Ok(mut fail) = self.should_fail_next.lock() {
            *fail = false;
        }
    }

    pub fn set_failure(&self, msg: &str) {
        if let Ok(mut fail) = self.should_fail_next.lock() {
            *fail = true;
        }
        if let Ok(mut err) = self.next_error_message.lock() {
            *err = msg.to_string();
        }
    }
}

#[async_trait]
impl DeviceManager for MockDeviceManager {
    async fn rename_cloud_device(&self, dev_id: &str, name: &str) -> Result<(), String> {
        // 1. Record the call
        if let Ok(mut hist) = self.rename_history.lock() {
            hist.push(MockRename {
                dev_id: dev_id.to_string(),
                name: name.to_string(),
            });
        }

        // 2. Check for forced failure
        if let Ok(fail) = self.should_fail_next.lock() {
            if *fail {
                let msg = self.next_error_message.lock().unwrap().clone();
                return Err(msg);
            }
        }

        Ok(())
    }
}

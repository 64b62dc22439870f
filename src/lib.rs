pub mod device_manager;
pub mod labels;
pub mod mocks;
pub mod models;
pub mod platform;
pub mod settings;
pub mod validate;


pub use device_manager::{apply_rename, DeviceManager, RenameError, RenameOutcome};
pub use labels::display_name;
pub use models::{ConnectionMode, DeviceRecord};
pub use platform::{HostOs, PlatformProfile};
pub use settings::DeviceSettings;
pub use validate::{validate_device_name, NameError};

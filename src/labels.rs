// Display name resolution for device lists and dialogs.
// Priority: local override > friendly serial label (macOS) > raw vendor name.
// Pure over its inputs; call it fresh on every render, the override map
// and the vendor name can both change between renders.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::DeviceRecord;
use crate::platform::PlatformProfile;

/// How long an all-alphanumeric name has to be before we treat it as an
/// opaque factory serial rather than something a user typed. Placeholder
/// classifier: vendors have never published their identifier grammar, so
/// a short serial or a long one-word user name can be misjudged.
const SERIAL_MIN_LEN: usize = 8;

static SERIAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

pub fn looks_like_serial(name: &str) -> bool {
    name.chars().count() > SERIAL_MIN_LEN && SERIAL_RE.is_match(name)
}

/// Last four characters of the identifier, enough to tell two devices of
/// the same model apart.
pub fn short_suffix(dev_id: &str) -> String {
    let chars: Vec<char> = dev_id.chars().collect();
    let start = chars.len().saturating_sub(4);
    chars[start..].iter().collect()
}

pub fn display_name(
    record: &DeviceRecord,
    override_name: Option<&str>,
    profile: &PlatformProfile,
) -> String {
    // A user-chosen override beats every other source, cloud or local.
    if let Some(name) = override_name {
        return name.to_string();
    }

    if profile.synthesize_serial_labels && looks_like_serial(&record.raw_name) {
        if let Some(desc) = record.description() {
            return format!("{} ({})", desc, short_suffix(&record.dev_id));
        }
    }

    record.raw_name.clone()
}

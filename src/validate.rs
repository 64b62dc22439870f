/// Device name validation for the rename dialog.
/// Rejections are synchronous and mutate nothing; the user fixes the
/// input and retries.
use serde::{Deserialize, Serialize};

/// Characters used elsewhere as path and preset separators; a device
/// name containing one would corrupt those formats.
pub const FORBIDDEN_CHARS: [char; 10] = ['<', '>', '[', ']', ':', '/', '\\', '|', '?', '*'];

/// Suffix appended to modified presets; user names must not collide with it.
pub const RESERVED_SUFFIX: &str = "(modified)";

/// Why a user-entered name was rejected
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum NameError {
    /// Name is empty
    Empty,
    /// Name starts or ends with whitespace
    SurroundingWhitespace,
    /// Name contains a character from [`FORBIDDEN_CHARS`]
    ForbiddenChar(char),
    /// Name ends with [`RESERVED_SUFFIX`]
    ReservedSuffix,
}

impl std::fmt::Display for NameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameError::Empty => write!(f, "Name cannot be empty."),
            NameError::SurroundingWhitespace => {
                write!(f, "Name cannot start or end with a space.")
            }
            NameError::ForbiddenChar(c) => {
                write!(f, "Name cannot contain the character '{}'.", c)
            }
            NameError::ReservedSuffix => {
                write!(f, "Name cannot end with '{}'.", RESERVED_SUFFIX)
            }
        }
    }
}

impl std::error::Error for NameError {}

pub fn validate_device_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.trim() != name {
        return Err(NameError::SurroundingWhitespace);
    }
    if let Some(c) = name.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
        return Err(NameError::ForbiddenChar(c));
    }
    if name.ends_with(RESERVED_SUFFIX) {
        return Err(NameError::ReservedSuffix);
    }
    Ok(())
}

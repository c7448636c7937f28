use validator::ValidationError;

use crate::constants::MAX_NAME_LENGTH;

/// Checks a name that has already been trimmed.
pub fn validate_wheel_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::new("empty_name"));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::new("name_too_long"));
    }
    Ok(())
}

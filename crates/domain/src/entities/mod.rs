pub mod client;
pub mod person;

pub use client::*;
pub use person::*;

/// Common capability of every record kind: an identity assigned by storage
/// on creation, plus field-level validation.
pub trait Entity: Send + Sync {
    /// Storage identity; `None` until the record has been created.
    fn entity_id(&self) -> Option<i32>;

    /// Evaluates every field constraint independently and collects all
    /// violations. Returns messages in field order; callers that present
    /// them sort the list first.
    fn validate(&self) -> Vec<String>;
}

/// Pushes `message` unless `value` is non-empty and within `min..=max` characters.
pub(crate) fn check_length(
    value: &str,
    min: usize,
    max: usize,
    message: &str,
    errors: &mut Vec<String>,
) {
    let len = value.chars().count();
    if len < min || len > max {
        errors.push(message.to_string());
    }
}

/// Shared address field constraints for both entity kinds.
pub(crate) fn validate_address(
    street_address: &str,
    city: &str,
    state: &str,
    zip_code: &str,
    errors: &mut Vec<String>,
) {
    check_length(
        street_address,
        1,
        50,
        "Street address is required with maximum length of 50",
        errors,
    );
    check_length(city, 1, 50, "City is required with maximum length of 50", errors);
    check_length(state, 2, 2, "State is required as a two-letter code", errors);
    check_length(zip_code, 5, 5, "Zip code is required as a five-digit code", errors);
}

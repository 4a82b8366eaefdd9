use std::collections::BTreeMap;
use std::fmt;

/// Per-field messages produced by client-side form checks.
///
/// Validation runs synchronously before any network call; a non-empty set
/// blocks the submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<&'static str, &'static str>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `field`. The first message for a field wins.
    pub fn add(&mut self, field: &'static str, message: &'static str) {
        self.fields.entry(field).or_insert(message);
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.fields.get(field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.fields.iter().map(|(field, message)| (*field, *message))
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// All messages joined into a single banner line.
    pub fn user_message(&self) -> String {
        self.fields.values().copied().collect::<Vec<_>>().join("; ")
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.fields.keys().copied().collect();
        write!(f, "validation.failed: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_be_ok_when_no_field_failed() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn should_keep_first_message_per_field() {
        let mut errors = ValidationErrors::new();
        errors.add("email", "Email is required");
        errors.add("email", "Email is invalid");

        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.iter().count(), 1);
    }

    #[test]
    fn should_join_messages_in_field_order() {
        let mut errors = ValidationErrors::new();
        errors.add("price", "Price must be greater than zero");
        errors.add("name", "Name is required");

        assert_eq!(
            errors.user_message(),
            "Name is required; Price must be greater than zero"
        );
        assert_eq!(errors.to_string(), "validation.failed: name, price");
    }
}

//! Input validation port.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::PostInput;
use crate::error::DomainError;

/// Field name to error message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for `field`. The first message recorded wins.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{joined}")
    }
}

/// Outcome of validating a payload.
#[derive(Debug, Clone, Default)]
pub struct ValidationOutcome {
    pub errors: FieldErrors,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert into a domain result.
    pub fn into_result(self) -> Result<(), DomainError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(DomainError::ValidationFailed(self.errors))
        }
    }
}

impl From<FieldErrors> for ValidationOutcome {
    fn from(errors: FieldErrors) -> Self {
        Self { errors }
    }
}

/// Validates post and comment payloads.
pub trait PostInputValidator: Send + Sync {
    fn validate(&self, input: &PostInput) -> ValidationOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_wins() {
        let mut errors = FieldErrors::new();
        errors.insert("text", "Text field is required");
        errors.insert("text", "something else");

        assert_eq!(errors.get("text"), Some("Text field is required"));
    }

    #[test]
    fn test_outcome_into_result() {
        assert!(ValidationOutcome::default().into_result().is_ok());

        let mut errors = FieldErrors::new();
        errors.insert("text", "Text field is required");
        let result = ValidationOutcome::from(errors).into_result();

        assert!(matches!(result, Err(DomainError::ValidationFailed(e)) if e.get("text").is_some()));
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut errors = FieldErrors::new();
        errors.insert("text", "Text field is required");

        let json = serde_json::to_value(&errors).unwrap();

        assert_eq!(json, serde_json::json!({ "text": "Text field is required" }));
    }
}

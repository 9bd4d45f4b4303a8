use validator::{Validate, ValidationErrors};

use agora_core::domain::PostInput;
use agora_core::ports::{FieldErrors, PostInputValidator, ValidationOutcome};

const TEXT_REQUIRED: &str = "Text field is required";
const TEXT_LENGTH: &str = "Post must be between 10 and 300 characters";

#[derive(Debug, Validate)]
struct PostInputForm {
    #[validate(length(min = 10, max = 300, message = "Post must be between 10 and 300 characters"))]
    text: String,
}

/// Rules for post and comment payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostInputRules;

impl PostInputRules {
    pub fn new() -> Self {
        Self
    }
}

fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut fields = FieldErrors::new();
    for (field, errors) in errors.field_errors() {
        for error in errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string());
            fields.insert(field.to_string(), message);
        }
    }
    fields
}

impl PostInputValidator for PostInputRules {
    fn validate(&self, input: &PostInput) -> ValidationOutcome {
        if input.text.trim().is_empty() {
            let mut errors = FieldErrors::new();
            errors.insert("text", TEXT_REQUIRED);
            return errors.into();
        }

        let form = PostInputForm {
            text: input.text.clone(),
        };
        match form.validate() {
            Ok(()) => ValidationOutcome::default(),
            Err(errors) => {
                tracing::debug!(%errors, "Post input rejected");
                field_errors(&errors).into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(text: &str) -> PostInput {
        PostInput {
            text: text.to_string(),
            ..PostInput::default()
        }
    }

    #[test]
    fn test_valid_text() {
        let outcome = PostInputRules::new().validate(&input("a perfectly fine post"));
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_missing_text() {
        let outcome = PostInputRules::new().validate(&input("   "));

        assert!(!outcome.is_valid());
        assert_eq!(outcome.errors.get("text"), Some(TEXT_REQUIRED));
    }

    #[test]
    fn test_text_length_bounds() {
        let rules = PostInputRules::new();

        assert_eq!(rules.validate(&input("too short")).errors.get("text"), Some(TEXT_LENGTH));
        assert!(rules.validate(&input(&"x".repeat(10))).is_valid());
        assert!(rules.validate(&input(&"x".repeat(300))).is_valid());
        assert_eq!(
            rules.validate(&input(&"x".repeat(301))).errors.get("text"),
            Some(TEXT_LENGTH)
        );
    }

    #[test]
    fn test_name_and_avatar_are_not_checked() {
        let outcome = PostInputRules::new().validate(&PostInput {
            text: "a perfectly fine post".to_string(),
            name: String::new(),
            avatar: String::new(),
        });

        assert!(outcome.is_valid());
    }
}

//! Form validation
//!
//! URL must be non-empty, prompt must be 3–160 characters (counted as chars, not bytes).

use crate::types::{Field, FieldError, FormInput, ValidationErrors};

/// Minimum prompt length in characters
pub const PROMPT_MIN_CHARS: usize = 3;

/// Maximum prompt length in characters
pub const PROMPT_MAX_CHARS: usize = 160;

/// Validate the URL field
pub fn validate_url(url: &str) -> Option<FieldError> {
    if url.trim().is_empty() {
        return Some(FieldError::new(Field::Url, "URL is required"));
    }
    None
}

/// Validate the prompt field
pub fn validate_prompt(prompt: &str) -> Option<FieldError> {
    let len = prompt.chars().count();
    if len < PROMPT_MIN_CHARS {
        return Some(FieldError::new(
            Field::Prompt,
            format!("Prompt must be at least {PROMPT_MIN_CHARS} characters"),
        ));
    }
    if len > PROMPT_MAX_CHARS {
        return Some(FieldError::new(
            Field::Prompt,
            format!("Prompt must be at most {PROMPT_MAX_CHARS} characters"),
        ));
    }
    None
}

/// Validate a whole form
pub fn validate(input: &FormInput) -> Result<(), ValidationErrors> {
    let errors: Vec<FieldError> = [validate_url(&input.url), validate_prompt(&input.prompt)]
        .into_iter()
        .flatten()
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors::from(errors))
    }
}

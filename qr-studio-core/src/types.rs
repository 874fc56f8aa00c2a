//! Data model shared by the controller and every front end

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw form values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub url: String,
    pub prompt: String,
}

impl FormInput {
    pub fn new(url: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            prompt: prompt.into(),
        }
    }
}

/// Form field identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Url,
    Prompt,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Url => "url",
            Field::Prompt => "prompt",
        }
    }
}

/// A single field-level validation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Ordered collection of field errors (at most one per field)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Error for a specific field, if any
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    /// Replace the error of `error.field`
    pub fn set(&mut self, error: FieldError) {
        self.clear(error.field);
        self.0.push(error);
    }

    /// Remove the error of `field`
    pub fn clear(&mut self, field: Field) {
        self.0.retain(|e| e.field != field);
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        let mut out = Self::new();
        for error in errors {
            out.set(error);
        }
        out
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field.as_str(), error.message)?;
        }
        Ok(())
    }
}

/// Requested image dimensions, rendered as `WxH` on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

impl Default for ImageSize {
    fn default() -> Self {
        Self::square(300)
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// What the QR service hands back for one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrImage {
    pub image_url: String,
    pub latency_ms: u64,
}

/// Immutable record of one successful generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub id: String,
    pub image_url: String,
    pub latency_ms: u64,
    /// The URL that was encoded
    pub target: String,
    pub created_at: DateTime<Utc>,
}

impl GenerationResult {
    /// Build a result with a fresh `qr-xxxxxxxxxxxx` identifier
    pub fn new(target: impl Into<String>, image: QrImage) -> Self {
        let simple = uuid::Uuid::new_v4().simple().to_string();
        Self {
            id: format!("qr-{}", &simple[..12]),
            image_url: image.image_url,
            latency_ms: image.latency_ms.max(1),
            target: target.into(),
            created_at: Utc::now(),
        }
    }

    /// Default file name used when saving the image
    pub fn default_filename(&self) -> String {
        format!("{}.png", self.id)
    }
}

/// Lifecycle stage of the controller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data")]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(GenerationResult),
    Failed(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        match self {
            RequestState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Short name for logs
    pub fn label(&self) -> &'static str {
        match self {
            RequestState::Idle => "idle",
            RequestState::Loading => "loading",
            RequestState::Success(_) => "success",
            RequestState::Failed(_) => "failed",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn generation_result_ids_are_prefixed_and_unique() {
        let image = QrImage {
            image_url: "https://qr.test/?data=x".to_string(),
            latency_ms: 12,
        };
        let a = GenerationResult::new("x", image.clone());
        let b = GenerationResult::new("x", image);
        assert!(a.id.starts_with("qr-"));
        assert_eq!(a.id.len(), 15);
        assert_ne!(a.id, b.id);
        assert_eq!(a.default_filename(), format!("{}.png", a.id));
    }

    #[test]
    fn generation_result_latency_is_positive() {
        let result = GenerationResult::new(
            "x",
            QrImage {
                image_url: "https://qr.test/".to_string(),
                latency_ms: 0,
            },
        );
        assert_eq!(result.latency_ms, 1);
    }

    #[test]
    fn validation_errors_keep_one_entry_per_field() {
        let mut errors = ValidationErrors::new();
        errors.set(FieldError::new(Field::Prompt, "too short"));
        errors.set(FieldError::new(Field::Prompt, "too long"));
        errors.set(FieldError::new(Field::Url, "required"));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Prompt).unwrap().message, "too long");

        errors.clear(Field::Prompt);
        assert!(errors.get(Field::Prompt).is_none());
        assert_eq!(errors.to_string(), "url: required");
    }

    #[test]
    fn request_state_accessors() {
        assert!(RequestState::Loading.is_loading());
        assert!(RequestState::Idle.result().is_none());
        assert_eq!(
            RequestState::Failed("boom".to_string()).error_message(),
            Some("boom")
        );
        assert_eq!(ImageSize::default().to_string(), "300x300");
    }
}

//! QR Studio Core Library
//!
//! UI-agnostic logic behind the QR Studio form:
//! - Form validation (URL / prompt bounds)
//! - Generation lifecycle (`GenerationController`: Idle → Loading → Success | Failed)
//! - QR image service client, clipboard and download facilities
//! - Transient notification channel
//!
//! External collaborators are abstracted through traits so that any front end
//! (the terminal UI, tests) can inject its own implementations.

pub mod config;
pub mod controller;
pub mod error;
pub mod notification;
pub mod preview;
pub mod services;
pub mod suggestions;
pub mod traits;
pub mod types;
pub mod validator;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::{Language, StudioConfig, ThemeName};
pub use controller::{
    FormState, GenerationController, GenerationJob, GenerationOutcome, SideEffectJob,
    SideEffectOutcome, SubmitRejection, REQUEST_FAILED_MESSAGE,
};
pub use error::{StudioError, StudioResult};
pub use notification::{Notification, NotificationCenter, NotificationKind};
pub use services::{FileDownloader, HttpQrService, SystemClipboard};
pub use traits::{Clipboard, Downloader, QrService};
pub use types::{
    Field, FieldError, FormInput, GenerationResult, ImageSize, QrImage, RequestState,
    ValidationErrors,
};

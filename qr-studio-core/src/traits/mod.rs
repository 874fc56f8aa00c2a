//! External collaborator abstraction trait definition

mod clipboard;
mod downloader;
mod qr_service;

pub use clipboard::Clipboard;
pub use downloader::Downloader;
pub use qr_service::QrService;

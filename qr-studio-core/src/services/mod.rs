//! Production implementations of the collaborator traits

mod file_downloader;
mod http_qr_service;
mod system_clipboard;

pub use file_downloader::{sanitize_filename, FileDownloader};
pub use http_qr_service::HttpQrService;
pub use system_clipboard::{ClipboardCommand, SystemClipboard};

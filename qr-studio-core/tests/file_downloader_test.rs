#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! `FileDownloader` 集成测试

mod common;

use std::time::Duration;

use common::{CannedResponse, StubServer, PNG_BYTES};
use qr_studio_core::{Downloader, FileDownloader, StudioError};

#[tokio::test]
async fn saves_image_into_directory() {
    let server = StubServer::start(CannedResponse::png()).await;
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("downloads");
    let downloader = FileDownloader::new(&dir, Duration::from_secs(5)).unwrap();

    let path = downloader
        .download(&server.url("/qr?data=x"), "qr-abc123.png")
        .await
        .unwrap();

    assert_eq!(path, dir.join("qr-abc123.png"));
    assert_eq!(std::fs::read(&path).unwrap(), PNG_BYTES);
}

#[tokio::test]
async fn filename_cannot_escape_directory() {
    let server = StubServer::start(CannedResponse::png()).await;
    let tmp = tempfile::tempdir().unwrap();
    let downloader = FileDownloader::new(tmp.path(), Duration::from_secs(5)).unwrap();

    let path = downloader
        .download(&server.url("/qr"), "../../outside")
        .await
        .unwrap();

    assert_eq!(path, tmp.path().join("outside.png"));
    assert!(path.exists());
}

#[tokio::test]
async fn http_error_is_download_error() {
    let server = StubServer::start(CannedResponse::status(404)).await;
    let tmp = tempfile::tempdir().unwrap();
    let downloader = FileDownloader::new(tmp.path(), Duration::from_secs(5)).unwrap();

    let err = downloader
        .download(&server.url("/missing"), "qr.png")
        .await
        .unwrap_err();

    assert!(matches!(err, StudioError::Download(_)));
    assert!(!tmp.path().join("qr.png").exists());
}

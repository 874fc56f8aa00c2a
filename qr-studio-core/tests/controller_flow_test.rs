#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! 控制器 + 真实 HTTP 客户端的端到端流程

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{CannedResponse, StubServer};
use qr_studio_core::services::ClipboardCommand;
use qr_studio_core::{
    FileDownloader, FormInput, GenerationController, HttpQrService, ImageSize, NotificationKind,
    RequestState, SystemClipboard,
};

fn controller(server: &StubServer, download_dir: &std::path::Path) -> GenerationController {
    let qr = HttpQrService::new(
        server.url("/create"),
        ImageSize::default(),
        Duration::from_secs(5),
    )
    .unwrap();
    let downloader = FileDownloader::new(download_dir, Duration::from_secs(5)).unwrap();
    let clipboard = SystemClipboard::with_commands(vec![ClipboardCommand::new("cat", &[])]);

    GenerationController::new(
        Arc::new(qr),
        Arc::new(clipboard),
        Arc::new(downloader),
        "http://localhost:3000",
        Duration::from_secs(3),
    )
}

#[tokio::test]
async fn submit_then_download() {
    let server = StubServer::start(CannedResponse::png()).await;
    let tmp = tempfile::tempdir().unwrap();
    let mut controller = controller(&server, tmp.path());

    let state = controller
        .submit(FormInput::new("https://example.com", "A city view with clouds"))
        .await;
    assert!(matches!(state, RequestState::Success(_)));

    let result = controller.result().cloned().unwrap();
    assert!(result.image_url.contains("https%3A%2F%2Fexample.com"));

    assert!(controller.download(&result, &result.default_filename()).await);
    assert!(tmp.path().join(result.default_filename()).exists());
    // 一次生成 + 一次下载
    assert_eq!(server.hits(), 2);
}

#[tokio::test]
async fn failing_service_reports_failure() {
    let server = StubServer::start(CannedResponse::status(503)).await;
    let tmp = tempfile::tempdir().unwrap();
    let mut controller = controller(&server, tmp.path());

    let state = controller
        .submit(FormInput::new("https://example.com", "A beautiful glacier"))
        .await
        .clone();

    assert!(state.error_message().is_some_and(|m| !m.is_empty()));
    assert!(controller.result().is_none());
    assert_eq!(
        controller.notifications().latest().unwrap().kind,
        NotificationKind::Error
    );
}

#[cfg(unix)]
#[tokio::test]
async fn share_uses_clipboard_command() {
    let server = StubServer::start(CannedResponse::png()).await;
    let tmp = tempfile::tempdir().unwrap();
    let mut controller = controller(&server, tmp.path());

    controller
        .submit(FormInput::new("https://example.com", "A city view with clouds"))
        .await;
    let result = controller.result().cloned().unwrap();

    assert!(controller.share_link(&result).await);
    assert_eq!(
        controller.notifications().latest().unwrap().message,
        "Link copied to clipboard"
    );
}

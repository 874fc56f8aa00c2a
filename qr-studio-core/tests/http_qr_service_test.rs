#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! `HttpQrService` 集成测试（本地桩服务）

mod common;

use std::time::Duration;

use common::{CannedResponse, StubServer};
use qr_studio_core::{HttpQrService, ImageSize, QrService, StudioError};

fn service(server: &StubServer, timeout: Duration) -> HttpQrService {
    HttpQrService::new(server.url("/v1/create-qr-code/"), ImageSize::default(), timeout).unwrap()
}

#[tokio::test]
async fn generate_returns_image_url_and_latency() {
    let server = StubServer::start(CannedResponse::png()).await;
    let svc = service(&server, Duration::from_secs(5));

    let image = svc.generate("https://example.com").await.unwrap();

    assert!(image.latency_ms >= 1);
    assert!(image.image_url.contains("data=https%3A%2F%2Fexample.com"));
    assert!(url::Url::parse(&image.image_url).is_ok());
    assert_eq!(server.hits(), 1);

    let lines = server.request_lines().await;
    assert_eq!(
        lines[0],
        "GET /v1/create-qr-code/?size=300x300&data=https%3A%2F%2Fexample.com HTTP/1.1"
    );
}

#[tokio::test]
async fn non_success_status_is_http_error() {
    let server = StubServer::start(CannedResponse::status(500)).await;
    let svc = service(&server, Duration::from_secs(5));

    let err = svc.generate("https://example.com").await.unwrap_err();
    match err {
        StudioError::HttpStatus { status, ref url } => {
            assert_eq!(status, 500);
            assert!(url.starts_with(&server.base_url));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!err.is_expected());
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn non_image_body_is_rejected() {
    let server = StubServer::start(CannedResponse::html()).await;
    let svc = service(&server, Duration::from_secs(5));

    let err = svc.generate("https://example.com").await.unwrap_err();
    assert!(matches!(err, StudioError::UnexpectedContent(_)));
}

#[tokio::test]
async fn content_type_is_matched_case_insensitively() {
    let server =
        StubServer::start(CannedResponse::png().with_content_type("Image/PNG")).await;
    let svc = service(&server, Duration::from_secs(5));

    let image = svc.generate("https://example.com").await.unwrap();
    assert!(image.image_url.contains("data=https%3A%2F%2Fexample.com"));
}

#[tokio::test]
async fn slow_service_times_out() {
    let server =
        StubServer::start(CannedResponse::png().delayed(Duration::from_secs(3))).await;
    let svc = service(&server, Duration::from_millis(200));

    let err = svc.generate("https://example.com").await.unwrap_err();
    assert!(matches!(err, StudioError::Timeout(200)), "{err:?}");
    assert_eq!(err.to_string(), "Request timed out after 200ms");
}

#[tokio::test]
async fn unreachable_service_is_request_error() {
    let svc = HttpQrService::new(
        "http://127.0.0.1:9/create",
        ImageSize::default(),
        Duration::from_secs(2),
    )
    .unwrap();

    let err = svc.generate("x").await.unwrap_err();
    assert!(
        matches!(err, StudioError::Request(_) | StudioError::Timeout(_)),
        "{err:?}"
    );
    assert!(!err.is_expected());
}

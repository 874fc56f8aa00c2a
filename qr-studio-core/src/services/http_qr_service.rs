//! HTTP client for the external QR image endpoint.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use url::Url;

use crate::config::StudioConfig;
use crate::error::{StudioError, StudioResult};
use crate::traits::QrService;
use crate::types::{ImageSize, QrImage};

/// Client for `GET <endpoint>?size=WxH&data=<url-encoded-target>`.
///
/// No authentication, no retries. One `generate` call is one request.
#[derive(Debug, Clone)]
pub struct HttpQrService {
    client: Client,
    endpoint: String,
    size: ImageSize,
    timeout_ms: u64,
}

impl HttpQrService {
    /// Create a client for `endpoint`; fails if the endpoint is not an absolute URL.
    pub fn new(endpoint: impl Into<String>, size: ImageSize, timeout: Duration) -> StudioResult<Self> {
        let endpoint = endpoint.into();
        Url::parse(&endpoint)
            .map_err(|e| StudioError::Config(format!("Invalid QR endpoint {endpoint}: {e}")))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StudioError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint,
            size,
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        })
    }

    pub fn from_config(config: &StudioConfig) -> StudioResult<Self> {
        Self::new(
            config.endpoint.clone(),
            config.image_size,
            config.request_timeout(),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Image URL for `target`; this is also the URL the service is called with.
    pub fn image_url(&self, target: &str) -> String {
        let separator = if self.endpoint.ends_with('?') || self.endpoint.ends_with('&') {
            ""
        } else if self.endpoint.contains('?') {
            "&"
        } else {
            "?"
        };
        format!(
            "{}{separator}size={}&data={}",
            self.endpoint,
            self.size,
            urlencoding::encode(target)
        )
    }

    fn map_transport_error(&self, err: &reqwest::Error) -> StudioError {
        if err.is_timeout() {
            StudioError::Timeout(self.timeout_ms)
        } else {
            StudioError::Request(format!("QR request failed: {err}"))
        }
    }
}

/// MIME type names are case-insensitive
fn is_image_type(content_type: &str) -> bool {
    content_type
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
}

#[async_trait]
impl QrService for HttpQrService {
    async fn generate(&self, target: &str) -> StudioResult<QrImage> {
        let image_url = self.image_url(target);
        debug!("[QR] GET {image_url}");
        let start = Instant::now();

        let response = self
            .client
            .get(&image_url)
            .send()
            .await
            .map_err(|e| self.map_transport_error(&e))?;

        let status = response.status();
        debug!("[QR] Response Status: {}", status.as_u16());
        if !status.is_success() {
            return Err(StudioError::HttpStatus {
                status: status.as_u16(),
                url: image_url,
            });
        }

        if let Some(content_type) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            if !is_image_type(content_type) {
                return Err(StudioError::UnexpectedContent(format!(
                    "expected an image, got {content_type}"
                )));
            }
        }

        // Latency covers the full image transfer
        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_transport_error(&e))?;
        if body.is_empty() {
            return Err(StudioError::UnexpectedContent("empty image body".to_string()));
        }

        // u128 -> u64: elapsed millis for an HTTP request will never exceed u64::MAX
        #[allow(clippy::cast_possible_truncation)]
        let latency_ms = (start.elapsed().as_millis() as u64).max(1);

        debug!(
            "[QR] Generated {} bytes in {latency_ms}ms for {target}",
            body.len()
        );

        Ok(QrImage {
            image_url,
            latency_ms,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn service(endpoint: &str) -> HttpQrService {
        HttpQrService::new(endpoint, ImageSize::default(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn image_url_encodes_target() {
        let svc = service("https://api.qrserver.com/v1/create-qr-code/");
        let url = svc.image_url("https://example.com");
        assert_eq!(
            url,
            "https://api.qrserver.com/v1/create-qr-code/?size=300x300&data=https%3A%2F%2Fexample.com"
        );

        let parsed = Url::parse(&url).unwrap();
        let data: Vec<_> = parsed.query_pairs().filter(|(k, _)| k == "data").collect();
        assert_eq!(data[0].1, "https://example.com");
    }

    #[test]
    fn image_url_appends_to_existing_query() {
        let svc = service("https://qr.test/render?format=png");
        assert_eq!(
            svc.image_url("a b&c"),
            "https://qr.test/render?format=png&size=300x300&data=a%20b%26c"
        );

        let svc = service("https://qr.test/render?");
        assert!(svc.image_url("x").starts_with("https://qr.test/render?size="));
    }

    #[test]
    fn image_url_uses_configured_size() {
        let svc = HttpQrService::new(
            "https://qr.test/",
            ImageSize {
                width: 512,
                height: 256,
            },
            Duration::from_secs(5),
        )
        .unwrap();
        assert!(svc.image_url("x").contains("size=512x256"));
    }

    #[test]
    fn image_type_check_ignores_case() {
        assert!(is_image_type("image/png"));
        assert!(is_image_type("Image/PNG"));
        assert!(is_image_type("IMAGE/svg+xml; charset=utf-8"));
        assert!(!is_image_type("text/html"));
        assert!(!is_image_type("image"));
    }

    #[test]
    fn rejects_relative_endpoint() {
        let err = HttpQrService::new("/create-qr-code", ImageSize::default(), Duration::from_secs(5))
            .unwrap_err();
        assert!(matches!(err, StudioError::Config(_)));
    }
}

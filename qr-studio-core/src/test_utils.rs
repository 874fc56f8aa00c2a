//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::controller::GenerationController;
use crate::error::{StudioError, StudioResult};
use crate::traits::{Clipboard, Downloader, QrService};
use crate::types::{GenerationResult, QrImage};

// ===== MockQrService =====

pub struct MockQrService {
    calls: RwLock<Vec<String>>,
    /// 如果 Some，generate 时返回此错误
    failure: RwLock<Option<StudioError>>,
}

impl MockQrService {
    pub fn new() -> Self {
        Self {
            calls: RwLock::new(Vec::new()),
            failure: RwLock::new(None),
        }
    }

    pub async fn fail_with(&self, err: Option<StudioError>) {
        *self.failure.write().await = err;
    }

    /// 按调用顺序记录的 target
    pub async fn calls(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }
}

#[async_trait]
impl QrService for MockQrService {
    async fn generate(&self, target: &str) -> StudioResult<QrImage> {
        self.calls.write().await.push(target.to_string());
        if let Some(ref err) = *self.failure.read().await {
            return Err(err.clone());
        }
        Ok(QrImage {
            image_url: format!(
                "https://qr.test/create?size=300x300&data={}",
                urlencoding::encode(target)
            ),
            latency_ms: 42,
        })
    }
}

// ===== MockClipboard =====

pub struct MockClipboard {
    writes: RwLock<Vec<String>>,
    failure: RwLock<Option<StudioError>>,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self {
            writes: RwLock::new(Vec::new()),
            failure: RwLock::new(None),
        }
    }

    pub async fn fail_with(&self, err: Option<StudioError>) {
        *self.failure.write().await = err;
    }

    pub async fn writes(&self) -> Vec<String> {
        self.writes.read().await.clone()
    }
}

#[async_trait]
impl Clipboard for MockClipboard {
    async fn write_text(&self, text: &str) -> StudioResult<()> {
        if let Some(ref err) = *self.failure.read().await {
            return Err(err.clone());
        }
        self.writes.write().await.push(text.to_string());
        Ok(())
    }
}

// ===== MockDownloader =====

pub struct MockDownloader {
    downloads: RwLock<Vec<(String, String)>>,
    failure: RwLock<Option<StudioError>>,
}

impl MockDownloader {
    pub fn new() -> Self {
        Self {
            downloads: RwLock::new(Vec::new()),
            failure: RwLock::new(None),
        }
    }

    pub async fn fail_with(&self, err: Option<StudioError>) {
        *self.failure.write().await = err;
    }

    /// `(image_url, filename)` 记录
    pub async fn downloads(&self) -> Vec<(String, String)> {
        self.downloads.read().await.clone()
    }
}

#[async_trait]
impl Downloader for MockDownloader {
    async fn download(&self, image_url: &str, filename: &str) -> StudioResult<PathBuf> {
        if let Some(ref err) = *self.failure.read().await {
            return Err(err.clone());
        }
        self.downloads
            .write()
            .await
            .push((image_url.to_string(), filename.to_string()));
        Ok(PathBuf::from("/downloads").join(filename))
    }
}

// ===== 工厂方法 =====

pub struct TestContext {
    pub controller: GenerationController,
    pub qr_service: Arc<MockQrService>,
    pub clipboard: Arc<MockClipboard>,
    pub downloader: Arc<MockDownloader>,
}

/// 创建使用 mock 协作者的控制器（分享前缀带尾部斜杠）
pub fn create_test_controller() -> TestContext {
    let qr_service = Arc::new(MockQrService::new());
    let clipboard = Arc::new(MockClipboard::new());
    let downloader = Arc::new(MockDownloader::new());

    let controller = GenerationController::new(
        qr_service.clone(),
        clipboard.clone(),
        downloader.clone(),
        "http://localhost:3000/",
        Duration::from_secs(3),
    );

    TestContext {
        controller,
        qr_service,
        clipboard,
        downloader,
    }
}

/// 指定 id 的生成结果
pub fn sample_result(id: &str) -> GenerationResult {
    GenerationResult {
        id: id.to_string(),
        image_url: "https://qr.test/create?size=300x300&data=https%3A%2F%2Fexample.com"
            .to_string(),
        latency_ms: 42,
        target: "https://example.com".to_string(),
        created_at: Utc::now(),
    }
}

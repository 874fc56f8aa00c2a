//! 测试辅助模块
//!
//! 使用 mock 协作者创建 App，并提供驱动 update() 的便捷函数。

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use qr_studio_core::{
    Clipboard, Downloader, GenerationController, QrImage, QrService, StudioConfig, StudioError,
    StudioResult,
};

use super::update;
use crate::backend::{BackendEvent, Job};
use crate::message::{AppMessage, FormMessage};
use crate::model::App;

#[derive(Default)]
pub struct MockQrService {
    calls: Mutex<Vec<String>>,
    failure: Mutex<Option<StudioError>>,
}

#[async_trait]
impl QrService for MockQrService {
    async fn generate(&self, target: &str) -> StudioResult<QrImage> {
        self.calls.lock().unwrap().push(target.to_string());
        if let Some(err) = self.failure.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(QrImage {
            image_url: format!(
                "https://qr.test/create?size=300x300&data={}",
                target.replace(':', "%3A").replace('/', "%2F")
            ),
            latency_ms: 7,
        })
    }
}

#[derive(Default)]
pub struct MockClipboard {
    writes: Mutex<Vec<String>>,
}

#[async_trait]
impl Clipboard for MockClipboard {
    async fn write_text(&self, text: &str) -> StudioResult<()> {
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct MockDownloader {
    failure: Mutex<Option<StudioError>>,
}

#[async_trait]
impl Downloader for MockDownloader {
    async fn download(&self, _image_url: &str, filename: &str) -> StudioResult<PathBuf> {
        if let Some(err) = self.failure.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(PathBuf::from("/downloads").join(filename))
    }
}

/// mock 协作者的句柄
#[derive(Default, Clone)]
pub struct Mocks {
    qr: Arc<MockQrService>,
    clipboard: Arc<MockClipboard>,
    downloader: Arc<MockDownloader>,
}

impl Mocks {
    pub fn qr_calls(&self) -> usize {
        self.qr.calls.lock().unwrap().len()
    }

    pub fn fail_qr(&self, err: StudioError) {
        *self.qr.failure.lock().unwrap() = Some(err);
    }

    pub fn clipboard_writes(&self) -> Vec<String> {
        self.clipboard.writes.lock().unwrap().clone()
    }

    pub fn fail_download(&self, err: StudioError) {
        *self.downloader.failure.lock().unwrap() = Some(err);
    }
}

/// 使用默认配置与给定 mock 创建 App
pub fn test_app_with(mocks: Mocks) -> (App, Mocks) {
    let config = StudioConfig::default();
    let controller = GenerationController::new(
        mocks.qr.clone(),
        mocks.clipboard.clone(),
        mocks.downloader.clone(),
        config.share_origin.clone(),
        config.notification_ttl(),
    );
    (App::new(controller, &config), mocks)
}

pub fn test_app() -> App {
    test_app_with(Mocks::default()).0
}

/// 在当前焦点输入框中逐字输入
pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        update(app, AppMessage::Form(FormMessage::Input(ch)));
    }
}

/// 同步执行后台任务
pub fn run_job(job: Job) -> BackendEvent {
    tokio_test::block_on(job.run())
}

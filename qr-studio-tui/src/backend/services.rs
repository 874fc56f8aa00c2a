//! 根据配置组装控制器

use std::sync::Arc;

use anyhow::{Context, Result};
use qr_studio_core::{
    FileDownloader, GenerationController, HttpQrService, StudioConfig, SystemClipboard,
};

/// 使用生产实现创建 `GenerationController`
pub fn build_controller(config: &StudioConfig) -> Result<GenerationController> {
    let qr_service = HttpQrService::from_config(config).context("invalid QR service settings")?;
    let downloader = FileDownloader::from_config(config).context("invalid download settings")?;
    let clipboard = SystemClipboard::new();

    log::info!(
        "QR service {} ({}), downloads to {}",
        qr_service.endpoint(),
        config.image_size,
        downloader.dir().display()
    );

    Ok(GenerationController::new(
        Arc::new(qr_service),
        Arc::new(clipboard),
        Arc::new(downloader),
        config.share_origin.clone(),
        config.notification_ttl(),
    ))
}

//! 下载抽象 Trait

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::StudioResult;

/// 文件保存设施
#[async_trait]
pub trait Downloader: Send + Sync {
    /// 将 `image_url` 指向的图片保存为 `filename`
    ///
    /// # Returns
    /// * `Ok(path)` - 实际写入的文件路径
    async fn download(&self, image_url: &str, filename: &str) -> StudioResult<PathBuf>;
}

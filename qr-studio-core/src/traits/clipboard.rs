//! 剪贴板抽象 Trait

use async_trait::async_trait;

use crate::error::StudioResult;

/// 只写文本剪贴板
///
/// 写入可能失败（权限被拒绝、无可用剪贴板工具等），
/// 调用方负责将失败转换为通知，不得向上抛出。
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// 写入文本
    async fn write_text(&self, text: &str) -> StudioResult<()>;
}

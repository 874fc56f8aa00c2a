//! QR 图片服务抽象 Trait

use async_trait::async_trait;

use crate::error::StudioResult;
use crate::types::QrImage;

/// QR 图片服务 Trait
///
/// 平台实现:
/// - 生产环境: `HttpQrService`（`GET <endpoint>?size=WxH&data=<target>`）
/// - 测试: `MockQrService`
#[async_trait]
pub trait QrService: Send + Sync {
    /// 为目标字符串生成二维码图片
    ///
    /// 每次调用恰好发起一次网络请求，不做重试。
    ///
    /// # Arguments
    /// * `target` - 需要编码的字符串（通常是 URL）
    async fn generate(&self, target: &str) -> StudioResult<QrImage>;
}

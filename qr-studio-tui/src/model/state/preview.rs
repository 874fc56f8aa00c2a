//! 终端预览缓存

/// 某个结果的预览渲染
///
/// 结果 id 或主题变化时才重新渲染。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewState {
    pub result_id: String,
    pub inverted: bool,
    /// 渲染成功的字符画，或失败原因
    pub content: Result<String, String>,
}

impl PreviewState {
    pub fn is_for(&self, result_id: &str, inverted: bool) -> bool {
        self.result_id == result_id && self.inverted == inverted
    }
}

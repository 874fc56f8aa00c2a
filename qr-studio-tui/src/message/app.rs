//! 应用主消息枚举

use super::{FormMessage, ModalMessage};
use crate::backend::BackendEvent;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 焦点移到下一个控件
    FocusNext,

    /// 焦点移到上一个控件
    FocusPrev,

    /// 表单相关消息
    Form(FormMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 提交表单
    Submit,

    /// 下载当前结果
    Download,

    /// 复制分享链接
    Share,

    /// 切换语言
    ToggleLanguage,

    /// 切换主题
    ToggleTheme,

    /// 显示帮助
    ShowHelp,

    /// Esc：关闭弹窗或清除字段错误
    Escape,

    /// 后台任务完成
    Backend(BackendEvent),

    /// 主循环时钟
    Tick,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}

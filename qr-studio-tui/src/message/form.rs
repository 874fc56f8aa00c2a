//! 表单消息类型

/// 表单面板内的消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// 输入字符
    Input(char),

    /// 粘贴文本（控制字符会被丢弃）
    Paste(String),

    /// 删除光标前的字符（Backspace）
    Backspace,

    /// 删除光标后的字符（Delete）
    Delete,

    /// 光标左移
    CursorLeft,

    /// 光标右移
    CursorRight,

    /// 光标移到行首
    CursorHome,

    /// 光标移到行尾
    CursorEnd,

    /// 选中上一个提示词
    PrevSuggestion,

    /// 选中下一个提示词
    NextSuggestion,

    /// 使用选中的提示词
    ApplySuggestion,
}

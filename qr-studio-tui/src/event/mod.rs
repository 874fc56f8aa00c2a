//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         pub mod keymap;     // 快捷键映射（状态栏与帮助也读取按键名）
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长等待 timeout
//!
//!         · handle_event    事件分发
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断：
//!                 - 有弹窗打开时，调用 handle_modal_keys 处理
//!                 - 全局快捷键（Ctrl+C、Alt+字母、F1、Tab），就地处理
//!                 - 焦点位于输入框，调用 handle_text_input_keys 处理
//!                 - 焦点位于提示词建议，调用 handle_suggestion_keys 处理
//!
//!         常用键盘映射：
//!             Tab / Shift+Tab → FocusNext / FocusPrev
//!             Enter           → Submit（焦点在提示词建议时为 ApplySuggestion）
//!             ←/→             → 光标移动 / 切换提示词建议
//!             Alt+D / Alt+S   → Download / Share
//!             Alt+L / Alt+T   → 切换语言 / 切换主题
//!             F1 / ?          → ShowHelp（? 仅在输入框外有效）
//!             Esc             → Escape
//!

mod handler;
pub mod keymap;

pub use handler::{handle_event, poll_event};

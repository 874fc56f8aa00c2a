//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁
//! 所有的用户操作和后台结果都通过 Message 来表达。
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod form;           // 表单面板内的子消息
//!         mod modal;          // 弹窗子消息
//!
//!
//!     消息来源有三种：
//!         · 键盘事件        event/handler.rs 翻译而来
//!         · 后台任务结果    AppMessage::Backend(BackendEvent)
//!         · 时钟            主循环每一轮发送 AppMessage::Tick
//!

mod app;
mod form;
mod modal;

pub use app::AppMessage;
pub use form::FormMessage;
pub use modal::ModalMessage;

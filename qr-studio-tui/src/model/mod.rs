//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 表单的值、校验结果与请求状态都由 `GenerationController` 持有，
//! 这里只补充界面自己的状态（焦点、光标、弹窗、预览缓存等）。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Url / Prompt / Suggestions / Generate）
//!
//!         pub mod state;      // 输入框、提示词、弹窗、预览
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 焦点管理（FormFocus）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Tab / Shift+Tab 按以下顺序循环：
//!         Url → Prompt → Suggestions → Generate → Url ...
//!
//!     数据流：
//!         用户按 Tab
//!             ↓
//!         event/handler.rs 返回 AppMessage::FocusNext
//!             ↓
//!         update/mod.rs 执行 app.focus = app.focus.next()
//!             ↓
//!         view 层根据 app.focus 设置边框颜色与光标位置
//!

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::FormFocus;

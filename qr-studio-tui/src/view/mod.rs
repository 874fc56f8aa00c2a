//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，从不修改状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 标题栏 + 表单/结果双栏 + 状态栏
//!         mod components;     // 状态栏、通知、弹窗
//!         mod pages;          // 表单面板、结果面板
//!         pub mod theme;      // 颜色方案（深色/浅色）
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;

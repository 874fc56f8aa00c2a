//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//! 终端的初始化与恢复，以及日志输出。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 日志写入按天滚动的文件
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     日志：
//!         终端界面占用了 stdout，日志只能写到文件里。
//!         核心库使用 `log` 宏，这里通过 tracing-subscriber 的 log 桥接一并收集，
//!         日志级别取自配置中的 `logLevel`（EnvFilter 语法）。
//!
//!
//!     恢复终端：
//!         无论程序是正常退出还是发生错误，都必须调用 `restore_terminal`！
//!         否则终端会保持在原始模式，用户输入不会正常显示。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};

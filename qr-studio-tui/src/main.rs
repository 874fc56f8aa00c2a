//! QR Studio TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 异步任务执行 (`backend/`)
//!
//!
//! main.rs
//! QR Studio TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     StudioConfig::load()    // 读取配置（失败时回退到默认值）
//!     init_logging()          // 日志写入文件，stdout 留给终端界面
//!     Backend::new()          // 创建 tokio 运行时与结果通道
//!     init_terminal()         // 初始化终端
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;
use qr_studio_core::StudioConfig;

use backend::Backend;
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 加载配置
    let (config, config_error) = match StudioConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (StudioConfig::default(), Some(e)),
    };

    // 2. 初始化日志（guard 必须活到程序结束）
    let _log_guard = init_logging(&config)?;
    if let Some(ref e) = config_error {
        log::warn!("Falling back to default configuration: {e}");
    }
    log::info!("Starting QR Studio with endpoint {}", config.endpoint);

    // 3. 创建后端与应用实例
    let mut backend = Backend::new()?;
    let controller = backend::build_controller(&config)?;
    let mut app = model::App::new(controller, &config);
    if config_error.is_some() {
        app.set_status(i18n::t().status.config_fallback);
    } else {
        // 读取失败时不覆盖原文件
        app.config_path = StudioConfig::default_path();
    }

    // 4. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &mut backend);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    log::info!("QR Studio exited");
    result
}

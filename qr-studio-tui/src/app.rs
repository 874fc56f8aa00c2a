//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     while let Some(e) = backend.try_recv() {        // 应用已完成的异步任务
//!         update::update(&mut app , Backend(e))
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新状态，可能返回一个任务
//!     }
//!     update::update(&mut app , Tick)                 // 通知过期、加载动画
//! }
//!
//! update 返回的任务交给 Backend 在 tokio 运行时上执行，
//! 结果通过通道送回，在下一轮循环中应用。

use std::time::Duration;

use anyhow::Result;

use crate::backend::Backend;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, backend: &mut Backend) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 应用后台任务结果
        while let Some(event) = backend.try_recv() {
            dispatch(app, backend, AppMessage::Backend(event));
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态
            dispatch(app, backend, msg);
        }

        // 7. 时钟
        dispatch(app, backend, AppMessage::Tick);
    }

    Ok(())
}

fn dispatch(app: &mut App, backend: &Backend, msg: AppMessage) {
    if let Some(job) = update::update(app, msg) {
        backend.spawn(job);
    }
}

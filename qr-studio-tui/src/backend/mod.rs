//!
//! src/backend/mod.rs
//! Backend 层：异步任务执行
//!
//! Backend 层与 UI 完全解耦。UI 线程只负责渲染和状态更新，
//! 网络与文件操作都以任务的形式交给 Backend：
//!
//!     Update 层返回 Job
//!         ↓
//!     Backend::spawn(job)          // 在 tokio 运行时上执行
//!         ↓
//!     完成后通过 mpsc 通道发送 BackendEvent
//!         ↓
//!     主循环 try_recv() 取出结果，作为 AppMessage::Backend 交给 Update 层
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod services;       // 根据配置组装 GenerationController
//!
//! 状态只在 UI 线程修改，任务本身不持有任何 UI 状态。
//! 任务 panic 时不会发送结果，生成请求由主循环的 Tick 回收。

mod services;

use std::path::PathBuf;

use anyhow::{Context, Result};
use qr_studio_core::{
    GenerationJob, GenerationOutcome, SideEffectJob, SideEffectOutcome, StudioConfig, StudioError,
    StudioResult,
};
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

pub use services::build_controller;

/// 待执行的异步任务
#[derive(Debug)]
pub enum Job {
    /// 调用 QR 服务
    Generate(GenerationJob),
    /// 下载或分享
    SideEffect(SideEffectJob),
    /// 保存配置文件
    SaveConfig {
        config: Box<StudioConfig>,
        path: PathBuf,
    },
}

/// 任务完成事件
#[derive(Debug, Clone)]
pub enum BackendEvent {
    Generated(GenerationOutcome),
    SideEffect(SideEffectOutcome),
    ConfigSaved(StudioResult<()>),
}

impl Job {
    /// 执行任务
    pub async fn run(self) -> BackendEvent {
        match self {
            Job::Generate(job) => BackendEvent::Generated(job.run().await),
            Job::SideEffect(job) => BackendEvent::SideEffect(job.run().await),
            Job::SaveConfig { config, path } => {
                let result = tokio::task::spawn_blocking(move || config.save_to(&path))
                    .await
                    .unwrap_or_else(|e| Err(StudioError::Io(e.to_string())));
                BackendEvent::ConfigSaved(result)
            }
        }
    }
}

/// 任务执行器
pub struct Backend {
    runtime: Runtime,
    tx: UnboundedSender<BackendEvent>,
    rx: UnboundedReceiver<BackendEvent>,
}

impl Backend {
    /// 创建多线程运行时与结果通道
    pub fn new() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("qr-studio-worker")
            .enable_all()
            .build()
            .context("failed to start the async runtime")?;
        let (tx, rx) = mpsc::unbounded_channel();

        Ok(Self { runtime, tx, rx })
    }

    /// 在运行时上执行任务，结果稍后由 `try_recv` 取出
    pub fn spawn(&self, job: Job) {
        log::debug!("Spawning {job:?}");
        let tx = self.tx.clone();
        let handle = self.runtime.spawn(job.run());
        self.runtime.spawn(async move {
            match handle.await {
                Ok(event) => {
                    // 接收端只会在退出时关闭
                    let _ = tx.send(event);
                }
                Err(e) => log::error!("Backend job did not finish: {e}"),
            }
        });
    }

    /// 取出一个已完成的结果（不阻塞）
    pub fn try_recv(&mut self) -> Option<BackendEvent> {
        self.rx.try_recv().ok()
    }
}

//! 日志初始化

use anyhow::{Context, Result};
use qr_studio_core::StudioConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志文件名前缀，滚动后追加日期
const LOG_FILE_PREFIX: &str = "qr-studio.log";

/// 初始化文件日志
///
/// 返回的 guard 在程序退出前不能被丢弃，否则缓冲中的日志会丢失。
pub fn init_logging(config: &StudioConfig) -> Result<WorkerGuard> {
    let log_dir = StudioConfig::log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_new(&config.log_level)
        .or_else(|_| EnvFilter::try_new("info"))
        .context("invalid log level")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()
        .context("failed to install the log subscriber")?;

    tracing::debug!("Logging to {}", log_dir.display());
    Ok(guard)
}

//! 应用配置
//!
//! 配置文件为 JSON，位于 `<config_dir>/qr-studio/config.json`。
//! 文件不存在时使用默认值；所有字段都可以省略。

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{StudioError, StudioResult};
use crate::types::ImageSize;

/// 应用目录名
pub const APP_DIR_NAME: &str = "qr-studio";

/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "config.json";

/// 默认 QR 图片服务
pub const DEFAULT_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// 默认分享链接前缀
pub const DEFAULT_SHARE_ORIGIN: &str = "http://localhost:3000";

/// 界面语言
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "zh-CN")]
    ZhCn,
}

impl Language {
    /// 语言代码
    pub fn code(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::ZhCn => "zh-CN",
        }
    }

    /// 显示名称（使用该语言本身书写）
    pub fn display_name(self) -> &'static str {
        match self {
            Self::EnUs => "English",
            Self::ZhCn => "简体中文",
        }
    }

    /// 循环切换到下一种语言
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::EnUs => Self::ZhCn,
            Self::ZhCn => Self::EnUs,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 主题名称
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl ThemeName {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// QR Studio 配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StudioConfig {
    /// QR 图片服务地址
    pub endpoint: String,
    /// 请求的图片尺寸
    pub image_size: ImageSize,
    /// 分享链接前缀，链接形如 `<origin>/start/<id>`
    pub share_origin: String,
    /// 下载目录，未设置时使用系统下载目录
    pub download_dir: Option<PathBuf>,
    /// 请求超时（秒）
    pub request_timeout_secs: u64,
    /// 通知显示时长（秒）
    pub notification_ttl_secs: u64,
    pub language: Language,
    pub theme: ThemeName,
    /// 日志过滤（`EnvFilter` 语法）
    pub log_level: String,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            image_size: ImageSize::default(),
            share_origin: DEFAULT_SHARE_ORIGIN.to_string(),
            download_dir: None,
            request_timeout_secs: 15,
            notification_ttl_secs: 3,
            language: Language::default(),
            theme: ThemeName::default(),
            log_level: "info".to_string(),
        }
    }
}

impl StudioConfig {
    /// 默认配置文件路径
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// 从默认路径加载配置
    pub fn load() -> StudioResult<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("[Config] No config directory on this platform, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// 从指定路径加载配置，文件不存在时返回默认值
    pub fn load_from(path: &Path) -> StudioResult<Self> {
        if !path.exists() {
            debug!("[Config] {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| StudioError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;

        info!("[Config] Loaded {}", path.display());
        Ok(config)
    }

    /// 保存配置到指定路径
    pub fn save_to(&self, path: &Path) -> StudioResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| StudioError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// 校验配置
    pub fn validate(&self) -> StudioResult<()> {
        let endpoint = Url::parse(&self.endpoint)
            .map_err(|e| StudioError::Config(format!("invalid endpoint {}: {e}", self.endpoint)))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(StudioError::Config(format!(
                "endpoint must be http(s): {}",
                self.endpoint
            )));
        }

        Url::parse(&self.share_origin).map_err(|e| {
            StudioError::Config(format!("invalid share origin {}: {e}", self.share_origin))
        })?;

        if self.image_size.width == 0 || self.image_size.height == 0 {
            return Err(StudioError::Config("image size must be non-zero".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(StudioError::Config("request timeout must be non-zero".to_string()));
        }
        if self.notification_ttl_secs == 0 {
            return Err(StudioError::Config("notification ttl must be non-zero".to_string()));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_secs(self.notification_ttl_secs)
    }

    /// 实际使用的下载目录：配置值 → 系统下载目录 → 当前目录
    pub fn resolved_download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// 日志目录 `<data_local_dir>/qr-studio/logs`
    pub fn log_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(APP_DIR_NAME)
            .join("logs")
    }
}

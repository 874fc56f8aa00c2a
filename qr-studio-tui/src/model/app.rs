//! 应用主状态结构

use std::path::PathBuf;

use qr_studio_core::{GenerationController, ImageSize, Language, StudioConfig, ThemeName};

use super::state::{ModalState, PreviewState, SuggestionsState, TextInput};
use super::FormFocus;
use crate::i18n;
use crate::view::theme;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点控件
    pub focus: FormFocus,

    /// 表单与请求生命周期
    pub controller: GenerationController,

    /// URL 输入框（光标）
    pub url_input: TextInput,

    /// 提示词输入框（光标）
    pub prompt_input: TextInput,

    /// 提示词建议
    pub suggestions: SuggestionsState,

    /// 当前结果的终端预览
    pub preview: Option<PreviewState>,

    /// 弹窗状态
    pub modal: ModalState,

    /// 当前语言
    pub language: Language,

    /// 当前主题
    pub theme: ThemeName,

    /// 请求的图片尺寸（仅用于展示）
    pub image_size: ImageSize,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 主循环计数，驱动加载动画
    pub tick: u64,

    /// 当前配置（语言与主题切换会写回）
    pub config: StudioConfig,

    /// 配置文件路径，为 None 时不保存
    pub config_path: Option<PathBuf>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(controller: GenerationController, config: &StudioConfig) -> Self {
        i18n::set_language(config.language);
        theme::set_theme(config.theme);

        Self {
            should_quit: false,
            focus: FormFocus::default(),
            controller,
            url_input: TextInput::new(),
            prompt_input: TextInput::new(),
            suggestions: SuggestionsState::new(),
            preview: None,
            modal: ModalState::new(),
            language: config.language,
            theme: config.theme,
            image_size: config.image_size,
            status_message: None,
            tick: 0,
            config: config.clone(),
            config_path: None,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 3. **键盘提示归 `hints.*`**：按键名称和操作提示
//! 4. **状态栏的临时消息归 `status.*`**

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 表单面板文本
    pub form: FormTexts,
    /// 结果面板文本
    pub result: ResultTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
    /// 状态栏临时消息
    pub status: StatusTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub tagline: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows_lr: &'static str, // "←→"
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub next_field: &'static str, // "下一项" / "Next field"
    pub generate: &'static str,
    pub choose: &'static str, // "选择" / "Choose"
    pub apply: &'static str,
    pub download: &'static str,
    pub share: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 面板文本
// ============================================================================

/// 表单面板文本
pub struct FormTexts {
    pub title: &'static str,
    pub url_label: &'static str,
    pub url_placeholder: &'static str,
    pub prompt_label: &'static str,
    pub prompt_placeholder: &'static str,
    pub suggestions_label: &'static str,
    pub generate: &'static str,
    pub generating: &'static str,
}

/// 结果面板文本
pub struct ResultTexts {
    pub title: &'static str,
    pub idle_hint: &'static str,
    pub loading: &'static str,
    pub failed_title: &'static str,
    pub retry_hint: &'static str,
    pub id: &'static str,
    pub target: &'static str,
    pub image_url: &'static str,
    pub latency: &'static str,
    pub created_at: &'static str,
    pub share_link: &'static str,
    pub size: &'static str,
    pub preview_unavailable: &'static str,
    pub preview_too_small: &'static str,
}

/// 状态栏文本
pub struct StatusBarTexts {
    pub language: &'static str,
    pub theme: &'static str,
    pub theme_dark: &'static str,
    pub theme_light: &'static str,
}

/// 状态栏临时消息
pub struct StatusTexts {
    pub config_fallback: &'static str,
    pub config_save_failed: &'static str,
    pub busy: &'static str,
    pub fix_errors: &'static str,
    pub nothing_to_download: &'static str,
    pub nothing_to_share: &'static str,
    pub downloading: &'static str,
    pub sharing: &'static str,
    pub language_changed: &'static str,
}

// ============================================================================
// 帮助弹窗
// ============================================================================

/// 帮助弹窗文本
pub struct HelpTexts {
    pub title: &'static str,
    pub global_shortcuts: &'static str,
    pub form_shortcuts: &'static str,
    pub close_hint: &'static str,
    /// 快捷键动作描述
    pub actions: HelpActionTexts,
}

/// 帮助弹窗快捷键动作描述
pub struct HelpActionTexts {
    pub switch_focus: &'static str,
    pub submit: &'static str,
    pub download: &'static str,
    pub share: &'static str,
    pub language: &'static str,
    pub theme: &'static str,
    pub help: &'static str,
    pub back: &'static str,
    pub quit: &'static str,
    pub pick_suggestion: &'static str,
    pub edit_text: &'static str,
}

//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
    /// 界面上显示的按键名
    pub label: &'static str,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode, label: &'static str) -> Self {
        Self {
            modifiers,
            code,
            label,
        }
    }

    pub const fn key(code: KeyCode, label: &'static str) -> Self {
        Self::new(KeyModifiers::NONE, code, label)
    }

    pub const fn alt(code: KeyCode, label: &'static str) -> Self {
        Self::new(KeyModifiers::ALT, code, label)
    }

    pub const fn ctrl(code: KeyCode, label: &'static str) -> Self {
        Self::new(KeyModifiers::CONTROL, code, label)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'), "Alt+q");
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'), "Ctrl+c");
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::F(1), "F1");
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc, "Esc");

    // 焦点
    pub const FOCUS_NEXT: KeyBinding = KeyBinding::key(KeyCode::Tab, "Tab");

    // 操作
    pub const SUBMIT: KeyBinding = KeyBinding::key(KeyCode::Enter, "Enter");
    pub const DOWNLOAD: KeyBinding = KeyBinding::alt(KeyCode::Char('d'), "Alt+d");
    pub const SHARE: KeyBinding = KeyBinding::alt(KeyCode::Char('s'), "Alt+s");

    // 偏好
    pub const LANGUAGE: KeyBinding = KeyBinding::alt(KeyCode::Char('l'), "Alt+l");
    pub const THEME: KeyBinding = KeyBinding::alt(KeyCode::Char('t'), "Alt+t");
}

//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, ModalMessage};
use crate::model::{App, FormFocus};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 粘贴的文本进入当前输入框
        Event::Paste(text) if app.focus.is_text_input() && !app.modal.is_open() => {
            AppMessage::Form(FormMessage::Paste(text))
        }
        // 终端窗口大小改变，下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局退出（弹窗打开时同样有效）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    if DefaultKeymap::HELP.matches(&key)
        || (!app.focus.is_text_input()
            && key.code == KeyCode::Char('?')
            && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT))
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Escape;
    }

    // Tab / Shift+Tab: 切换焦点
    if DefaultKeymap::FOCUS_NEXT.matches(&key) {
        return AppMessage::FocusNext;
    }
    if key.code == KeyCode::BackTab {
        return AppMessage::FocusPrev;
    }

    if DefaultKeymap::DOWNLOAD.matches(&key) {
        return AppMessage::Download;
    }
    if DefaultKeymap::SHARE.matches(&key) {
        return AppMessage::Share;
    }
    if DefaultKeymap::LANGUAGE.matches(&key) {
        return AppMessage::ToggleLanguage;
    }
    if DefaultKeymap::THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }

    // 根据焦点位置处理按键
    match app.focus {
        FormFocus::Url | FormFocus::Prompt => handle_text_input_keys(key),
        FormFocus::Suggestions => handle_suggestion_keys(key),
        FormFocus::Generate => {
            if DefaultKeymap::SUBMIT.matches(&key) {
                AppMessage::Submit
            } else {
                AppMessage::Noop
            }
        }
    }
}

/// 处理输入框中的按键
fn handle_text_input_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Enter: 提交
        KeyCode::Enter => AppMessage::Submit,

        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),
        KeyCode::Delete => AppMessage::Form(FormMessage::Delete),
        KeyCode::Left => AppMessage::Form(FormMessage::CursorLeft),
        KeyCode::Right => AppMessage::Form(FormMessage::CursorRight),
        KeyCode::Home => AppMessage::Form(FormMessage::CursorHome),
        KeyCode::End => AppMessage::Form(FormMessage::CursorEnd),

        // 字符输入（允许 Shift）
        KeyCode::Char(ch) => {
            if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
                AppMessage::Form(FormMessage::Input(ch))
            } else {
                AppMessage::Noop
            }
        }

        _ => AppMessage::Noop,
    }
}

/// 处理提示词建议中的按键
fn handle_suggestion_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ← 或 h: 上一个
        KeyCode::Left | KeyCode::Char('h') => AppMessage::Form(FormMessage::PrevSuggestion),
        // → 或 l: 下一个
        KeyCode::Right | KeyCode::Char('l') => AppMessage::Form(FormMessage::NextSuggestion),
        // Enter: 使用选中的提示词
        KeyCode::Enter => AppMessage::Form(FormMessage::ApplySuggestion),
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    // 帮助弹窗只响应关闭按键
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') => {
            AppMessage::Modal(ModalMessage::Close)
        }
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::update::test_support::test_app;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn question_mark_is_text_inside_inputs() {
        let mut app = test_app();
        app.focus = FormFocus::Url;
        let msg = handle_event(press(KeyCode::Char('?'), KeyModifiers::SHIFT), &app);
        assert!(matches!(msg, AppMessage::Form(FormMessage::Input('?'))));

        app.focus = FormFocus::Generate;
        let msg = handle_event(press(KeyCode::Char('?'), KeyModifiers::SHIFT), &app);
        assert!(matches!(msg, AppMessage::ShowHelp));
    }

    #[test]
    fn enter_depends_on_focus() {
        let mut app = test_app();
        app.focus = FormFocus::Prompt;
        assert!(matches!(
            handle_event(press(KeyCode::Enter, KeyModifiers::NONE), &app),
            AppMessage::Submit
        ));

        app.focus = FormFocus::Suggestions;
        assert!(matches!(
            handle_event(press(KeyCode::Enter, KeyModifiers::NONE), &app),
            AppMessage::Form(FormMessage::ApplySuggestion)
        ));
    }

    #[test]
    fn alt_shortcuts() {
        let app = test_app();
        assert!(matches!(
            handle_event(press(KeyCode::Char('d'), KeyModifiers::ALT), &app),
            AppMessage::Download
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('s'), KeyModifiers::ALT), &app),
            AppMessage::Share
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            AppMessage::Quit
        ));
    }

    #[test]
    fn modal_swallows_form_keys() {
        let mut app = test_app();
        app.modal.show_help();
        assert!(matches!(
            handle_event(press(KeyCode::Char('a'), KeyModifiers::NONE), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
    }
}

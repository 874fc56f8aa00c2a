//! 表单更新逻辑
//!
//! 输入框只保存光标；每次编辑后把新值同步给控制器，
//! 由控制器负责校验与错误提示。

use crate::message::FormMessage;
use crate::model::state::TextInput;
use crate::model::{App, FormFocus};

/// 处理表单消息
pub fn update(app: &mut App, msg: FormMessage) {
    match msg {
        FormMessage::Input(ch) => edit_active_input(app, |input| {
            input.insert(ch);
            true
        }),

        FormMessage::Paste(text) => edit_active_input(app, |input| {
            let mut changed = false;
            for ch in text.chars().filter(|c| !c.is_control()) {
                input.insert(ch);
                changed = true;
            }
            changed
        }),

        FormMessage::Backspace => edit_active_input(app, TextInput::backspace),

        FormMessage::Delete => edit_active_input(app, TextInput::delete),

        FormMessage::CursorLeft => move_cursor(app, TextInput::move_left),
        FormMessage::CursorRight => move_cursor(app, TextInput::move_right),
        FormMessage::CursorHome => move_cursor(app, TextInput::move_home),
        FormMessage::CursorEnd => move_cursor(app, TextInput::move_end),

        FormMessage::PrevSuggestion => app.suggestions.select_prev(),
        FormMessage::NextSuggestion => app.suggestions.select_next(),

        FormMessage::ApplySuggestion => {
            if let Some(text) = app.suggestions.current() {
                app.controller.select_suggestion(text);
                app.prompt_input.set_value(text);
            }
        }
    }
}

/// 编辑当前焦点所在的输入框，有变化时同步给控制器
fn edit_active_input(app: &mut App, edit: impl FnOnce(&mut TextInput) -> bool) {
    match app.focus {
        FormFocus::Url => {
            if edit(&mut app.url_input) {
                app.controller.set_url(app.url_input.value());
            }
        }
        FormFocus::Prompt => {
            if edit(&mut app.prompt_input) {
                app.controller.set_prompt(app.prompt_input.value());
            }
        }
        FormFocus::Suggestions | FormFocus::Generate => {}
    }
}

fn move_cursor(app: &mut App, movement: impl FnOnce(&mut TextInput)) {
    match app.focus {
        FormFocus::Url => movement(&mut app.url_input),
        FormFocus::Prompt => movement(&mut app.prompt_input),
        FormFocus::Suggestions | FormFocus::Generate => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::update::test_support::{test_app, type_text};
    use qr_studio_core::Field;

    #[test]
    fn cursor_editing_in_the_middle() {
        let mut app = test_app();
        app.focus = FormFocus::Url;
        type_text(&mut app, "https://exmple.com");

        update(&mut app, FormMessage::CursorHome);
        for _ in 0..10 {
            update(&mut app, FormMessage::CursorRight);
        }
        update(&mut app, FormMessage::Input('a'));
        assert_eq!(app.controller.form().url, "https://example.com");

        update(&mut app, FormMessage::CursorEnd);
        update(&mut app, FormMessage::Delete);
        assert_eq!(app.controller.form().url, "https://example.com");
    }

    #[test]
    fn paste_drops_control_characters() {
        let mut app = test_app();
        app.focus = FormFocus::Url;
        update(&mut app, FormMessage::Paste("https://example.com\n".to_string()));
        assert_eq!(app.url_input.value(), "https://example.com");
        assert_eq!(app.controller.form().url, "https://example.com");
    }

    #[test]
    fn edits_are_ignored_outside_text_inputs() {
        let mut app = test_app();
        app.focus = FormFocus::Generate;
        update(&mut app, FormMessage::Input('x'));
        assert!(app.url_input.value().is_empty());
        assert!(app.prompt_input.value().is_empty());
    }

    #[test]
    fn prompt_error_updates_while_typing_after_suggestion() {
        let mut app = test_app();
        app.focus = FormFocus::Suggestions;
        update(&mut app, FormMessage::ApplySuggestion);

        app.focus = FormFocus::Prompt;
        update(&mut app, FormMessage::CursorHome);
        for _ in 0.."A beautiful glacier".len() {
            update(&mut app, FormMessage::Delete);
        }
        assert!(app.controller.form().error(Field::Prompt).is_some());

        type_text(&mut app, "Sea");
        assert!(app.controller.form().error(Field::Prompt).is_none());
    }
}

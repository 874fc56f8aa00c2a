//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use qr_studio_core::ThemeName;

use crate::event::keymap::DefaultKeymap;
use crate::i18n::{current_language, t};
use crate::model::{App, FormFocus};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在提示之后
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);

    // 右侧：语言与主题
    let texts = &t().status_bar;
    let theme = match app.theme {
        ThemeName::Dark => texts.theme_dark,
        ThemeName::Light => texts.theme_light,
    };
    let settings = Line::from(format!(
        "{}: {} │ {}: {} ",
        texts.language,
        current_language().display_name(),
        texts.theme,
        theme
    ))
    .right_aligned();
    frame.render_widget(Paragraph::new(settings), area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;

    let mut hints = vec![(keys.tab, actions.next_field)];

    match app.focus {
        FormFocus::Url | FormFocus::Prompt | FormFocus::Generate => {
            hints.push((keys.enter, actions.generate));
        }
        FormFocus::Suggestions => {
            hints.push((keys.arrows_lr, actions.choose));
            hints.push((keys.enter, actions.apply));
        }
    }

    if app.controller.result().is_some() {
        hints.push((DefaultKeymap::DOWNLOAD.label, actions.download));
        hints.push((DefaultKeymap::SHARE.label, actions.share));
    }

    hints.push((DefaultKeymap::HELP.label, actions.help));
    hints.push((DefaultKeymap::QUIT.label, actions.quit));

    hints
}

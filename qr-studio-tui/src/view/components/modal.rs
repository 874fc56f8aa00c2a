//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::event::keymap::DefaultKeymap;
use crate::i18n::t;
use crate::model::state::Modal;
use crate::model::App;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 一行快捷键说明
fn shortcut_line(key: &str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<14}"), Style::default().fg(Color::Yellow)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = &t().help;
    let keys = &t().hints.keys;
    let actions = &texts.actions;

    let area = centered_rect(56, 22, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let section = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let switch_focus = format!("{}/S-{}", keys.tab, keys.tab);
    let quit = format!("{}/{}", DefaultKeymap::QUIT.label, DefaultKeymap::FORCE_QUIT.label);
    let help = format!("{}/?", DefaultKeymap::HELP.label);

    let lines = vec![
        Line::styled(texts.global_shortcuts, section),
        Line::from(""),
        shortcut_line(&switch_focus, actions.switch_focus),
        shortcut_line(DefaultKeymap::DOWNLOAD.label, actions.download),
        shortcut_line(DefaultKeymap::SHARE.label, actions.share),
        shortcut_line(DefaultKeymap::LANGUAGE.label, actions.language),
        shortcut_line(DefaultKeymap::THEME.label, actions.theme),
        shortcut_line(&help, actions.help),
        shortcut_line(keys.esc, actions.back),
        shortcut_line(&quit, actions.quit),
        Line::from(""),
        Line::styled(texts.form_shortcuts, section),
        Line::from(""),
        shortcut_line(keys.enter, actions.submit),
        shortcut_line(keys.arrows_lr, actions.pick_suggestion),
        shortcut_line("Home/End", actions.edit_text),
        Line::from(""),
        Line::styled(texts.close_hint, Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

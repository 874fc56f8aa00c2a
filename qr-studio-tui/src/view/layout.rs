//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let c = colors();
    frame.render_widget(
        Block::default().style(Style::default().bg(c.bg).fg(c.fg)),
        frame.area(),
    );

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(frame.area());

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    render_title_bar(frame, title_area);

    // 左右分栏：表单 + 结果
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(content_area);

    render_panel(frame, columns[0], t().form.title, true, |frame, inner| {
        pages::form::render(app, frame, inner);
    });
    render_panel(frame, columns[1], t().result.title, false, |frame, inner| {
        pages::result::render(app, frame, inner);
    });

    components::statusbar::render(app, frame, status_area);

    // 通知浮在内容区右下角
    components::toast::render(app, frame, content_area);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let texts = t();
    let style = Style::default().bg(c.highlight).fg(c.selected_fg);

    let title = Paragraph::new(Line::from(format!(
        " {} · {}",
        texts.common.app_name, texts.common.tagline
    )))
    .style(style);
    frame.render_widget(title, area);

    let version =
        Paragraph::new(Line::from(format!("v{} ", env!("CARGO_PKG_VERSION"))).right_aligned())
            .style(style);
    frame.render_widget(version, area);
}

/// 带边框的面板
fn render_panel(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    focused: bool,
    content: impl FnOnce(&mut Frame, Rect),
) {
    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Styles::title().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    content(frame, inner);
}

//! 结果面板：空闲提示、加载动画、生成结果与失败信息

use chrono::Local;
use qr_studio_core::{preview, GenerationResult, RequestState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 加载动画帧
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// 渲染结果面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    match app.controller.state() {
        RequestState::Idle => render_idle(frame, area),
        RequestState::Loading => render_loading(app, frame, area),
        RequestState::Success(result) => render_success(app, result, frame, area),
        RequestState::Failed(message) => render_failed(message, frame, area),
    }
}

fn render_idle(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(Span::styled(t().result.idle_hint, Styles::muted()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, vertical_center(area, 1));
}

fn render_loading(app: &App, frame: &mut Frame, area: Rect) {
    let frame_index = usize::try_from(app.tick % SPINNER.len() as u64).unwrap_or(0);
    let line = Line::from(vec![
        Span::styled(SPINNER[frame_index], Style::default().fg(colors().highlight)),
        Span::raw(" "),
        Span::raw(t().result.loading),
    ]);
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        vertical_center(area, 1),
    );
}

fn render_failed(message: &str, frame: &mut Frame, area: Rect) {
    let texts = &t().result;
    let lines = vec![
        Line::styled(
            format!("✗ {}", texts.failed_title),
            Styles::error().add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::styled(texts.retry_hint, Styles::muted()),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        vertical_center(area, 5),
    );
}

fn render_success(app: &App, result: &GenerationResult, frame: &mut Frame, area: Rect) {
    let texts = &t().result;
    let share_link = app.controller.share_link_for(result);
    let created_at = result
        .created_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();

    let details = vec![
        detail(texts.id, result.id.clone()),
        detail(texts.target, result.target.clone()),
        detail(texts.share_link, share_link),
        detail(texts.latency, format!("{} ms", result.latency_ms)),
        detail(texts.size, app.image_size.to_string()),
        detail(texts.created_at, created_at),
        detail(texts.image_url, result.image_url.clone()),
    ];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(area);

    frame.render_widget(
        Paragraph::new(details).wrap(Wrap { trim: false }),
        chunks[0],
    );

    render_preview(app, frame, chunks[1]);
}

fn detail(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Styles::muted()),
        Span::styled(value, Style::default().fg(colors().fg)),
    ])
}

/// 终端字符画预览，放不下时给出提示
fn render_preview(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().result;
    let Some(state) = app.preview.as_ref() else {
        return;
    };

    match &state.content {
        Ok(art) => {
            let c = colors();
            let (width, height) = preview::rendered_size(art);
            if width > area.width || height > area.height {
                let hint = Span::styled(texts.preview_too_small, Style::default().fg(c.warning));
                frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), area);
                return;
            }

            let x = area.x + (area.width - width) / 2;
            let preview_area = Rect::new(x, area.y, width, height);
            frame.render_widget(
                Paragraph::new(art.as_str()).style(Style::default().fg(c.fg).bg(c.bg)),
                preview_area,
            );
        }
        Err(reason) => {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!("{}: {reason}", texts.preview_unavailable),
                    Styles::error(),
                ))
                .wrap(Wrap { trim: true }),
                area,
            );
        }
    }
}

/// 在区域内垂直居中放置若干行
fn vertical_center(area: Rect, lines: u16) -> Rect {
    let height = lines.min(area.height);
    let y = area.y + (area.height - height) / 2;
    Rect::new(area.x, y, area.width, height)
}

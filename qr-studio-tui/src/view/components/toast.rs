//! 通知组件
//!
//! 控制器的通知队列在内容区右下角堆叠显示，最新的在最下面。

use qr_studio_core::NotificationKind;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::App;
use crate::view::theme::colors;

/// 通知最大宽度
const MAX_WIDTH: u16 = 48;

/// 单条通知高度（含边框）
const TOAST_HEIGHT: u16 = 3;

/// 渲染当前有效的通知
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut bottom = area.bottom();

    let toasts: Vec<_> = app.controller.notifications().active().collect();
    for toast in toasts.iter().rev() {
        if bottom < area.y + TOAST_HEIGHT {
            break;
        }

        let (icon, color) = match toast.kind {
            NotificationKind::Success => ("✓", c.success),
            NotificationKind::Error => ("✗", c.error),
            NotificationKind::Info => ("ℹ", c.highlight),
        };
        let text = format!("{icon} {}", toast.message);

        let width = u16::try_from(text.width())
            .unwrap_or(MAX_WIDTH)
            .saturating_add(4)
            .min(MAX_WIDTH)
            .min(area.width);
        let rect = Rect::new(
            area.right().saturating_sub(width + 1),
            bottom - TOAST_HEIGHT,
            width,
            TOAST_HEIGHT,
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(c.bg).fg(c.fg));

        frame.render_widget(Clear, rect);
        frame.render_widget(Paragraph::new(Line::from(text)).block(block), rect);

        bottom -= TOAST_HEIGHT;
    }
}

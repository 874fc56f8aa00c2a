//! 表单面板：链接、提示词、推荐提示词与生成按钮

use qr_studio_core::validator::PROMPT_MAX_CHARS;
use qr_studio_core::{suggestions, Field};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::state::TextInput;
use crate::model::{App, FormFocus};
use crate::view::theme::{colors, Styles};

/// 渲染表单
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().form;
    let form = app.controller.form();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 链接
            Constraint::Length(1), // 链接错误
            Constraint::Length(3), // 提示词
            Constraint::Length(1), // 提示词错误
            Constraint::Length(1), // 推荐标题
            Constraint::Length(3), // 推荐列表
            Constraint::Length(3), // 生成按钮
            Constraint::Min(0),
        ])
        .split(area);

    render_input(
        app,
        frame,
        chunks[0],
        InputField {
            input: &app.url_input,
            label: texts.url_label,
            placeholder: texts.url_placeholder,
            counter: None,
            focused: app.focus == FormFocus::Url,
            has_error: form.error(Field::Url).is_some(),
        },
    );
    render_error(frame, chunks[1], form.error(Field::Url));

    let chars = form.prompt_chars();
    render_input(
        app,
        frame,
        chunks[2],
        InputField {
            input: &app.prompt_input,
            label: texts.prompt_label,
            placeholder: texts.prompt_placeholder,
            counter: Some(chars),
            focused: app.focus == FormFocus::Prompt,
            has_error: form.error(Field::Prompt).is_some(),
        },
    );
    render_error(frame, chunks[3], form.error(Field::Prompt));

    frame.render_widget(
        Paragraph::new(Span::styled(texts.suggestions_label, Styles::muted())),
        chunks[4],
    );
    render_suggestions(app, frame, chunks[5]);

    render_generate_button(app, frame, chunks[6]);
}

/// 输入框渲染参数
struct InputField<'a> {
    input: &'a TextInput,
    label: &'static str,
    placeholder: &'static str,
    counter: Option<usize>,
    focused: bool,
    has_error: bool,
}

fn render_input(app: &App, frame: &mut Frame, area: Rect, field: InputField<'_>) {
    let c = colors();
    let border_style = if field.has_error {
        Styles::error()
    } else {
        Styles::border(field.focused)
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(count) = field.counter {
        let style = if count > PROMPT_MAX_CHARS {
            Styles::error()
        } else {
            Styles::muted()
        };
        block = block.title_top(
            Line::from(Span::styled(format!(" {count}/{PROMPT_MAX_CHARS} "), style))
                .right_aligned(),
        );
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // 光标超出可见宽度时水平滚动
    let offset = field.input.cursor_offset();
    let visible = usize::from(inner.width.max(1));
    let scroll = offset.saturating_sub(visible - 1);

    let content = if field.input.value().is_empty() {
        Paragraph::new(Span::styled(field.placeholder, Styles::muted()))
    } else {
        Paragraph::new(field.input.value())
            .style(Style::default().fg(c.fg))
            .scroll((0, u16::try_from(scroll).unwrap_or(u16::MAX)))
    };
    frame.render_widget(content, inner);

    if field.focused && !app.modal.is_open() {
        let x = u16::try_from(offset - scroll).unwrap_or(0);
        frame.set_cursor_position((inner.x.saturating_add(x), inner.y));
    }
}

fn render_error(frame: &mut Frame, area: Rect, error: Option<&str>) {
    if let Some(message) = error {
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {message}"), Styles::error())),
            area,
        );
    }
}

fn render_suggestions(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == FormFocus::Suggestions;

    let mut spans = Vec::new();
    for (i, text) in suggestions::PROMPT_SUGGESTIONS.iter().enumerate() {
        let style = if focused && i == app.suggestions.selected {
            Styles::selected()
        } else if i == app.suggestions.selected {
            Style::default()
                .fg(colors().highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Styles::muted()
        };
        spans.push(Span::styled(format!("[{text}]"), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_generate_button(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let texts = &t().form;
    let focused = app.focus == FormFocus::Generate;

    let label = if app.controller.state().is_loading() {
        texts.generating
    } else {
        texts.generate
    };

    let style = if !app.controller.can_submit() {
        Styles::muted()
    } else if focused {
        Styles::selected()
    } else {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    };

    let width = area.width.min(24);
    let button_area = Rect::new(area.x, area.y, width, area.height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    frame.render_widget(
        Paragraph::new(Span::styled(label, style))
            .alignment(Alignment::Center)
            .block(block),
        button_area,
    );
}

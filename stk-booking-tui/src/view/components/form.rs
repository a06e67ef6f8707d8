//! 预约表单组件

use chrono::{Duration, Local};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use stk_booking_core::{Field, Service, SubmissionStatus};
use unicode_width::UnicodeWidthChar;

use crate::model::{App, FormFocus};
use crate::view::theme::{colors, Styles};

/// 标签列宽度
const LABEL_WIDTH: u16 = 12;

/// 表单行（按显示顺序）
const ROWS: [Field; 7] = [
    Field::FullName,
    Field::Phone,
    Field::Email,
    Field::Service,
    Field::Date,
    Field::Time,
    Field::Message,
];

/// 渲染表单
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let mut constraints = vec![Constraint::Length(1); ROWS.len()];
    constraints.extend([
        Constraint::Length(1), // 空行
        Constraint::Length(1), // 验证码
        Constraint::Length(1), // 按钮
        Constraint::Length(1), // 空行
        Constraint::Min(1),    // 提交状态
    ]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (field, row) in ROWS.iter().zip(rows.iter()) {
        if *field == Field::Service {
            render_service_row(app, frame, *row);
        } else {
            render_text_row(app, frame, *row, *field, label(*field));
        }
    }

    let captcha_row = rows[ROWS.len() + 1];
    let question = app.form.state().captcha().question();
    render_text_row(app, frame, captcha_row, Field::CaptchaResult, &question);

    render_buttons(app, frame, rows[ROWS.len() + 2]);
    render_status(app, frame, rows[ROWS.len() + 4]);
}

fn label(field: Field) -> &'static str {
    match field {
        Field::FullName => "Name",
        Field::Phone => "Phone",
        Field::Email => "Email",
        Field::Service => "Service",
        Field::Date => "Date",
        Field::Time => "Time",
        Field::Message => "Message",
        Field::CaptchaResult => "Captcha",
    }
}

/// 字段为空时的提示
fn placeholder(field: Field) -> String {
    match field {
        Field::FullName => "First and last name".to_string(),
        Field::Phone => "+40712345678".to_string(),
        Field::Email | Field::Message => "optional".to_string(),
        Field::Date => {
            let tomorrow = Local::now() + Duration::days(1);
            format!("YYYY-MM-DD, e.g. {}", tomorrow.format("%Y-%m-%d"))
        }
        Field::Time => "HH:MM, e.g. 14:30".to_string(),
        Field::Service | Field::CaptchaResult => String::new(),
    }
}

/// 拆分标签列与输入列
fn split_row(area: Rect, label_width: u16) -> (Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(label_width), Constraint::Min(1)])
        .split(area);
    (cols[0], cols[1])
}

/// 渲染文本输入行
fn render_text_row(app: &App, frame: &mut Frame, area: Rect, field: Field, label: &str) {
    let focused = app.focus == FormFocus::Field(field);
    let label_width = LABEL_WIDTH.max(u16::try_from(label.len() + 2).unwrap_or(u16::MAX));
    let (label_area, input_area) = split_row(area, label_width);

    frame.render_widget(
        Paragraph::new(label.to_string()).style(Styles::label(focused)),
        label_area,
    );

    let value = app.form.state().field_value(field);
    // 预留一列给光标
    let visible = visible_tail(&value, usize::from(input_area.width.saturating_sub(1)));

    let line = if value.is_empty() && !focused {
        Line::from(Span::styled(placeholder(field), Styles::placeholder()))
    } else {
        let style = if focused {
            Style::default()
                .fg(colors().fg)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(colors().fg)
        };
        Line::from(Span::styled(visible.to_string(), style))
    };
    frame.render_widget(Paragraph::new(line), input_area);

    if focused && !app.form.is_loading() {
        let offset = u16::try_from(display_width(visible)).unwrap_or(u16::MAX);
        frame.set_cursor_position((
            input_area.x.saturating_add(offset).min(input_area.right().saturating_sub(1)),
            input_area.y,
        ));
    }
}

/// 渲染服务选择行
fn render_service_row(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus.is_service();
    let (label_area, input_area) = split_row(area, LABEL_WIDTH);

    frame.render_widget(
        Paragraph::new(label(Field::Service)).style(Styles::label(focused)),
        label_area,
    );

    let selected = app.form.state().service();
    let mut spans = Vec::new();
    for (i, service) in Service::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let text = format!(" {} ", service.label());
        if selected == Some(*service) {
            let style = if focused {
                Styles::selected()
            } else {
                Style::default()
                    .fg(colors().highlight)
                    .add_modifier(Modifier::BOLD)
            };
            spans.push(Span::styled(text, style));
        } else {
            spans.push(Span::styled(text, Styles::placeholder()));
        }
    }
    if selected.is_none() {
        spans.push(Span::styled("  (none selected)", Style::default().fg(colors().error)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), input_area);
}

/// 渲染按钮行
fn render_buttons(app: &App, frame: &mut Frame, area: Rect) {
    let loading = app.form.is_loading();

    let reload = button(" Reload captcha ", app.focus == FormFocus::ReloadCaptcha, false);
    let submit_text = if loading { " Sending... " } else { " Submit " };
    let submit = button(submit_text, app.focus == FormFocus::Submit, loading);

    let line = Line::from(vec![
        Span::raw(" ".repeat(usize::from(LABEL_WIDTH))),
        reload,
        Span::raw("   "),
        submit,
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn button(text: &'static str, focused: bool, disabled: bool) -> Span<'static> {
    let c = colors();
    let style = if disabled {
        Style::default().fg(c.muted)
    } else if focused {
        Styles::selected()
    } else {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    };
    Span::styled(format!("[{text}]"), style)
}

/// 渲染提交状态
fn render_status(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let status = app.form.status();
    let Some(text) = status.message() else {
        return;
    };

    let color = match status {
        SubmissionStatus::Loading => c.warning,
        SubmissionStatus::Success(_) => c.success,
        SubmissionStatus::Error(_) | SubmissionStatus::Idle => c.error,
    };

    let paragraph = Paragraph::new(text.to_string())
        .style(Style::default().fg(color))
        .wrap(ratatui::widgets::Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn display_width(text: &str) -> usize {
    text.chars()
        .map(|c| UnicodeWidthChar::width(c).unwrap_or(0))
        .sum()
}

/// 取能放进 `max_width` 列的最长后缀（超长输入显示末尾）
fn visible_tail(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        width += UnicodeWidthChar::width(c).unwrap_or(0);
        if width > max_width {
            break;
        }
        start = idx;
    }
    &text[start..]
}

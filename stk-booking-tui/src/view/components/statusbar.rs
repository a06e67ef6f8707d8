//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FormFocus};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
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

    // 状态消息显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前焦点生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("Tab/↑↓", "Field")];

    match app.focus {
        FormFocus::Field(_) if app.focus.is_service() => {
            hints.push(("←→", "Service"));
            hints.push(("Enter", "Submit"));
        }
        FormFocus::Field(_) => {
            hints.push(("Ctrl+u", "Clear"));
            hints.push(("Enter", "Submit"));
        }
        FormFocus::ReloadCaptcha => {
            hints.push(("Enter", "Reload captcha"));
        }
        FormFocus::Submit => {
            hints.push(("Enter", "Submit"));
        }
    }

    hints.push(("Ctrl+r", "Reload captcha"));
    hints.push(("Esc", "Quit"));

    hints
}

//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;

use super::components;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    // 三层布局：标题栏 + 表单 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 表单
            Constraint::Length(1), // 状态栏
        ])
        .split(frame.area());

    render_title_bar(frame, main_layout[0]);
    render_form_panel(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(concat!(
        " STK Barbershop · Programare v",
        env!("CARGO_PKG_VERSION")
    ))
    .style(Styles::statusbar());
    frame.render_widget(title, area);
}

/// 渲染表单面板（提交中边框变暗）
fn render_form_panel(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let block = Block::default()
        .title(" Book an appointment ")
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Styles::border(!app.form.is_loading()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    components::form::render(app, frame, inner);
}

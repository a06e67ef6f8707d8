//! 表单消息处理

use stk_booking_core::Service;

use super::Effect;
use crate::message::FormMessage;
use crate::model::{App, FormFocus};

/// 处理表单消息
pub fn update(app: &mut App, msg: FormMessage) -> Effect {
    match msg {
        FormMessage::NextField => {
            app.focus = app.focus.next();
        }

        FormMessage::PrevField => {
            app.focus = app.focus.prev();
        }

        FormMessage::NextOption => cycle_service(app, Service::next),

        FormMessage::PrevOption => cycle_service(app, Service::prev),

        FormMessage::Input(c) => {
            if let Some(text) = focused_text(app) {
                text.push(c);
            }
        }

        FormMessage::Backspace => {
            if let Some(text) = focused_text(app) {
                text.pop();
            }
        }

        FormMessage::ClearField => {
            if let Some(text) = focused_text(app) {
                text.clear();
            }
        }

        FormMessage::ReloadCaptcha => {
            app.form.regenerate_captcha();
        }

        FormMessage::Confirm => {
            if app.focus == FormFocus::ReloadCaptcha {
                app.form.regenerate_captcha();
            } else {
                return submit(app);
            }
        }
    }

    Effect::None
}

/// 提交表单；请求进行中时忽略
fn submit(app: &mut App) -> Effect {
    if app.form.is_loading() {
        return Effect::None;
    }
    app.clear_status();

    match app.form.prepare_submission() {
        Some(payload) => Effect::Submit(payload),
        None => Effect::None,
    }
}

/// 切换服务；未选择时从默认服务开始
fn cycle_service(app: &mut App, step: fn(Service) -> Service) {
    let state = app.form.state_mut();
    let next = state.service().map_or_else(Service::default, step);
    state.select_service(next);
}

fn focused_text(app: &mut App) -> Option<&mut String> {
    let field = app.focus.text_field()?;
    app.form.state_mut().text_mut(field)
}

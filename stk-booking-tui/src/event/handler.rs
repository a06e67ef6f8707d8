//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press，忽略 Release 和 Repeat（Windows 终端会重复上报）
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::RELOAD_CAPTCHA.matches(&key) {
        return form(FormMessage::ReloadCaptcha);
    }

    // 焦点切换
    // BackTab 在部分终端上带有 SHIFT 修饰，不比较修饰键
    if key.code == KeyCode::BackTab || DefaultKeymap::PREV_FIELD_ALT.matches(&key) {
        return form(FormMessage::PrevField);
    }

    if DefaultKeymap::NEXT_FIELD.matches(&key) || DefaultKeymap::NEXT_FIELD_ALT.matches(&key) {
        return form(FormMessage::NextField);
    }

    if DefaultKeymap::CONFIRM.matches(&key) {
        return form(FormMessage::Confirm);
    }

    // 根据焦点位置处理按键
    if app.focus.is_service() {
        handle_selector_keys(key)
    } else if app.focus.text_field().is_some() {
        handle_text_keys(key)
    } else {
        AppMessage::Noop
    }
}

/// 处理服务选择器的按键
fn handle_selector_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::PREV_OPTION.matches(&key) {
        form(FormMessage::PrevOption)
    } else if DefaultKeymap::NEXT_OPTION.matches(&key) {
        form(FormMessage::NextOption)
    } else {
        AppMessage::Noop
    }
}

/// 处理文本字段的按键
fn handle_text_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACKSPACE.matches(&key) {
        return form(FormMessage::Backspace);
    }

    if DefaultKeymap::CLEAR_FIELD.matches(&key) {
        return form(FormMessage::ClearField);
    }

    match key.code {
        // 大写字母带 SHIFT 修饰
        KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            form(FormMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

fn form(msg: FormMessage) -> AppMessage {
    AppMessage::Form(msg)
}

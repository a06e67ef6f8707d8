//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const RELOAD_CAPTCHA: KeyBinding = KeyBinding::ctrl(KeyCode::Char('r'));

    // 字段切换
    pub const NEXT_FIELD: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const NEXT_FIELD_ALT: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const PREV_FIELD_ALT: KeyBinding = KeyBinding::key(KeyCode::Up);

    // 服务选择
    pub const PREV_OPTION: KeyBinding = KeyBinding::key(KeyCode::Left);
    pub const NEXT_OPTION: KeyBinding = KeyBinding::key(KeyCode::Right);

    // 编辑
    pub const CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const BACKSPACE: KeyBinding = KeyBinding::key(KeyCode::Backspace);
    pub const CLEAR_FIELD: KeyBinding = KeyBinding::ctrl(KeyCode::Char('u'));
}

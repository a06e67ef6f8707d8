//! 应用主状态结构

use stk_booking_core::BookingForm;

use super::FormFocus;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 预约表单（字段、验证码、提交状态）
    pub form: BookingForm,

    /// 当前焦点
    pub focus: FormFocus,

    /// 状态栏消息
    pub status_message: Option<String>,
}

impl App {
    /// 创建新的应用实例（表单带有新生成的验证码）
    pub fn new() -> Self {
        Self::with_form(BookingForm::new())
    }

    pub fn with_form(form: BookingForm) -> Self {
        Self {
            should_quit: false,
            form,
            focus: FormFocus::default(),
            status_message: None,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

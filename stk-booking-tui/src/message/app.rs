//! 应用主消息定义

use stk_booking_core::{Ack, BookingResult};

use super::FormMessage;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 表单相关消息
    Form(FormMessage),

    /// 后台提交已结束
    SubmissionFinished(BookingResult<Ack>),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}

//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod form;               // 表单子消息处理
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Effect {...}
//!
//!
//!     Effect：
//!         update 本身不做 I/O。需要发请求时返回 Effect::Submit(payload)，
//!         由 src/app.rs 交给 backend 在 tokio 运行时上执行：
//!
//!             Confirm（焦点在提交按钮）
//!                 ↓
//!             form.prepare_submission()       // 校验；失败则直接写入错误状态
//!                 ↓ Some(payload)
//!             Effect::Submit(payload)         // 此时状态已是 Loading
//!                 ↓
//!             backend.spawn_submit(payload)
//!                 ↓ ... 请求结束
//!             AppMessage::SubmissionFinished(result)
//!                 ↓
//!             form.apply_outcome(result)      // 成功清空表单；无论结果都重新生成验证码
//!
//!     Loading 期间再次提交会被忽略，保证同一时刻最多一个请求。
//!

mod form;

use crate::message::AppMessage;
use crate::model::App;
use stk_booking_core::AppointmentPayload;

/// update 产生的副作用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// 无副作用
    None,
    /// 发送预约请求
    Submit(AppointmentPayload),
}

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Effect {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            Effect::None
        }

        AppMessage::Form(form_msg) => form::update(app, form_msg),

        AppMessage::SubmissionFinished(outcome) => {
            app.form.apply_outcome(outcome);
            Effect::None
        }

        AppMessage::Noop => Effect::None,
    }
}

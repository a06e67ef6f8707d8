//!
//! app.rs
//! 应用主循环
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!
//!     should_quit: bool = false,          // 决定应用是否应该退出
//!     form: BookingForm {                 // 空表单 + 新生成的验证码，服务默认为 Tuns
//!         status: Idle,
//!         ...
//!     },
//!     focus: FormFocus::Field(FullName),  // 焦点在第一个字段
//!     status_message: None,               // 状态栏消息
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))        // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     while let Some(result) = backend.try_recv() {   // 取回已结束的提交
//!         update(app, SubmissionFinished(result))
//!     }
//!     if let Some(event) = poll_event() {             // 轮询输入，最多等待 100ms
//!         let msg = handle_event(event, &app);            // 把原始事件翻译为消息
//!         let effect = update::update(&mut app, msg);     // 更新状态
//!         run_effect(effect)                              // 需要时发起请求
//!     }
//! }
//!
//! 提交请求在后台运行，界面在等待期间保持响应（显示 "Sending..."）。

use std::time::Duration;

use anyhow::Result;

use crate::backend::SubmissionBackend;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update::{self, Effect};
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, backend: &mut SubmissionBackend) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 取回后台结果
        while let Some(outcome) = backend.try_recv() {
            let effect = update::update(app, AppMessage::SubmissionFinished(outcome));
            run_effect(effect, backend);
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态并执行副作用
            let effect = update::update(app, msg);
            run_effect(effect, backend);
        }
    }

    Ok(())
}

fn run_effect(effect: Effect, backend: &SubmissionBackend) {
    match effect {
        Effect::None => {}
        Effect::Submit(payload) => {
            log::info!("Submitting appointment for {} {}", payload.date, payload.time);
            backend.spawn_submit(payload);
        }
    }
}

//!
//! src/message/mod.rs
//! Message 层：消息定义
//!
//! Message 是 Event 层与 Update 层之间的契约：
//!     Event 层把按键翻译为 Message，Update 层消费 Message 修改 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 顶层消息
//!         mod form;           // 表单消息
//!
//!         pub use app::AppMessage;
//!         pub use form::FormMessage;
//!
//!
//!     消息层级：
//!         AppMessage
//!             ├── Quit                            // 退出
//!             ├── Form(FormMessage)               // 表单操作
//!             │       ├── NextField / PrevField
//!             │       ├── NextOption / PrevOption // 切换服务
//!             │       ├── Input(char) / Backspace / ClearField
//!             │       ├── ReloadCaptcha
//!             │       └── Confirm                 // Enter：提交或重新生成验证码
//!             ├── SubmissionFinished(result)      // 后台请求结束，由 app.rs 投递
//!             └── Noop
//!
//!
//!     SubmissionFinished 不来自按键：
//!         update 返回 Effect::Submit 后，backend 在 tokio 运行时上发出请求，
//!         结果经 channel 回到主循环，再包装为 SubmissionFinished 交给 update。
//!

mod app;
mod form;

pub use app::AppMessage;
pub use form::FormMessage;

//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 表单焦点
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub form: BookingForm,              // 表单数据 + 提交状态（来自 stk-booking-core）
//!             pub focus: FormFocus,               // 当前焦点
//!             pub status_message: Option<String>, // 状态栏消息（启动提示等）
//!         }
//!
//!     提交状态（Idle / Loading / Success / Error）由 BookingForm 持有，
//!     Model 层不再重复保存。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、焦点管理（FormFocus）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     焦点按表单顺序循环：
//!         姓名 → 电话 → 邮箱 → 服务 → 日期 → 时间 → 留言 → 验证码
//!              → [重新生成验证码] → [提交] → 姓名 ...
//!
//!     数据流：
//!         用户按 Tab / ↓
//!             ↓
//!         event/handler.rs 返回 Form(FormMessage::NextField)
//!             ↓
//!         update/form.rs 执行 app.focus = app.focus.next()
//!             ↓
//!         view/components/form.rs 高亮对应字段
//!

mod app;
mod focus;

pub use app::App;
pub use focus::FormFocus;

//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 src/app.rs 调用，最长阻塞 timeout
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)            // 键盘事件
//!             Event::Resize(width, height)    // 终端大小变化，下一帧自动重绘
//!             其余事件                         // 忽略
//!
//!         键盘事件的判断顺序：
//!             - 全局快捷键（Esc / Ctrl+C 退出，Ctrl+R 重新生成验证码）
//!             - 焦点切换（Tab / Shift+Tab / ↑ / ↓）
//!             - 按当前焦点处理：
//!                 服务选择器      ← →  切换服务
//!                 文本字段        字符输入、Backspace、Ctrl+U 清空
//!                 按钮            Enter
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};

//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关的基础设施代码：终端的初始化/恢复，以及日志文件的初始化。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 日志（写入文件，不污染终端画面）
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     初始化终端：
//!         · Raw Mode（原始模式）
//!             - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!             - 关闭字符回显
//!             - 捕获 Ctrl+C、方向键等特殊键
//!
//!         · Alternate Screen（备用屏幕）
//!             - TUI 在备用屏幕运行，退出后恢复主屏幕内容
//!
//!     注意：无论程序是正常退出还是发生错误，都必须调用 restore_terminal()！
//!
//!
//!     日志：
//!         TUI 占用了 stdout，因此日志写入
//!             <data_local_dir>/stk-booking-tui/stk-booking-tui.log
//!         stk-booking-core 使用 log 门面，由 tracing-subscriber 统一接收。
//!         级别由 RUST_LOG 控制，默认 info。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};

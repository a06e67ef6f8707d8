//!
//! src/backend/mod.rs
//! Backend 层：与 stk-booking-core 及本地环境交互
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 本地配置文件（后端地址、主题）
//!         mod submission;         // 在 tokio 运行时上执行提交请求
//!
//!
//!     提交流程：
//!         主循环是同步的，不能在 update 中 await。
//!         SubmissionBackend 持有运行时句柄与 BookingClient：
//!
//!             spawn_submit(payload)
//!                 └─ handle.spawn(async { client.submit(&payload).await })
//!                        └─ 结果 → mpsc::UnboundedSender
//!
//!             主循环每一帧调用 try_recv()，取到结果后投递
//!             AppMessage::SubmissionFinished。
//!
//!
//!     配置：
//!         <config_dir>/stk-booking-tui/config.json
//!             {
//!                 "backend_url": "https://api.example.ro",
//!                 "theme": "dark"
//!             }
//!         文件不存在时使用默认值；BACKEND_URL 环境变量优先于文件。
//!

mod config_service;
mod submission;

pub use config_service::{ConfigService, LocalConfigService};
pub use submission::SubmissionBackend;

//! STK Barbershop booking TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与提交请求 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 日志写入文件（终端被 TUI 占用）
//!     load config             // 配置文件 + BACKEND_URL 环境变量
//!     tokio Runtime           // 提交请求在此运行时上执行
//!     init_terminal()         // 原始模式 + 备用屏幕
//!     model::App::new()       // 创建 APP 实例
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use stk_booking_core::HttpBookingClient;

use backend::{ConfigService, LocalConfigService, SubmissionBackend};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 初始化日志（guard 需存活到程序结束）
    let _log_guard = init_logging()?;
    tracing::info!("Starting STK booking TUI v{}", env!("CARGO_PKG_VERSION"));

    // 2. 加载配置；首次运行写出默认配置，便于用户编辑
    let config_service = LocalConfigService::new();
    let config = config_service.load()?;
    if !config_service.path().exists() {
        if let Err(e) = config_service.save(&config) {
            tracing::warn!("Could not write default config: {e:#}");
        }
    }
    view::theme::set_theme(config.theme);

    let booking_config = config.booking_config_from_env();
    let missing_backend = booking_config.is_relative();
    if missing_backend {
        tracing::warn!(
            "No backend URL configured (set BACKEND_URL or backend_url in {}); submissions will fail",
            config_service.path().display()
        );
    } else {
        tracing::info!("Backend: {}", booking_config.appointment_url());
    }

    // 3. 异步运行时
    let runtime = tokio::runtime::Runtime::new()?;
    let client = Arc::new(HttpBookingClient::new(booking_config));
    let mut backend = SubmissionBackend::new(runtime.handle().clone(), client);

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例并运行主循环
    let mut app = model::App::new();
    if missing_backend {
        app.set_status("No backend URL configured");
    }
    let result = app::run(&mut terminal, &mut app, &mut backend);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    tracing::info!("Exiting");
    result
}

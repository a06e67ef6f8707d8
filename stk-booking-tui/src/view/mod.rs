//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局
//!         pub mod theme;          // 主题与样式
//!         mod components;         // 组件
//!             form.rs             // 预约表单
//!             statusbar.rs        // 底部状态栏
//!
//!
//!     布局：
//!         ┌──────────────────────────────────────────────┐
//!         │ STK Barbershop · Programare                  │  标题栏
//!         ├──────────────────────────────────────────────┤
//!         │ Name      [ Ion Popescu              ]       │
//!         │ Phone     [ +40712345678             ]       │
//!         │ Email     [                          ]       │
//!         │ Service   ◀ Tuns ▶                           │
//!         │ Date      [ 2030-06-16               ]       │  表单
//!         │ Time      [ 10:00                    ]       │
//!         │ Message   [                          ]       │
//!         │ What is 3 + 4?  [ 7 ]   [ Reload captcha ]      │
//!         │                         [ Submit ]           │
//!         │ Sending...                                   │  提交状态
//!         ├──────────────────────────────────────────────┤
//!         │ Tab Next │ ←→ Service │ Enter Submit │ ...    │  状态栏
//!         └──────────────────────────────────────────────┘
//!

mod components;
mod layout;
pub mod theme;

pub use layout::render;

//! 界面组件

pub mod form;
pub mod statusbar;

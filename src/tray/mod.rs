//! 系统托盘模块
//!
//! 提供系统托盘功能，包括：
//! - 托盘图标的创建与移除
//! - 最小化/关闭到托盘策略
//! - 多语言托盘菜单
//! - 菜单与图标点击事件处理

mod args;
mod backend;
mod events;
mod locale;
mod manager;
mod menu;
mod menu_handler;
mod state;
mod window;

pub use args::*;
pub use backend::*;
pub use events::*;
pub use locale::{resolve as resolve_locale, supported_languages, LocaleTable};
pub use manager::*;
pub use menu::*;
pub use menu_handler::*;
pub use state::*;
pub use window::*;

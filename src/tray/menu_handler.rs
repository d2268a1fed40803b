//! 托盘菜单事件处理模块
//!
//! 把原生菜单点击转交给托盘管理器

use tauri::{AppHandle, Runtime};
use tracing::{debug, warn};

/// 处理菜单事件
pub fn handle_menu_event<R: Runtime>(app: &AppHandle<R>, menu_id: &str) {
    debug!("[托盘] 处理托盘菜单事件: {}", menu_id);

    if crate::with_tray_manager(app, |manager| manager.handle_menu_selection(menu_id)).is_none() {
        warn!("[托盘] 托盘管理器不可用，忽略菜单事件: {}", menu_id);
    }
}

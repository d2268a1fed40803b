//! 托盘事件处理模块
//!
//! 处理托盘图标的点击事件
//!
//! - 单击托盘图标切换主窗口可见性
//! - 双击托盘图标显示并聚焦主窗口
//! - 右键点击时通知前端菜单即将打开

use super::args::NotifyIconEventArgs;
use super::state::IconClick;
use tauri::{
    tray::{MouseButton, MouseButtonState, TrayIconEvent},
    AppHandle, Emitter, Runtime,
};
use tracing::debug;

/// 托盘菜单即将打开的事件名称
pub const TRAY_MENU_WILL_OPEN_EVENT: &str = "tray-menu-will-open";

/// 将 Tauri 托盘事件转换为点击类型和图标位置
pub fn classify_tray_icon_event(event: &TrayIconEvent) -> Option<(IconClick, NotifyIconEventArgs)> {
    match event {
        TrayIconEvent::Click {
            button: MouseButton::Left,
            button_state: MouseButtonState::Up,
            rect,
            ..
        } => Some((IconClick::Left, rect.into())),
        TrayIconEvent::Click {
            button: MouseButton::Right,
            button_state: MouseButtonState::Up,
            rect,
            ..
        } => Some((IconClick::Right, rect.into())),
        TrayIconEvent::DoubleClick {
            button: MouseButton::Left,
            rect,
            ..
        } => Some((IconClick::Double, rect.into())),
        _ => None,
    }
}

/// 处理托盘图标事件
pub fn handle_tray_icon_event<R: Runtime>(app: &AppHandle<R>, event: TrayIconEvent) {
    let Some((click, args)) = classify_tray_icon_event(&event) else {
        return;
    };
    debug!("[托盘] 托盘图标事件: {:?}", click);

    if click == IconClick::Right {
        if let Err(e) = app.emit(TRAY_MENU_WILL_OPEN_EVENT, args) {
            tracing::error!("[托盘] 发送托盘菜单打开事件失败: {}", e);
        }
    }

    if crate::with_tray_manager(app, |manager| manager.handle_icon_click(click, args)).is_none() {
        debug!("[托盘] 托盘管理器不可用，忽略图标事件");
    }
}

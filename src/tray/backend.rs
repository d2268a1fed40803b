//! 原生托盘图标层
//!
//! `TrayBackend` 负责托盘图标的注册、移除和内容更新

use super::events::handle_tray_icon_event;
use super::menu::{ContextMenu, MenuEntry};
use super::menu_handler::handle_menu_event;
use crate::error::TrayError;
use tauri::{
    image::Image,
    menu::{Menu, MenuItem, PredefinedMenuItem},
    tray::{TrayIcon, TrayIconBuilder},
    AppHandle, Runtime,
};
use tracing::{error, info};

/// 托盘图标 ID
pub const TRAY_ID: &str = "main";

/// 原生托盘图标接口
pub trait TrayBackend: Send + Sync {
    /// 注册托盘图标
    fn create(&mut self, tooltip: &str, menu: &ContextMenu) -> Result<(), TrayError>;

    /// 移除托盘图标
    fn remove(&mut self) -> Result<(), TrayError>;

    fn set_tooltip(&mut self, tooltip: &str) -> Result<(), TrayError>;

    /// 替换托盘菜单
    fn set_menu(&mut self, menu: &ContextMenu) -> Result<(), TrayError>;

    /// 托盘图标当前是否存在
    fn is_present(&self) -> bool;
}

/// 基于 Tauri 托盘 API 的实现
pub struct TauriTray<R: Runtime> {
    app: AppHandle<R>,
    icon: Option<TrayIcon<R>>,
}

impl<R: Runtime> TauriTray<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app, icon: None }
    }
}

fn build_native_menu<R: Runtime>(
    app: &AppHandle<R>,
    menu: &ContextMenu,
) -> Result<Menu<R>, TrayError> {
    let menu_err = |e: tauri::Error| TrayError::MenuBuild(e.to_string());
    let native = Menu::new(app).map_err(menu_err)?;

    for entry in menu.entries() {
        match entry {
            MenuEntry::Item { id, label } => {
                let item = MenuItem::with_id(app, *id, label, true, None::<&str>)
                    .map_err(menu_err)?;
                native.append(&item).map_err(menu_err)?;
            }
            MenuEntry::Separator => {
                let separator = PredefinedMenuItem::separator(app).map_err(menu_err)?;
                native.append(&separator).map_err(menu_err)?;
            }
        }
    }

    Ok(native)
}

impl<R: Runtime> TrayBackend for TauriTray<R> {
    fn create(&mut self, tooltip: &str, menu: &ContextMenu) -> Result<(), TrayError> {
        if self.icon.is_some() {
            return Ok(());
        }

        let registration_err = |e: tauri::Error| TrayError::IconRegistration(e.to_string());
        let native_menu = build_native_menu(&self.app, menu)?;
        let image =
            Image::from_bytes(include_bytes!("../../icons/32x32.png")).map_err(registration_err)?;

        let tray = TrayIconBuilder::with_id(TRAY_ID)
            .icon(image)
            .tooltip(tooltip)
            .menu(&native_menu)
            .show_menu_on_left_click(false)
            .on_menu_event(|app, event| handle_menu_event(app, event.id.as_ref()))
            .on_tray_icon_event(|tray, event| handle_tray_icon_event(tray.app_handle(), event))
            .build(&self.app)
            .map_err(registration_err)?;

        self.icon = Some(tray);
        info!("[托盘] 托盘图标已创建");
        Ok(())
    }

    fn remove(&mut self) -> Result<(), TrayError> {
        let Some(icon) = self.icon.take() else {
            return Ok(());
        };

        if let Err(e) = icon.set_visible(false) {
            error!("[托盘] 隐藏托盘图标失败: {}", e);
        }
        drop(icon);
        self.app.remove_tray_by_id(TRAY_ID);

        info!("[托盘] 托盘图标已移除");
        Ok(())
    }

    fn set_tooltip(&mut self, tooltip: &str) -> Result<(), TrayError> {
        if let Some(icon) = &self.icon {
            icon.set_tooltip(Some(tooltip))
                .map_err(|e| TrayError::TrayUpdate(e.to_string()))?;
        }
        Ok(())
    }

    fn set_menu(&mut self, menu: &ContextMenu) -> Result<(), TrayError> {
        if let Some(icon) = &self.icon {
            let native_menu = build_native_menu(&self.app, menu)?;
            icon.set_menu(Some(native_menu))
                .map_err(|e| TrayError::MenuBuild(e.to_string()))?;
        }
        Ok(())
    }

    fn is_present(&self) -> bool {
        self.icon.is_some()
    }
}

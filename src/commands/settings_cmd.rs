//! 设置页命令模块
//!
//! 设置页通过这些命令读写托盘开关，切换语言后立即刷新托盘菜单

use crate::error::TrayError;
use crate::tray::{SystemTrayManager, TrayBackend, TraySettings, WindowHelper};
use crate::TrayManagerState;
use parking_lot::Mutex;
use tauri::{State, Wry};

type ManagerSlot<W, B> = Mutex<Option<SystemTrayManager<W, B>>>;

const MANAGER_UNAVAILABLE: &str = "托盘管理器未初始化";

/// 在管理器上执行修改并返回最新快照
fn update_settings<W, B, F>(slot: &ManagerSlot<W, B>, f: F) -> Result<TraySettings, String>
where
    W: WindowHelper,
    B: TrayBackend,
    F: FnOnce(&mut SystemTrayManager<W, B>) -> Result<(), TrayError>,
{
    let mut guard = slot.lock();
    let manager = guard.as_mut().ok_or_else(|| MANAGER_UNAVAILABLE.to_string())?;
    f(manager).map_err(|e| {
        tracing::warn!("[设置] 更新托盘设置失败: {}", e);
        e.to_string()
    })?;
    Ok(manager.settings())
}

fn read_settings<W: WindowHelper, B: TrayBackend>(
    slot: &ManagerSlot<W, B>,
) -> Result<TraySettings, String> {
    update_settings(slot, |_| Ok(()))
}

/// 切换语言并刷新托盘菜单
fn apply_language<W: WindowHelper, B: TrayBackend>(
    manager: &mut SystemTrayManager<W, B>,
    language_code: &str,
) -> Result<(), TrayError> {
    if language_code.trim().is_empty() {
        return Ok(());
    }
    manager.set_language_code(language_code.trim())?;
    manager.refresh_context_menu()
}

/// 获取托盘设置
#[tauri::command]
pub fn get_tray_settings(state: State<'_, TrayManagerState<Wry>>) -> Result<TraySettings, String> {
    read_settings(&state.0)
}

/// 显示或隐藏托盘图标
#[tauri::command]
pub fn set_tray_icon_visible(
    state: State<'_, TrayManagerState<Wry>>,
    visible: bool,
) -> Result<TraySettings, String> {
    update_settings(&state.0, |m| m.set_icon_visible(visible))
}

/// 设置最小化到托盘
#[tauri::command]
pub fn set_minimize_to_tray(
    state: State<'_, TrayManagerState<Wry>>,
    enabled: bool,
) -> Result<TraySettings, String> {
    update_settings(&state.0, |m| m.set_minimize_to_tray(enabled))
}

/// 设置关闭按钮隐藏到托盘
#[tauri::command]
pub fn set_close_button_minimizes_to_tray(
    state: State<'_, TrayManagerState<Wry>>,
    enabled: bool,
) -> Result<TraySettings, String> {
    update_settings(&state.0, |m| m.set_close_button_minimizes_to_tray(enabled))
}

/// 设置托盘提示文本
#[tauri::command]
pub fn set_tray_icon_tooltip(
    state: State<'_, TrayManagerState<Wry>>,
    tooltip: String,
) -> Result<TraySettings, String> {
    update_settings(&state.0, |m| m.set_icon_tooltip(tooltip))
}

/// 切换托盘菜单语言
#[tauri::command]
pub fn set_tray_language(
    state: State<'_, TrayManagerState<Wry>>,
    language_code: String,
) -> Result<TraySettings, String> {
    update_settings(&state.0, |m| apply_language(m, &language_code))
}

/// 最小化主窗口（开启最小化到托盘时直接隐藏）
#[tauri::command]
pub fn minimize_main_window(state: State<'_, TrayManagerState<Wry>>) -> Result<(), String> {
    let guard = state.0.lock();
    let manager = guard.as_ref().ok_or_else(|| MANAGER_UNAVAILABLE.to_string())?;
    manager.minimize_window().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrayOptions;
    use crate::test_support::{FakeBackend, FakeWindow};
    use crate::tray::menu_ids;

    fn slot() -> (ManagerSlot<FakeWindow, FakeBackend>, FakeWindow, FakeBackend) {
        let window = FakeWindow::default();
        let backend = FakeBackend::default();
        let manager = SystemTrayManager::new(
            window.clone(),
            backend.clone(),
            TrayOptions {
                close_button_minimizes_to_tray: true,
                minimize_to_tray: true,
                ..TrayOptions::default()
            },
        );
        (Mutex::new(Some(manager)), window, backend)
    }

    #[test]
    fn test_missing_manager_is_reported() {
        let empty: ManagerSlot<FakeWindow, FakeBackend> = Mutex::new(None);
        assert_eq!(read_settings(&empty).unwrap_err(), MANAGER_UNAVAILABLE);
    }

    #[test]
    fn test_hide_icon_updates_dependent_toggles() {
        let (slot, _, backend) = slot();
        let settings = update_settings(&slot, |m| m.set_icon_visible(false)).unwrap();

        assert!(!settings.is_icon_visible);
        assert!(!settings.close_button_minimizes_to_tray);
        assert!(!settings.minimize_to_tray);
        assert!(!settings.close_toggle_enabled);
        assert!(!settings.minimize_toggle_enabled);
        assert!(!backend.is_present());
    }

    #[test]
    fn test_enable_toggle_while_hidden_fails() {
        let (slot, _, _) = slot();
        update_settings(&slot, |m| m.set_icon_visible(false)).unwrap();

        let err = update_settings(&slot, |m| m.set_close_button_minimizes_to_tray(true));
        assert!(err.is_err());
        assert!(!read_settings(&slot).unwrap().close_button_minimizes_to_tray);
    }

    #[test]
    fn test_language_change_refreshes_menu() {
        let (slot, _, backend) = slot();
        let settings = update_settings(&slot, |m| apply_language(m, "fr-FR")).unwrap();

        assert_eq!(settings.language_code, "fr-FR");
        let guard = slot.lock();
        let manager = guard.as_ref().unwrap();
        assert_eq!(
            manager.context_menu().label(menu_ids::SETTINGS),
            Some("Paramètres")
        );
        assert_eq!(backend.menu_labels(), vec!["Ouvrir", "Paramètres", "Quitter"]);
    }

    #[test]
    fn test_blank_language_is_ignored() {
        let (slot, _, _) = slot();
        let settings = update_settings(&slot, |m| apply_language(m, "  ")).unwrap();
        assert_eq!(settings.language_code, "en-US");
    }
}

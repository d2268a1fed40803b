pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod tray;

#[cfg(test)]
mod test_support;

use config::ShellConfig;
use parking_lot::Mutex;
use tauri::{AppHandle, Emitter, Manager, Runtime, WindowEvent};
use tracing::{error, info};
use tray::{
    classify_window_event, CloseDecision, MainWindowEvent, SystemTrayManager, TauriTray,
    TauriWindow,
};

/// 主窗口标签
pub const MAIN_WINDOW_LABEL: &str = "main";

/// 前端导航事件
pub const NAVIGATE_EVENT: &str = "navigate";

/// 应用使用的托盘管理器类型
pub type AppTrayManager<R> = SystemTrayManager<TauriWindow<R>, TauriTray<R>>;

/// 托盘管理器状态
///
/// 主窗口创建前和销毁后为 None
pub struct TrayManagerState<R: Runtime>(pub Mutex<Option<AppTrayManager<R>>>);

/// 在托盘管理器上执行操作，管理器不存在时返回 None
pub fn with_tray_manager<R, T, F>(app: &AppHandle<R>, f: F) -> Option<T>
where
    R: Runtime,
    F: FnOnce(&mut AppTrayManager<R>) -> T,
{
    let state = app.try_state::<TrayManagerState<R>>()?;
    let mut guard = state.0.lock();
    guard.as_mut().map(f)
}

fn setup_tray_manager<R: Runtime>(
    app: &AppHandle<R>,
    config: &ShellConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let window = TauriWindow::from_app(app, MAIN_WINDOW_LABEL).ok_or("未找到主窗口")?;
    let mut manager =
        SystemTrayManager::new(window, TauriTray::new(app.clone()), config.tray.clone());

    let nav_handle = app.clone();
    manager.set_open_settings_action(move || {
        if let Err(e) = nav_handle.emit(NAVIGATE_EVENT, "settings") {
            error!("[托盘] 发送导航事件失败: {}", e);
        }
    });

    let exit_handle = app.clone();
    manager.set_exit_action(move || exit_handle.exit(0));

    app.manage(TrayManagerState(Mutex::new(Some(manager))));
    Ok(())
}

fn handle_main_window_event<R: Runtime>(window: &tauri::Window<R>, event: &WindowEvent) {
    if window.label() != MAIN_WINDOW_LABEL {
        return;
    }
    let Some(event_kind) =
        classify_window_event(event, || window.is_minimized().unwrap_or(false))
    else {
        return;
    };
    let app = window.app_handle();

    if event_kind == MainWindowEvent::Destroyed {
        if let Some(state) = app.try_state::<TrayManagerState<R>>() {
            // 取出后在锁外释放，避免托盘回调重入
            let manager = state.0.lock().take();
            if let Some(mut manager) = manager {
                manager.handle_window_event(event_kind);
            }
        }
        return;
    }

    let decision = with_tray_manager(app, |manager| manager.handle_window_event(event_kind));
    if let (Some(CloseDecision::HideToTray), WindowEvent::CloseRequested { api, .. }) =
        (decision, event)
    {
        api.prevent_close();
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let config = ShellConfig::load_or_default();
    let log_path = logger::init(&config.logging);
    info!(
        "SystemTray Shell 启动，日志文件: {}",
        log_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "未启用".to_string())
    );

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
            info!("检测到重复启动，恢复主窗口");
            if let Some(Err(e)) = with_tray_manager(app, |manager| manager.restore_window()) {
                error!("恢复主窗口失败: {}", e);
            }
        }))
        .setup(move |app| setup_tray_manager(app.handle(), &config))
        .on_window_event(handle_main_window_event)
        .invoke_handler(tauri::generate_handler![
            commands::settings_cmd::get_tray_settings,
            commands::settings_cmd::set_tray_icon_visible,
            commands::settings_cmd::set_minimize_to_tray,
            commands::settings_cmd::set_close_button_minimizes_to_tray,
            commands::settings_cmd::set_tray_icon_tooltip,
            commands::settings_cmd::set_tray_language,
            commands::settings_cmd::minimize_main_window,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

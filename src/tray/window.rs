//! 窗口适配层
//!
//! 托盘管理器只通过 `WindowHelper` 操作主窗口

use crate::error::TrayError;
use tauri::{AppHandle, Manager, Runtime, WebviewWindow, WindowEvent};
use tracing::{error, info};

/// 主窗口操作接口
pub trait WindowHelper: Send + Sync {
    /// 取消最小化、显示并聚焦窗口
    fn restore(&self) -> Result<(), TrayError>;

    /// 隐藏窗口（任务栏中也不显示）
    fn hide(&self) -> Result<(), TrayError>;

    /// 最小化到任务栏
    fn minimize(&self) -> Result<(), TrayError>;

    fn is_visible(&self) -> Result<bool, TrayError>;
}

/// 托盘管理器关心的主窗口事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainWindowEvent {
    CloseRequested,
    Minimized,
    Destroyed,
}

/// 将 Tauri 窗口事件归类为主窗口事件
///
/// Tauri 没有单独的最小化事件，最小化表现为一次 `Resized`，
/// 因此收到 `Resized` 时再查询窗口是否已最小化
pub fn classify_window_event(
    event: &WindowEvent,
    is_minimized: impl FnOnce() -> bool,
) -> Option<MainWindowEvent> {
    match event {
        WindowEvent::CloseRequested { .. } => Some(MainWindowEvent::CloseRequested),
        WindowEvent::Resized(_) if is_minimized() => Some(MainWindowEvent::Minimized),
        WindowEvent::Destroyed => Some(MainWindowEvent::Destroyed),
        _ => None,
    }
}

/// 基于 Tauri WebviewWindow 的实现
pub struct TauriWindow<R: Runtime> {
    window: WebviewWindow<R>,
}

impl<R: Runtime> TauriWindow<R> {
    pub fn new(window: WebviewWindow<R>) -> Self {
        Self { window }
    }

    /// 按标签查找窗口
    pub fn from_app(app: &AppHandle<R>, label: &str) -> Option<Self> {
        app.get_webview_window(label).map(Self::new)
    }
}

impl<R: Runtime> WindowHelper for TauriWindow<R> {
    fn restore(&self) -> Result<(), TrayError> {
        // 取消最小化失败不影响后续显示
        if let Err(e) = self.window.unminimize() {
            error!("[托盘] 取消最小化窗口失败: {}", e);
        }

        self.window.show()?;

        if let Err(e) = self.window.set_focus() {
            error!("[托盘] 聚焦主窗口失败: {}", e);
        }

        info!("[托盘] 主窗口已显示");
        Ok(())
    }

    fn hide(&self) -> Result<(), TrayError> {
        self.window.hide()?;
        info!("[托盘] 主窗口已隐藏");
        Ok(())
    }

    fn minimize(&self) -> Result<(), TrayError> {
        self.window.minimize()?;
        Ok(())
    }

    fn is_visible(&self) -> Result<bool, TrayError> {
        Ok(self.window.is_visible()?)
    }
}

//! 系统托盘管理器
//!
//! 托盘图标、最小化/关闭到托盘策略和托盘菜单的唯一管理者。
//! 所有开关的约束都在这里的 setter 中维护，调用方无需重复检查。

use super::args::NotifyIconEventArgs;
use super::backend::TrayBackend;
use super::menu::{menu_ids, ContextMenu};
use super::state::{CloseDecision, IconClick, TrayState, TraySettings};
use super::window::{MainWindowEvent, WindowHelper};
use crate::config::TrayOptions;
use crate::error::TrayError;
use tracing::{debug, error, info, warn};

/// 宿主应用提供的回调
pub type HostAction = Box<dyn Fn() + Send + Sync>;

/// 系统托盘管理器
pub struct SystemTrayManager<W: WindowHelper, B: TrayBackend> {
    window: W,
    backend: B,
    state: TrayState,
    menu: ContextMenu,
    open_settings_action: Option<HostAction>,
    exit_action: Option<HostAction>,
    /// 双击后紧跟的那次左键抬起不再切换窗口
    suppress_next_left: bool,
    disposed: bool,
}

impl<W: WindowHelper, B: TrayBackend> SystemTrayManager<W, B> {
    /// 创建管理器
    ///
    /// 图标注册失败不会中断启动，管理器按图标隐藏处理
    pub fn new(window: W, backend: B, options: TrayOptions) -> Self {
        let state = TrayState::from_options(options);
        let menu = ContextMenu::build(&state.language_code);

        let mut manager = Self {
            window,
            backend,
            state,
            menu,
            open_settings_action: None,
            exit_action: None,
            suppress_next_left: false,
            disposed: false,
        };

        if manager.state.is_icon_visible {
            if let Err(e) = manager.register_icon() {
                error!("[托盘] {e}，按图标隐藏处理");
            }
        }

        manager
    }

    fn ensure_active(&self) -> Result<(), TrayError> {
        if self.disposed {
            Err(TrayError::Disposed)
        } else {
            Ok(())
        }
    }

    fn register_icon(&mut self) -> Result<(), TrayError> {
        match self.backend.create(&self.state.icon_tooltip, &self.menu) {
            Ok(()) => {
                self.state.set_icon_visible(true);
                Ok(())
            }
            Err(e) => {
                if e.degrades_icon() {
                    self.state.set_icon_visible(false);
                }
                Err(e)
            }
        }
    }

    // ========== 属性 ==========

    pub fn is_icon_visible(&self) -> bool {
        self.state.is_icon_visible
    }

    /// 显示或移除托盘图标
    ///
    /// 隐藏图标会同时关闭最小化到托盘和关闭到托盘
    pub fn set_icon_visible(&mut self, visible: bool) -> Result<(), TrayError> {
        self.ensure_active()?;

        if visible {
            if self.backend.is_present() {
                self.state.set_icon_visible(true);
                return Ok(());
            }
            if let Err(e) = self.register_icon() {
                error!("[托盘] {e}");
                return Err(e);
            }
            info!("[托盘] 托盘图标已显示");
        } else {
            self.state.set_icon_visible(false);
            if self.backend.is_present() {
                self.backend.remove()?;
            }
            info!("[托盘] 托盘图标已隐藏，托盘行为已关闭");
        }

        Ok(())
    }

    pub fn minimize_to_tray(&self) -> bool {
        self.state.minimize_to_tray
    }

    pub fn set_minimize_to_tray(&mut self, enabled: bool) -> Result<(), TrayError> {
        self.ensure_active()?;
        if enabled && !self.state.is_icon_visible {
            return Err(TrayError::IconHidden);
        }
        self.state.minimize_to_tray = enabled;
        debug!("[托盘] 最小化到托盘: {enabled}");
        Ok(())
    }

    pub fn close_button_minimizes_to_tray(&self) -> bool {
        self.state.close_button_minimizes_to_tray
    }

    pub fn set_close_button_minimizes_to_tray(&mut self, enabled: bool) -> Result<(), TrayError> {
        self.ensure_active()?;
        if enabled && !self.state.is_icon_visible {
            return Err(TrayError::IconHidden);
        }
        self.state.close_button_minimizes_to_tray = enabled;
        debug!("[托盘] 关闭按钮隐藏到托盘: {enabled}");
        Ok(())
    }

    pub fn icon_tooltip(&self) -> &str {
        &self.state.icon_tooltip
    }

    pub fn set_icon_tooltip(&mut self, tooltip: impl Into<String>) -> Result<(), TrayError> {
        self.ensure_active()?;
        self.state.icon_tooltip = tooltip.into();
        if self.backend.is_present() {
            self.backend.set_tooltip(&self.state.icon_tooltip)?;
        }
        Ok(())
    }

    pub fn language_code(&self) -> &str {
        &self.state.language_code
    }

    /// 设置菜单语言，调用 `refresh_context_menu` 后生效
    pub fn set_language_code(&mut self, language_code: impl Into<String>) -> Result<(), TrayError> {
        self.ensure_active()?;
        self.state.language_code = language_code.into();
        Ok(())
    }

    pub fn set_open_settings_action<F>(&mut self, action: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.open_settings_action = Some(Box::new(action));
    }

    pub fn set_exit_action<F>(&mut self, action: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.exit_action = Some(Box::new(action));
    }

    /// 按当前语言重建托盘菜单
    pub fn refresh_context_menu(&mut self) -> Result<(), TrayError> {
        self.ensure_active()?;
        self.menu = ContextMenu::build(&self.state.language_code);
        if self.backend.is_present() {
            self.backend.set_menu(&self.menu)?;
        }
        info!("[托盘] 托盘菜单已刷新: {}", self.menu.language());
        Ok(())
    }

    pub fn context_menu(&self) -> &ContextMenu {
        &self.menu
    }

    pub fn settings(&self) -> TraySettings {
        self.state.snapshot()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    // ========== 窗口操作 ==========

    /// 从托盘恢复主窗口
    pub fn restore_window(&self) -> Result<(), TrayError> {
        self.ensure_active()?;
        self.window.restore()
    }

    /// 最小化主窗口，开启最小化到托盘时直接隐藏
    pub fn minimize_window(&self) -> Result<(), TrayError> {
        self.ensure_active()?;
        if self.state.should_hide_on_minimize() && self.backend.is_present() {
            self.window.hide()
        } else {
            self.window.minimize()
        }
    }

    fn restore_or_log(&self) {
        if let Err(e) = self.window.restore() {
            error!("[托盘] 显示主窗口失败: {e}");
        }
    }

    // ========== 事件处理 ==========

    /// 处理托盘菜单选择
    pub fn handle_menu_selection(&mut self, menu_id: &str) {
        if self.disposed {
            debug!("[托盘] 已释放，忽略菜单事件: {menu_id}");
            return;
        }

        match menu_id {
            menu_ids::OPEN => {
                info!("[托盘] 用户请求打开主窗口");
                self.restore_or_log();
            }
            menu_ids::SETTINGS => {
                info!("[托盘] 用户请求打开设置");
                self.restore_or_log();
                if let Some(action) = &self.open_settings_action {
                    action();
                }
            }
            menu_ids::EXIT => {
                info!("[托盘] 用户请求退出应用");
                let exit = self.exit_action.take();
                self.dispose();
                if let Some(exit) = exit {
                    exit();
                }
            }
            _ => warn!("[托盘] 未知的菜单项 ID: {menu_id}"),
        }
    }

    /// 处理托盘图标点击
    pub fn handle_icon_click(&mut self, click: IconClick, args: NotifyIconEventArgs) {
        if self.disposed {
            return;
        }

        match click {
            IconClick::Left if self.suppress_next_left => {
                self.suppress_next_left = false;
                debug!("[托盘] 忽略双击后的左键抬起");
            }
            IconClick::Left => match self.window.is_visible() {
                Ok(true) => {
                    if let Err(e) = self.window.hide() {
                        error!("[托盘] 隐藏主窗口失败: {e}");
                    }
                }
                Ok(false) => self.restore_or_log(),
                Err(e) => {
                    error!("[托盘] 获取窗口可见性失败: {e}");
                    self.restore_or_log();
                }
            },
            IconClick::Double => {
                // Windows 上双击依次产生 左键抬起、双击、左键抬起
                self.suppress_next_left = true;
                self.restore_or_log();
            }
            IconClick::Right => {
                let (x, y) = args.rect.center();
                debug!("[托盘] 托盘菜单即将在 ({x}, {y}) 附近打开");
            }
        }
    }

    /// 处理主窗口关闭请求
    pub fn handle_close_requested(&self) -> CloseDecision {
        if self.disposed || !self.state.should_hide_on_close() || !self.backend.is_present() {
            return CloseDecision::Proceed;
        }

        match self.window.hide() {
            Ok(()) => {
                info!("[托盘] 关闭请求已转为隐藏到托盘");
                CloseDecision::HideToTray
            }
            Err(e) => {
                error!("[托盘] 隐藏到托盘失败，继续关闭: {e}");
                CloseDecision::Proceed
            }
        }
    }

    /// 处理主窗口最小化，返回是否已隐藏到托盘
    pub fn handle_minimized(&self) -> bool {
        if self.disposed || !self.state.should_hide_on_minimize() || !self.backend.is_present() {
            return false;
        }

        match self.window.hide() {
            Ok(()) => true,
            Err(e) => {
                error!("[托盘] 最小化到托盘失败: {e}");
                false
            }
        }
    }

    /// 按事件类型分派主窗口事件
    ///
    /// 只有 `CloseRequested` 可能返回 `HideToTray`，此时调用方应阻止关闭
    pub fn handle_window_event(&mut self, event: MainWindowEvent) -> CloseDecision {
        match event {
            MainWindowEvent::CloseRequested => self.handle_close_requested(),
            MainWindowEvent::Minimized => {
                self.handle_minimized();
                CloseDecision::Proceed
            }
            MainWindowEvent::Destroyed => {
                self.dispose();
                CloseDecision::Proceed
            }
        }
    }

    /// 释放托盘图标和回调，可重复调用
    pub fn dispose(&mut self) {
        if self.disposed {
            debug!("[托盘] 托盘管理器已释放，跳过");
            return;
        }
        self.disposed = true;

        if self.backend.is_present() {
            if let Err(e) = self.backend.remove() {
                error!("[托盘] 移除托盘图标失败: {e}");
            }
        }
        self.open_settings_action = None;
        self.exit_action = None;
        info!("[托盘] 托盘管理器已释放");
    }
}

impl<W: WindowHelper, B: TrayBackend> Drop for SystemTrayManager<W, B> {
    fn drop(&mut self) {
        self.dispose();
    }
}

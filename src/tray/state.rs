//! 托盘状态模块
//!
//! 定义托盘开关状态和设置快照结构。
//! 图标隐藏时，最小化到托盘和关闭到托盘两项必须同时关闭。

use super::locale;
use crate::config::TrayOptions;
use serde::Serialize;
use tracing::warn;

/// 托盘图标点击类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconClick {
    /// 左键单击 - 切换主窗口可见性
    Left,
    /// 右键单击 - 系统弹出托盘菜单
    Right,
    /// 左键双击 - 显示并聚焦主窗口
    Double,
}

/// 关闭请求的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    /// 窗口已隐藏到托盘，应阻止关闭
    HideToTray,
    /// 按正常流程关闭窗口
    Proceed,
}

/// 托盘开关状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrayState {
    pub is_icon_visible: bool,
    pub minimize_to_tray: bool,
    pub close_button_minimizes_to_tray: bool,
    pub icon_tooltip: String,
    pub language_code: String,
}

impl TrayState {
    /// 从配置创建状态，图标隐藏时关闭依赖项
    pub fn from_options(options: TrayOptions) -> Self {
        let mut state = Self {
            is_icon_visible: options.is_icon_visible,
            minimize_to_tray: options.minimize_to_tray,
            close_button_minimizes_to_tray: options.close_button_minimizes_to_tray,
            icon_tooltip: options.icon_tooltip,
            language_code: options.language_code,
        };
        if !state.is_icon_visible
            && (state.minimize_to_tray || state.close_button_minimizes_to_tray)
        {
            warn!("[托盘] 图标未显示，忽略配置中的最小化/关闭到托盘选项");
        }
        state.set_icon_visible(state.is_icon_visible);
        state
    }

    /// 设置图标可见性
    pub fn set_icon_visible(&mut self, visible: bool) {
        self.is_icon_visible = visible;
        if !visible {
            self.minimize_to_tray = false;
            self.close_button_minimizes_to_tray = false;
        }
    }

    /// 最小化到托盘开关是否可用
    pub fn minimize_toggle_enabled(&self) -> bool {
        self.is_icon_visible
    }

    /// 关闭到托盘开关是否可用
    pub fn close_toggle_enabled(&self) -> bool {
        self.is_icon_visible
    }

    /// 关闭按钮是否应隐藏到托盘
    pub fn should_hide_on_close(&self) -> bool {
        self.is_icon_visible && self.close_button_minimizes_to_tray
    }

    /// 最小化时是否应隐藏到托盘
    pub fn should_hide_on_minimize(&self) -> bool {
        self.is_icon_visible && self.minimize_to_tray
    }

    pub fn snapshot(&self) -> TraySettings {
        TraySettings {
            is_icon_visible: self.is_icon_visible,
            minimize_to_tray: self.minimize_to_tray,
            close_button_minimizes_to_tray: self.close_button_minimizes_to_tray,
            icon_tooltip: self.icon_tooltip.clone(),
            language_code: self.language_code.clone(),
            minimize_toggle_enabled: self.minimize_toggle_enabled(),
            close_toggle_enabled: self.close_toggle_enabled(),
            available_languages: locale::supported_languages(),
        }
    }
}

/// 设置页使用的状态快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraySettings {
    pub is_icon_visible: bool,
    pub minimize_to_tray: bool,
    pub close_button_minimizes_to_tray: bool,
    pub icon_tooltip: String,
    pub language_code: String,
    pub minimize_toggle_enabled: bool,
    pub close_toggle_enabled: bool,
    pub available_languages: Vec<&'static str>,
}

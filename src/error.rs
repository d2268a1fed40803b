//! 托盘错误类型
//!
//! 定义托盘管理过程中可能发生的错误

use thiserror::Error;

/// 托盘错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrayError {
    /// 托盘图标注册失败
    #[error("托盘图标注册失败: {0}")]
    IconRegistration(String),

    /// 托盘菜单构建失败
    #[error("托盘菜单构建失败: {0}")]
    MenuBuild(String),

    /// 托盘图标内容更新失败，图标本身仍然存在
    #[error("托盘图标更新失败: {0}")]
    TrayUpdate(String),

    /// 窗口操作失败
    #[error("窗口操作失败: {0}")]
    Window(String),

    /// 托盘图标隐藏时无法启用托盘行为
    #[error("托盘图标未显示，无法启用最小化到托盘")]
    IconHidden,

    /// 托盘管理器已释放
    #[error("托盘管理器已释放")]
    Disposed,
}

impl TrayError {
    /// 获取错误类型字符串
    pub fn error_type(&self) -> &'static str {
        match self {
            TrayError::IconRegistration(_) => "icon_registration_error",
            TrayError::MenuBuild(_) => "menu_build_error",
            TrayError::TrayUpdate(_) => "tray_update_error",
            TrayError::Window(_) => "window_error",
            TrayError::IconHidden => "icon_hidden",
            TrayError::Disposed => "disposed",
        }
    }

    /// 检查错误是否意味着托盘图标不可用
    ///
    /// 出现这类错误时，管理器按图标隐藏处理
    pub fn degrades_icon(&self) -> bool {
        matches!(
            self,
            TrayError::IconRegistration(_) | TrayError::MenuBuild(_)
        )
    }
}

impl From<tauri::Error> for TrayError {
    fn from(err: tauri::Error) -> Self {
        TrayError::Window(err.to_string())
    }
}

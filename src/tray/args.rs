//! 托盘图标事件参数

use serde::Serialize;

/// 托盘图标在屏幕上的矩形区域（物理像素）
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct IconRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl IconRect {
    /// 矩形中心点，用于在图标附近定位弹出内容
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// 托盘图标事件参数
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NotifyIconEventArgs {
    pub rect: IconRect,
}

impl NotifyIconEventArgs {
    pub fn new(rect: IconRect) -> Self {
        Self { rect }
    }
}

impl From<&tauri::Rect> for NotifyIconEventArgs {
    fn from(rect: &tauri::Rect) -> Self {
        let position = rect.position.to_physical::<f64>(1.0);
        let size = rect.size.to_physical::<f64>(1.0);
        Self::new(IconRect {
            x: position.x,
            y: position.y,
            width: size.width,
            height: size.height,
        })
    }
}

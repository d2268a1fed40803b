//! 单元测试用的窗口和托盘替身

use crate::error::TrayError;
use crate::tray::{ContextMenu, TrayBackend, WindowHelper};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct WindowRecord {
    pub visible: bool,
    pub minimized: bool,
    pub restore_calls: usize,
    pub hide_calls: usize,
    pub minimize_calls: usize,
    pub fail_hide: bool,
}

/// 记录调用的窗口替身，克隆后共享同一份记录
#[derive(Clone)]
pub struct FakeWindow(pub Arc<Mutex<WindowRecord>>);

impl Default for FakeWindow {
    fn default() -> Self {
        Self(Arc::new(Mutex::new(WindowRecord {
            visible: true,
            ..WindowRecord::default()
        })))
    }
}

impl FakeWindow {
    pub fn is_visible_now(&self) -> bool {
        self.0.lock().visible
    }

    pub fn is_minimized_now(&self) -> bool {
        self.0.lock().minimized
    }

    pub fn restore_calls(&self) -> usize {
        self.0.lock().restore_calls
    }

    pub fn hide_calls(&self) -> usize {
        self.0.lock().hide_calls
    }

    pub fn minimize_calls(&self) -> usize {
        self.0.lock().minimize_calls
    }

    pub fn set_fail_hide(&self, fail: bool) {
        self.0.lock().fail_hide = fail;
    }

    pub fn set_visible(&self, visible: bool) {
        self.0.lock().visible = visible;
    }
}

impl WindowHelper for FakeWindow {
    fn restore(&self) -> Result<(), TrayError> {
        let mut record = self.0.lock();
        record.restore_calls += 1;
        record.visible = true;
        record.minimized = false;
        Ok(())
    }

    fn hide(&self) -> Result<(), TrayError> {
        let mut record = self.0.lock();
        record.hide_calls += 1;
        if record.fail_hide {
            return Err(TrayError::Window("hide failed".to_string()));
        }
        record.visible = false;
        Ok(())
    }

    fn minimize(&self) -> Result<(), TrayError> {
        let mut record = self.0.lock();
        record.minimize_calls += 1;
        record.minimized = true;
        Ok(())
    }

    fn is_visible(&self) -> Result<bool, TrayError> {
        Ok(self.0.lock().visible)
    }
}

#[derive(Debug, Default)]
pub struct BackendRecord {
    pub present: bool,
    pub create_calls: usize,
    pub remove_calls: usize,
    pub tooltip: Option<String>,
    pub menu_labels: Vec<String>,
    pub fail_create: bool,
    pub fail_tooltip: bool,
}

/// 记录调用的托盘替身
#[derive(Clone, Default)]
pub struct FakeBackend(pub Arc<Mutex<BackendRecord>>);

impl FakeBackend {
    pub fn failing() -> Self {
        let backend = Self::default();
        backend.set_fail_create(true);
        backend
    }

    pub fn set_fail_create(&self, fail: bool) {
        self.0.lock().fail_create = fail;
    }

    pub fn set_fail_tooltip(&self, fail: bool) {
        self.0.lock().fail_tooltip = fail;
    }

    pub fn create_calls(&self) -> usize {
        self.0.lock().create_calls
    }

    pub fn remove_calls(&self) -> usize {
        self.0.lock().remove_calls
    }

    pub fn tooltip(&self) -> Option<String> {
        self.0.lock().tooltip.clone()
    }

    pub fn menu_labels(&self) -> Vec<String> {
        self.0.lock().menu_labels.clone()
    }

    fn record_menu(record: &mut BackendRecord, menu: &ContextMenu) {
        record.menu_labels = menu.labels().into_iter().map(str::to_string).collect();
    }
}

impl TrayBackend for FakeBackend {
    fn create(&mut self, tooltip: &str, menu: &ContextMenu) -> Result<(), TrayError> {
        let mut record = self.0.lock();
        record.create_calls += 1;
        if record.fail_create {
            return Err(TrayError::IconRegistration("shell unavailable".to_string()));
        }
        record.present = true;
        record.tooltip = Some(tooltip.to_string());
        Self::record_menu(&mut record, menu);
        Ok(())
    }

    fn remove(&mut self) -> Result<(), TrayError> {
        let mut record = self.0.lock();
        record.remove_calls += 1;
        record.present = false;
        Ok(())
    }

    fn set_tooltip(&mut self, tooltip: &str) -> Result<(), TrayError> {
        let mut record = self.0.lock();
        if record.fail_tooltip {
            return Err(TrayError::TrayUpdate("tooltip rejected".to_string()));
        }
        record.tooltip = Some(tooltip.to_string());
        Ok(())
    }

    fn set_menu(&mut self, menu: &ContextMenu) -> Result<(), TrayError> {
        Self::record_menu(&mut self.0.lock(), menu);
        Ok(())
    }

    fn is_present(&self) -> bool {
        self.0.lock().present
    }
}

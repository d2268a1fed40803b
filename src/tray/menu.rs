//! 托盘菜单模块
//!
//! 菜单在构造时按语言表一次性生成，切换语言后需要显式调用
//! `SystemTrayManager::refresh_context_menu` 才会重建

use super::locale;
use serde::Serialize;

/// 菜单项 ID
pub mod menu_ids {
    /// 打开主窗口
    pub const OPEN: &str = "open";
    /// 打开设置页
    pub const SETTINGS: &str = "settings";
    /// 退出应用
    pub const EXIT: &str = "exit";
}

/// 菜单条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MenuEntry {
    Item { id: &'static str, label: String },
    Separator,
}

/// 已生成的托盘菜单
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextMenu {
    language: &'static str,
    entries: Vec<MenuEntry>,
}

impl ContextMenu {
    /// 按语言代码生成菜单
    pub fn build(language_code: &str) -> Self {
        let table = locale::resolve(language_code);
        let item = |id: &'static str, label: &str| MenuEntry::Item {
            id,
            label: label.to_string(),
        };

        Self {
            language: table.code,
            entries: vec![
                item(menu_ids::OPEN, table.open),
                item(menu_ids::SETTINGS, table.settings),
                MenuEntry::Separator,
                item(menu_ids::EXIT, table.exit),
            ],
        }
    }

    /// 实际使用的语言代码（回退后的结果）
    pub fn language(&self) -> &'static str {
        self.language
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// 按 ID 查找菜单文本
    pub fn label(&self, id: &str) -> Option<&str> {
        self.entries.iter().find_map(|entry| match entry {
            MenuEntry::Item { id: item_id, label } if *item_id == id => Some(label.as_str()),
            _ => None,
        })
    }

    /// 所有菜单项文本（不含分隔符）
    pub fn labels(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                MenuEntry::Item { label, .. } => Some(label.as_str()),
                MenuEntry::Separator => None,
            })
            .collect()
    }
}

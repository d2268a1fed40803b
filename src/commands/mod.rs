//! Tauri 命令模块

pub mod settings_cmd;

//! 配置模块
//!
//! 启动时从 `<config_dir>/systray-shell/config.yaml` 读取配置，
//! 文件不存在时使用默认值。运行期间的设置修改不会写回文件。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 默认托盘提示文本
pub const DEFAULT_TOOLTIP: &str = "SystemTray Shell";

/// 默认语言
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("读取配置文件失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("解析配置文件失败: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// 托盘选项
///
/// 构造 `SystemTrayManager` 时传入的配置块
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrayOptions {
    /// 是否显示托盘图标
    pub is_icon_visible: bool,
    /// 托盘图标提示文本
    pub icon_tooltip: String,
    /// 最小化时隐藏到托盘
    pub minimize_to_tray: bool,
    /// 关闭按钮隐藏到托盘而不是退出
    pub close_button_minimizes_to_tray: bool,
    /// 托盘菜单语言
    pub language_code: String,
}

impl Default for TrayOptions {
    fn default() -> Self {
        Self {
            is_icon_visible: true,
            icon_tooltip: DEFAULT_TOOLTIP.to_string(),
            minimize_to_tray: false,
            close_button_minimizes_to_tray: false,
            language_code: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 是否写入日志文件
    pub enabled: bool,
    /// 日志级别（可被 RUST_LOG 覆盖）
    pub level: String,
    /// 轮转文件保留天数
    pub retention_days: u32,
    /// 单个日志文件最大字节数
    pub max_file_size: u64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            retention_days: 7,
            max_file_size: 10 * 1024 * 1024,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub tray: TrayOptions,
    pub logging: LoggingConfig,
}

impl ShellConfig {
    /// 默认配置文件路径
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("systray-shell").join("config.yaml"))
    }

    /// 从指定路径加载配置，文件不存在时返回默认配置
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// 解析 YAML 配置内容
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// 加载默认位置的配置，失败时回退到默认值
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                // 日志系统尚未初始化，直接输出到 stderr
                eprintln!("配置文件 {} 无效，使用默认配置: {e}", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_tray_options() {
        let options = TrayOptions::default();
        assert!(options.is_icon_visible);
        assert!(!options.minimize_to_tray);
        assert!(!options.close_button_minimizes_to_tray);
        assert_eq!(options.icon_tooltip, DEFAULT_TOOLTIP);
        assert_eq!(options.language_code, "en-US");
    }

    #[test]
    fn test_parse_partial_config() {
        let yaml = r#"
tray:
  close_button_minimizes_to_tray: true
  language_code: fr-FR
logging:
  level: debug
"#;
        let config = ShellConfig::parse(yaml).unwrap();
        assert!(config.tray.is_icon_visible);
        assert!(config.tray.close_button_minimizes_to_tray);
        assert_eq!(config.tray.language_code, "fr-FR");
        assert_eq!(config.tray.icon_tooltip, DEFAULT_TOOLTIP);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.retention_days, 7);
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(ShellConfig::parse("  \n").unwrap(), ShellConfig::default());
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = ShellConfig::parse("tray: [not, a, map]");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShellConfig::load_from(&dir.path().join("config.yaml")).unwrap();
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "tray:\n  is_icon_visible: false\n  icon_tooltip: Demo").unwrap();

        let config = ShellConfig::load_from(&path).unwrap();
        assert!(!config.tray.is_icon_visible);
        assert_eq!(config.tray.icon_tooltip, "Demo");
    }
}

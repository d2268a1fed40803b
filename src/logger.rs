//! 日志管理模块
use crate::config::LoggingConfig;
use chrono::{Duration, Local, Utc};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_NAME: &str = "systray-shell.log";

/// 默认日志目录: ~/.systray-shell/logs
pub fn log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".systray-shell")
        .join("logs")
}

/// 初始化 tracing 订阅者
///
/// 返回实际使用的日志文件路径（未启用文件日志时为 None）
pub fn init(config: &LoggingConfig) -> Option<PathBuf> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let log_file = if config.enabled {
        open_log_file(&log_dir(), config)
    } else {
        None
    };
    let log_path = log_file.as_ref().map(|(_, path)| path.clone());
    let file_layer = log_file.map(|(file, _)| {
        fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .with_writer(Mutex::new(file))
    });

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init();
    if let Err(e) = result {
        eprintln!("日志系统已初始化: {e}");
    }

    log_path
}

fn open_log_file(dir: &Path, config: &LoggingConfig) -> Option<(File, PathBuf)> {
    if let Err(e) = fs::create_dir_all(dir) {
        eprintln!("创建日志目录失败: {e}");
        return None;
    }
    let path = dir.join(LOG_FILE_NAME);
    rotate_log_file_if_needed(&path, config.max_file_size);
    prune_old_logs(&path, config.retention_days);

    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => Some((file, path)),
        Err(e) => {
            eprintln!("打开日志文件失败: {e}");
            None
        }
    }
}

/// 日志文件超过大小限制时重命名为带时间戳的轮转文件
pub(crate) fn rotate_log_file_if_needed(path: &Path, max_file_size: u64) -> Option<PathBuf> {
    let metadata = fs::metadata(path).ok()?;
    if metadata.len() <= max_file_size {
        return None;
    }

    let suffix = Local::now().format("%Y%m%d-%H%M%S");
    let rotated = path.with_file_name(format!(
        "{}.{}",
        path.file_name().unwrap_or_default().to_string_lossy(),
        suffix
    ));

    fs::rename(path, &rotated).ok()?;
    Some(rotated)
}

/// 删除超过保留天数的轮转文件
pub(crate) fn prune_old_logs(path: &Path, retention_days: u32) {
    let Some(dir) = path.parent() else {
        return;
    };
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    let cutoff = Utc::now() - Duration::days(retention_days as i64);
    let prefix = format!(
        "{}.",
        path.file_name().unwrap_or_default().to_string_lossy()
    );

    for entry in entries.flatten() {
        let file_name = entry.file_name();
        if !file_name.to_string_lossy().starts_with(&prefix) {
            continue;
        }
        let Ok(modified) = entry.metadata().and_then(|m| m.modified()) else {
            continue;
        };
        if chrono::DateTime::<Utc>::from(modified) < cutoff {
            let _ = fs::remove_file(entry.path());
        }
    }
}

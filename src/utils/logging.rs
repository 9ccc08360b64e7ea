//! 日志初始化
//!
//! 按 `[log]` 配置启动 flexi_logger 文件日志（按大小轮转、异步写入），
//! 句柄保存在进程级槽位中，`shutdown` 时 flush。

use std::sync::Mutex;

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};

use crate::config::Config;
use crate::core::error::{DBError, DBResult};

static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// 初始化日志系统
///
/// 重复初始化或日志规格无效时返回 `DBError::Config`。
pub fn init(config: &Config) -> DBResult<()> {
    let mut guard = LOGGER_HANDLE
        .lock()
        .map_err(|_| DBError::Internal("日志句柄锁被污染".to_string()))?;
    if guard.is_some() {
        return Err(DBError::Config("日志系统已初始化".to_string()));
    }

    let log_config = &config.log;
    let handle = Logger::try_with_str(&log_config.level)
        .map_err(|e| {
            DBError::Config(format!("无效的日志级别 '{}': {}", log_config.level, e))
        })?
        .log_to_file(
            FileSpec::default()
                .basename(&log_config.file)
                .directory(&log_config.dir),
        )
        .rotate(
            Criterion::Size(log_config.max_file_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(log_config.max_files),
        )
        .write_mode(WriteMode::Async)
        .append()
        .start()
        .map_err(|e| DBError::Config(format!("日志系统启动失败: {}", e)))?;
    *guard = Some(handle);

    log::info!(
        "日志系统初始化完成: {}/{} (level={})",
        log_config.dir,
        log_config.file,
        log_config.level
    );
    match config.execution.max_docs_scanned {
        Some(limit) => log::info!("文档扫描预算: {}", limit),
        None => log::info!("文档扫描预算: 不限制"),
    }
    Ok(())
}

/// 刷新并关闭日志系统
pub fn shutdown() {
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        if let Some(handle) = guard.take() {
            handle.flush();
        }
    }
}

pub fn is_initialized() -> bool {
    LOGGER_HANDLE
        .lock()
        .map(|guard| guard.is_some())
        .unwrap_or(false)
}

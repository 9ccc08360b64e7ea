//! 配置模块
//!
//! TOML 配置文件，包含 `[log]` 和 `[execution]` 两段。

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{QueryError, QueryResult};
use crate::query::executor::base::ExecutionStatistics;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub execution: ExecutionConfig,
}

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "olapcore".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
        }
    }
}

/// 执行配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ExecutionConfig {
    /// 单次查询允许扫描的最大文档数，未设置表示不限制
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_docs_scanned: Option<u64>,
}

impl ExecutionConfig {
    /// 根据执行统计检查文档扫描预算
    pub fn check_scan_budget(&self, statistics: &ExecutionStatistics) -> QueryResult<()> {
        match self.max_docs_scanned {
            Some(limit) if statistics.docs_scanned() > limit => {
                log::warn!(
                    "扫描文档数 {} 超出预算 {}",
                    statistics.docs_scanned(),
                    limit
                );
                Err(QueryError::ScanBudgetExceeded {
                    scanned: statistics.docs_scanned(),
                    limit,
                })
            }
            _ => Ok(()),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.log.dir = Config::resolve_log_dir(&config.log.dir)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn resolve_log_dir(log_dir: &str) -> Result<String, Box<dyn std::error::Error>> {
        let path = PathBuf::from(log_dir);

        if path.is_absolute() {
            return Ok(log_dir.to_string());
        }

        if let Some(relative_path) = log_dir.strip_prefix('~') {
            let home_dir = env::var_os("HOME")
                .or_else(|| env::var_os("USERPROFILE"))
                .map(PathBuf::from)
                .ok_or("无法获取用户主目录")?;
            let relative_path = relative_path.trim_start_matches(['/', '\\']);
            return Ok(home_dir.join(relative_path).to_string_lossy().into_owned());
        }

        let exe_path = env::current_exe()?;
        let exe_dir = exe_path
            .parent()
            .ok_or("无法获取可执行文件所在目录")?
            .to_path_buf();
        Ok(exe_dir.join(&path).to_string_lossy().into_owned())
    }
}

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AppError, AppResult};

const APP_NAME: &str = "jotter";

/// 覆盖配置文件路径的环境变量
pub const CONFIG_ENV: &str = "JOTTER_CONFIG";

/// 日志级别
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        };
        f.write_str(s)
    }
}

/// 配置文件结构 (config.toml)，所有键都可省略
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub input_label: String,
    pub list_label: String,
    pub mouse: bool,
    pub log_level: LogLevel,
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "📝 Jotter".to_string(),
            input_label: "新条目".to_string(),
            list_label: "列表".to_string(),
            mouse: true,
            log_level: LogLevel::default(),
            log_path: None,
        }
    }
}

impl Config {
    /// 实际使用的日志文件路径 (~/.local/share/jotter/jotter.log)
    pub fn effective_log_path(&self) -> AppResult<PathBuf> {
        match &self.log_path {
            Some(path) => Ok(path.clone()),
            None => Ok(dirs::data_dir()
                .ok_or(AppError::MissingDir("data"))?
                .join(APP_NAME)
                .join("jotter.log")),
        }
    }
}

/// 默认配置文件路径 (~/.config/jotter/config.toml)，可由环境变量覆盖
pub fn config_path() -> AppResult<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }

    Ok(dirs::config_dir()
        .ok_or(AppError::MissingDir("config"))?
        .join(APP_NAME)
        .join("config.toml"))
}

/// 从TOML文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> AppResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|source| AppError::Config {
        path: path.to_path_buf(),
        source,
    })
}

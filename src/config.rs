//! 服务配置

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::app::beer::DEFAULT_BASE_PATH;

/// 服务配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// API 配置
    pub api: ApiConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
}

/// API 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// 资源路径前缀
    pub base_path: String,
    /// 启动时写入示例数据
    pub seed_sample_data: bool,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
    /// 是否启用控制台输出
    pub console_output: bool,
    /// 日志目录，未设置时不写文件
    pub log_dir: Option<PathBuf>,
    /// 日志文件名前缀
    pub file_prefix: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            seed_sample_data: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            console_output: true,
            log_dir: None,
            file_prefix: "beer-service".to_string(),
        }
    }
}

impl HttpConfig {
    /// 监听地址
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .map_err(|e| ConfigError::Validation(format!("无效的监听地址: {}", e)))
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::FileWrite(e.to_string()))?;
        }

        fs::write(path.as_ref(), content).map_err(|e| ConfigError::FileWrite(e.to_string()))?;

        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }

        let base_path = &self.api.base_path;
        if !base_path.starts_with('/') || base_path.len() < 2 {
            return Err(ConfigError::Validation(format!(
                "资源路径必须以 / 开头且不能为根路径: {}",
                base_path
            )));
        }
        if base_path.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "资源路径不能以 / 结尾: {}",
                base_path
            )));
        }
        // `:` 和 `*` 会被路由解析为路径参数
        if base_path.contains([':', '*']) {
            return Err(ConfigError::Validation(format!(
                "资源路径不能包含 : 或 *: {}",
                base_path
            )));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("文件写入错误: {0}")]
    FileWrite(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置序列化错误: {0}")]
    Serialize(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 加载配置
///
/// 优先使用显式指定的路径，其次依次尝试 `config.toml`、`config/config.toml`，
/// 都不存在时使用默认配置。
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = path {
        info!("从配置文件加载: {}", path.display());
        return Config::load_from_file(path);
    }

    let config_paths = ["config.toml", "./config/config.toml"];

    for path in &config_paths {
        if Path::new(path).exists() {
            info!("从配置文件加载: {}", path);
            return Config::load_from_file(path);
        }
    }

    info!("未找到配置文件，使用默认配置");
    Ok(Config::default())
}

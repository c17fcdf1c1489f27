//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;
use super::API_KEY_ENV;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    #[error("Environment variable AUDICT_API_KEY is not set")]
    MissingApiKey,
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `AUDICT_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `AUDICT_SERVER__HOST=127.0.0.1`
/// - `AUDICT_SERVER__PORT=8080`
/// - `AUDICT_DICT__TEXT_ARCHIVE=/data/dict/entries.dict`
/// - `AUDICT_DICT__MEDIA_ARCHIVE=/data/dict/media.dict`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000)?
        .set_default("dict.text_archive", "data/dict/entries.dict")?
        .set_default("dict.media_archive", "data/dict/media.dict")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        // 搜索默认配置文件
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: AUDICT_
    // 层级分隔符: __ (双下划线)
    // 例如: AUDICT_DICT__TEXT_ARCHIVE=/data/dict/entries.dict
    builder = builder.add_source(
        Environment::with_prefix("AUDICT")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    // 6. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    // 验证端口范围
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    // 验证归档路径
    if config.dict.text_archive.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Text archive path cannot be empty".to_string(),
        ));
    }
    if config.dict.media_archive.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Media archive path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 启动时校验共享密钥已配置
///
/// 密钥缺失或为空白时进程拒绝启动。
/// 注意这里只校验存在性：密钥值由请求守卫按请求即时读取，不在此缓存。
pub fn require_api_key() -> Result<(), ConfigError> {
    if api_key_present(API_KEY_ENV) {
        Ok(())
    } else {
        Err(ConfigError::MissingApiKey)
    }
}

fn api_key_present(var: &str) -> bool {
    std::env::var(var)
        .map(|v| !v.trim().is_empty())
        .unwrap_or(false)
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Text Archive: {}", config.dict.text_archive.display());
    tracing::info!("Media Archive: {}", config.dict.media_archive.display());
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("Log JSON: {}", config.log.json);
    // 密钥只报告是否已配置，绝不打印值
    tracing::info!("API Key Configured: {}", api_key_present(API_KEY_ENV));
    tracing::info!("=================================");
}

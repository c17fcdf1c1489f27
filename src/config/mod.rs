//! Configuration Module
//!
//! 提供应用配置管理功能，支持多层级配置来源：
//! - 环境变量（最高优先级）
//! - 配置文件（TOML 格式）
//! - 默认值（最低优先级）
//!
//! 共享密钥是个例外：它只存在于进程环境变量中，不进入 AppConfig。

mod loader;
mod types;

/// 期望的 API Key 所在的环境变量
///
/// 密钥按请求即时从环境读取，不缓存、不落在任何配置对象上
pub const API_KEY_ENV: &str = "AUDICT_API_KEY";

pub use loader::{load_config, print_config, require_api_key, ConfigError};
pub use types::{AppConfig, DictConfig, LogConfig, ServerConfig};

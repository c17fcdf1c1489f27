//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 词典归档配置
    #[serde(default)]
    pub dict: DictConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            dict: DictConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 词典归档配置
///
/// 词典由两个归档文件组成：
/// - 文本归档：单词 -> 词条正文（可内嵌 sound:// 发音引用）
/// - 媒体归档：媒体键 -> 音频二进制数据
#[derive(Debug, Clone, Deserialize)]
pub struct DictConfig {
    /// 文本归档路径
    #[serde(default = "default_text_archive")]
    pub text_archive: PathBuf,

    /// 媒体归档路径
    #[serde(default = "default_media_archive")]
    pub media_archive: PathBuf,
}

fn default_text_archive() -> PathBuf {
    PathBuf::from("data/dict/entries.dict")
}

fn default_media_archive() -> PathBuf {
    PathBuf::from("data/dict/media.dict")
}

impl Default for DictConfig {
    fn default() -> Self {
        Self {
            text_archive: default_text_archive(),
            media_archive: default_media_archive(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

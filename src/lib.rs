//! Audict - 词典发音音频服务
//!
//! 给定一个单词，从文本词典归档中取出词条正文，解析其中内嵌的
//! `sound://` 发音引用，再到媒体归档中取出对应的音频数据返回。
//!
//! 架构: Hexagonal (Ports & Adapters)
//!
//! 领域层 (domain/):
//! - 音频引用提取（正文 -> AudioReference）
//! - 媒体键规范化（AudioReference -> MediaKey）
//!
//! 应用层 (application/):
//! - Ports: 词典归档查询引擎抽象（DictIndexPort）
//! - Queries: 发音查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（axum）
//! - Archive: 归档引擎适配器（bincode 单文件归档 + 内存假实现）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};

//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（词典归档查询引擎）
//! - queries: 发音查询及处理器

pub mod ports;
pub mod queries;

// Re-exports
pub use ports::{ArchiveError, DictIndexPort, DictRecord};
pub use queries::{GetPronunciationHandler, PronunciationQuery, PronunciationResponse};

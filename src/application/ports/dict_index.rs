//! Dict Index Port - 词典归档查询引擎抽象
//!
//! 词典由两个归档组成：文本归档（单词 -> 词条正文）与媒体归档
//! （媒体键 -> 音频数据）。两者通过同一个查询接口访问，
//! 具体归档格式由 infrastructure/archive 的适配器实现。

use async_trait::async_trait;
use thiserror::Error;

/// 归档装载错误
///
/// 只在启动装载阶段出现；装载成功后的查询不会失败
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Archive file not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Archive decode error: {0}")]
    DecodeError(String),
}

/// 归档记录
#[derive(Debug, Clone)]
pub struct DictRecord {
    /// 归档内的索引键
    pub key: String,
    /// 记录原始字节（词条正文或音频数据）
    pub data: Vec<u8>,
}

/// 词典归档查询端口
///
/// 归档在启动时一次性装载，装载后只读，
/// 可被任意数量的在途请求并发查询，无需加锁
#[async_trait]
pub trait DictIndexPort: Send + Sync {
    /// 按键查询，返回零条或多条匹配记录（保持归档内顺序）
    ///
    /// `fold_case` 为 true 时按大小写不敏感方式匹配
    async fn lookup(&self, key: &str, fold_case: bool) -> Vec<DictRecord>;

    /// 归档内记录总数
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

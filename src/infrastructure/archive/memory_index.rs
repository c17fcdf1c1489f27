//! In-Memory Dict Index - 测试用的内存归档引擎
//!
//! 不读任何文件，记录由代码直接插入

use async_trait::async_trait;

use crate::application::ports::{DictIndexPort, DictRecord};

/// 内存归档引擎
#[derive(Debug, Default)]
pub struct InMemoryDictIndex {
    records: Vec<DictRecord>,
}

impl InMemoryDictIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入一条记录（保持插入顺序）
    pub fn insert(&mut self, key: impl Into<String>, data: Vec<u8>) {
        self.records.push(DictRecord {
            key: key.into(),
            data,
        });
    }
}

#[async_trait]
impl DictIndexPort for InMemoryDictIndex {
    async fn lookup(&self, key: &str, fold_case: bool) -> Vec<DictRecord> {
        let folded = key.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                if fold_case {
                    r.key.to_lowercase() == folded
                } else {
                    r.key == key
                }
            })
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

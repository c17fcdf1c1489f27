//! Bincode 单文件归档引擎
//!
//! 归档文件是 bincode 编码的记录列表（键 + 原始字节）。
//! 启动时整体读入内存并建立精确/大小写折叠两套索引，
//! 之后的查询纯内存完成，只读无锁。

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{ArchiveError, DictIndexPort, DictRecord};

/// 归档文件内的记录编码
#[derive(Debug, Serialize, Deserialize)]
struct ArchiveEntry {
    key: String,
    data: Vec<u8>,
}

/// Bincode 归档引擎
///
/// 同一个键可以对应多条记录，查询按归档内顺序返回
#[derive(Debug)]
pub struct BincodeDictIndex {
    records: Vec<DictRecord>,
    /// 键 -> 记录下标（精确匹配）
    exact: HashMap<String, Vec<usize>>,
    /// 小写键 -> 记录下标（大小写折叠匹配）
    folded: HashMap<String, Vec<usize>>,
}

impl BincodeDictIndex {
    /// 装载归档文件
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ArchiveError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ArchiveError::NotFound(path.display().to_string())
            } else {
                ArchiveError::IoError(e.to_string())
            }
        })?;

        let entries: Vec<ArchiveEntry> = bincode::deserialize(&bytes)
            .map_err(|e| ArchiveError::DecodeError(e.to_string()))?;

        let mut records = Vec::with_capacity(entries.len());
        let mut exact: HashMap<String, Vec<usize>> = HashMap::new();
        let mut folded: HashMap<String, Vec<usize>> = HashMap::new();

        for (i, entry) in entries.into_iter().enumerate() {
            exact.entry(entry.key.clone()).or_default().push(i);
            folded.entry(entry.key.to_lowercase()).or_default().push(i);
            records.push(DictRecord {
                key: entry.key,
                data: entry.data,
            });
        }

        tracing::info!(
            path = %path.display(),
            records = records.len(),
            "Dictionary archive loaded"
        );

        Ok(Self {
            records,
            exact,
            folded,
        })
    }
}

#[async_trait]
impl DictIndexPort for BincodeDictIndex {
    async fn lookup(&self, key: &str, fold_case: bool) -> Vec<DictRecord> {
        let indices = if fold_case {
            self.folded.get(&key.to_lowercase())
        } else {
            self.exact.get(key)
        };

        indices
            .map(|ids| ids.iter().map(|&i| self.records[i].clone()).collect())
            .unwrap_or_default()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

/// 写出归档文件（测试与打包工具用）
pub fn write_archive<P: AsRef<Path>>(
    path: P,
    entries: &[(&str, &[u8])],
) -> Result<(), ArchiveError> {
    let encoded: Vec<ArchiveEntry> = entries
        .iter()
        .map(|(key, data)| ArchiveEntry {
            key: key.to_string(),
            data: data.to_vec(),
        })
        .collect();

    let bytes =
        bincode::serialize(&encoded).map_err(|e| ArchiveError::DecodeError(e.to_string()))?;
    std::fs::write(path, bytes).map_err(|e| ArchiveError::IoError(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_open_and_lookup() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("entries.dict");
        write_archive(
            &path,
            &[
                ("apple", b"<b>apple</b>".as_slice()),
                ("pear", b"<b>pear</b>".as_slice()),
            ],
        )
        .unwrap();

        let index = BincodeDictIndex::open(&path).unwrap();
        assert_eq!(index.len(), 2);

        let hits = index.lookup("apple", false).await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].key, "apple");
        assert_eq!(hits[0].data, b"<b>apple</b>");

        assert!(index.lookup("banana", false).await.is_empty());
    }

    #[tokio::test]
    async fn test_case_folded_lookup() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("entries.dict");
        write_archive(&path, &[("Apple", b"entry".as_slice())]).unwrap();

        let index = BincodeDictIndex::open(&path).unwrap();

        // 精确匹配区分大小写
        assert!(index.lookup("apple", false).await.is_empty());
        // 折叠匹配不区分
        assert_eq!(index.lookup("aPPLE", true).await.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_keys_preserve_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("entries.dict");
        write_archive(
            &path,
            &[
                ("apple", b"first".as_slice()),
                ("apple", b"second".as_slice()),
            ],
        )
        .unwrap();

        let index = BincodeDictIndex::open(&path).unwrap();
        let hits = index.lookup("apple", false).await;
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].data, b"first");
    }

    #[tokio::test]
    async fn test_backslash_keys_are_exact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("media.dict");
        write_archive(&path, &[(r"\voc\D\apple.mp3", [0u8, 1, 2].as_slice())]).unwrap();

        let index = BincodeDictIndex::open(&path).unwrap();
        let hits = index.lookup(r"\voc\D\apple.mp3", false).await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].data, vec![0, 1, 2]);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = BincodeDictIndex::open(dir.path().join("absent.dict")).unwrap_err();
        assert!(matches!(err, ArchiveError::NotFound(_)));
    }

    #[test]
    fn test_corrupt_file_is_decode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corrupt.dict");
        std::fs::write(&path, b"not a bincode archive").unwrap();

        let err = BincodeDictIndex::open(&path).unwrap_err();
        assert!(matches!(err, ArchiveError::DecodeError(_)));
    }
}

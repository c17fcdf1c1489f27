//! Archive Adapters - 词典归档引擎实现
//!
//! - BincodeDictIndex: 单文件归档，启动时整体装载进内存
//! - InMemoryDictIndex: 测试用的内存假实现

mod bincode_index;
mod memory_index;

pub use bincode_index::{write_archive, BincodeDictIndex};
pub use memory_index::InMemoryDictIndex;

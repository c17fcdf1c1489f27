//! Pronunciation Query - 发音查询
//!
//! 查询链路：
//! 文本归档查词条 -> 提取发音引用 -> 推导媒体键 -> 媒体归档取音频
//!
//! 媒体归档主键未命中时，用去掉前导分隔符的回退键重查一次。

use std::sync::Arc;

use crate::application::ports::DictIndexPort;
use crate::domain::{extract_audio_reference, MediaKey};

/// 发音查询
#[derive(Debug, Clone)]
pub struct PronunciationQuery {
    pub word: String,
}

/// 发音查询响应
#[derive(Debug, Clone)]
pub struct PronunciationResponse {
    /// 音频原始字节
    pub audio_data: Vec<u8>,
    /// 小写扩展名（mp3/spx/wav/ogg）
    pub ext: String,
}

/// GetPronunciation Handler - 解析单词对应的发音音频
pub struct GetPronunciationHandler {
    text_index: Arc<dyn DictIndexPort>,
    media_index: Arc<dyn DictIndexPort>,
}

impl GetPronunciationHandler {
    pub fn new(text_index: Arc<dyn DictIndexPort>, media_index: Arc<dyn DictIndexPort>) -> Self {
        Self {
            text_index,
            media_index,
        }
    }

    /// 执行查询
    ///
    /// 三种未命中（单词不存在、词条无发音引用、媒体归档无对应音频）
    /// 统一返回 None，仅在日志中区分。每一步只使用第一条匹配记录。
    pub async fn handle(&self, query: PronunciationQuery) -> Option<PronunciationResponse> {
        // 1. 文本归档查词条（大小写不敏感）
        let records = self.text_index.lookup(&query.word, true).await;
        let Some(entry) = records.into_iter().next() else {
            tracing::debug!(word = %query.word, "Word not found in text archive");
            return None;
        };

        // 2. 从词条正文提取发音引用
        let markup = String::from_utf8_lossy(&entry.data);
        let Some(reference) = extract_audio_reference(&markup) else {
            tracing::debug!(word = %query.word, "Entry has no audio reference");
            return None;
        };

        // 3. 推导媒体键，主键按大小写敏感方式查询
        let key = MediaKey::from_reference(&reference);
        let mut hits = self.media_index.lookup(key.as_str(), false).await;

        // 4. 回退：部分归档的键不带前导分隔符
        if hits.is_empty() {
            tracing::debug!(
                word = %query.word,
                key = %key,
                "Primary media key missed, retrying without leading separator"
            );
            hits = self.media_index.lookup(key.stripped(), false).await;
        }

        let Some(audio) = hits.into_iter().next() else {
            tracing::debug!(word = %query.word, key = %key, "Audio not found in media archive");
            return None;
        };

        Some(PronunciationResponse {
            audio_data: audio.data,
            ext: reference.ext().to_string(),
        })
    }
}

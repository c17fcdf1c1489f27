//! Domain Layer - 领域层
//!
//! 纯函数与值对象，不依赖归档引擎：
//! - 音频引用提取：词条正文 -> AudioReference
//! - 媒体键规范化：AudioReference -> MediaKey

mod audio_reference;
mod media_key;

pub use audio_reference::{content_type_for_extension, extract_audio_reference, AudioReference};
pub use media_key::MediaKey;

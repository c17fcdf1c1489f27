//! 音频引用 - 词条正文中内嵌的发音链接
//!
//! 词条正文是 HTML 片段，发音链接形如：
//! `<a href="sound://voc/D/apple.mp3">...</a>`
//!
//! 每个词条最多使用一个引用（取第一个匹配）。

use regex::Regex;
use std::sync::LazyLock;

/// 发音链接匹配模式
///
/// 大小写不敏感；扩展名限定为支持的四种音频格式
static SOUND_HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)href="(sound:(?://)?[^"]+\.(mp3|spx|wav|ogg))""#).unwrap()
});

/// 音频引用 - 从词条正文中提取出的发音链接
///
/// 不变量:
/// - path 已剥离 sound: 协议，保持正斜杠形式
/// - 扩展名（path 结尾与 ext 字段）一律小写
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioReference {
    path: String,
    ext: String,
}

impl AudioReference {
    /// 协议剥离后的相对路径
    pub fn path(&self) -> &str {
        &self.path
    }

    /// 小写扩展名
    pub fn ext(&self) -> &str {
        &self.ext
    }
}

/// 从词条正文中提取第一个发音引用
///
/// 正文中没有受支持的 sound:// 链接时返回 None
pub fn extract_audio_reference(markup: &str) -> Option<AudioReference> {
    let caps = SOUND_HREF_RE.captures(markup)?;
    let url = caps.get(1)?.as_str();
    let ext = caps.get(2)?.as_str().to_ascii_lowercase();

    let rel = strip_sound_scheme(url);
    // 扩展名在路径内也统一为小写
    let stem = &rel[..rel.len() - ext.len()];
    Some(AudioReference {
        path: format!("{}{}", stem, ext),
        ext,
    })
}

/// 剥离 sound: 协议前缀（带或不带 `//`，大小写不敏感）
fn strip_sound_scheme(url: &str) -> &str {
    let rest = if url.len() >= 6 && url[..6].eq_ignore_ascii_case("sound:") {
        &url[6..]
    } else {
        url
    };
    rest.strip_prefix("//").unwrap_or(rest)
}

/// 扩展名 -> Content-Type 映射
///
/// 输入应为小写扩展名；表外扩展名回落到 application/octet-stream
pub fn content_type_for_extension(ext: &str) -> &'static str {
    match ext {
        "mp3" => "audio/mpeg",
        "spx" => "audio/speex",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        _ => "application/octet-stream",
    }
}

//! 媒体键 - 媒体归档的查询键
//!
//! 媒体归档按反斜杠分隔的路径键索引（MDD 风格），
//! 键统一携带单个前导反斜杠，例如 `\voc\D\apple.mp3`。

use super::AudioReference;

/// 媒体键
///
/// 不变量:
/// - 以单个反斜杠开头
/// - 不含连续反斜杠
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaKey(String);

impl MediaKey {
    /// 由音频引用推导主键
    ///
    /// 前置一个反斜杠，正斜杠全部转为反斜杠，连续反斜杠折叠为一个
    pub fn from_reference(reference: &AudioReference) -> Self {
        let converted = format!("\\{}", reference.path()).replace('/', "\\");
        Self(collapse_backslashes(&converted))
    }

    /// 主键字符串
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 去掉前导反斜杠的回退键
    ///
    /// 部分归档的键不带前导分隔符，主键未命中时用它重查一次
    pub fn stripped(&self) -> &str {
        self.0.strip_prefix('\\').unwrap_or(&self.0)
    }
}

impl std::fmt::Display for MediaKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 把连续反斜杠折叠为单个
fn collapse_backslashes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_backslash = false;
    for c in s.chars() {
        if c == '\\' {
            if !prev_backslash {
                out.push(c);
            }
            prev_backslash = true;
        } else {
            out.push(c);
            prev_backslash = false;
        }
    }
    out
}

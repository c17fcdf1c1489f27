//! API Key Guard - 共享密钥校验
//!
//! 凭证有两个通道：`X-API-Key` 请求头与 `?key=` 查询参数，
//! 两者同时出现时以请求头为准（请求头错误时即使查询参数正确也拒绝）。
//!
//! 期望密钥按请求即时从进程环境读取（AUDICT_API_KEY），不缓存。

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::config::API_KEY_ENV;

/// 请求头通道
pub const API_KEY_HEADER: &str = "X-API-Key";

/// URI 中的 key 参数值，进日志前一律打码
static KEY_PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([?&]key=)[^&#\s]*").unwrap());

/// 鉴权失败
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("API key missing")]
    Missing,

    #[error("API key mismatch")]
    Mismatch,
}

/// 读取当前期望的 API Key
///
/// 每次调用都重新读环境变量，未设置时返回空串（空串永不匹配）
pub fn expected_key() -> String {
    std::env::var(API_KEY_ENV).unwrap_or_default()
}

/// 校验请求携带的凭证
///
/// 失败时只记录双方前 4 个字符的提示，绝不记录完整密钥
pub fn check_credential(
    header: Option<&str>,
    query: Option<&str>,
    expected: &str,
) -> Result<(), AuthError> {
    let presented = match header.or(query) {
        Some(value) => value,
        None => {
            tracing::warn!("Request carried no API key");
            return Err(AuthError::Missing);
        }
    };

    if expected.is_empty() || presented != expected {
        tracing::warn!(
            received = %hint(presented),
            expected = %hint(expected),
            "API key mismatch"
        );
        return Err(AuthError::Mismatch);
    }

    Ok(())
}

/// 前 4 个字符的日志提示
fn hint(s: &str) -> String {
    s.chars().take(4).collect()
}

/// 把字符串里 key 查询参数的值替换为 `***`
///
/// 所有进入日志的 URI 都必须先经过这里
pub fn redact_query_key(s: &str) -> String {
    KEY_PARAM_RE.replace_all(s, "${1}***").into_owned()
}

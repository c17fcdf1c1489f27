//! Audio Handler - 发音音频下载

use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::Response,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::PronunciationQuery;
use crate::domain::content_type_for_extension;
use crate::infrastructure::http::auth;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AudioParams {
    /// 查询参数通道的 API Key
    pub key: Option<String>,
}

/// GET /audio/:word
///
/// 校验凭证后解析单词的发音音频，原始字节直接作为响应体返回
pub async fn get_audio(
    State(state): State<Arc<AppState>>,
    Path(word): Path<String>,
    Query(params): Query<AudioParams>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let header_key = headers
        .get(auth::API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());
    auth::check_credential(header_key, params.key.as_deref(), &auth::expected_key())?;

    let handler = state
        .pronunciation_handler
        .as_ref()
        .ok_or(ApiError::NotInitialized)?;

    let result = handler
        .handle(PronunciationQuery { word: word.clone() })
        .await
        .ok_or_else(|| ApiError::NotFound(format!("No pronunciation audio for '{}'", word)))?;

    let content_type = content_type_for_extension(&result.ext);

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, result.audio_data.len())
        .body(Body::from(result.audio_data))
        .unwrap())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use tower::util::ServiceExt;

    use crate::config::API_KEY_ENV;
    use crate::infrastructure::archive::InMemoryDictIndex;
    use crate::infrastructure::http::{create_routes, AppState};
    use std::sync::Arc;

    const TEST_KEY: &str = "test-secret-7f3a";

    /// 所有测试共用同一个密钥值，避免并发测试互相干扰
    fn set_test_key() {
        std::env::set_var(API_KEY_ENV, TEST_KEY);
    }

    fn router(state: AppState) -> Router {
        create_routes().with_state(Arc::new(state))
    }

    /// apple 词条 + 对应音频的最小词典
    fn dict_state() -> AppState {
        let mut text = InMemoryDictIndex::new();
        text.insert(
            "apple",
            br#"<b>apple</b><a href="sound://voc/D/apple.mp3">play</a>"#.to_vec(),
        );
        text.insert("silent", b"<b>silent</b> no audio here".to_vec());

        let mut media = InMemoryDictIndex::new();
        media.insert(r"\voc\D\apple.mp3", vec![0x49, 0x44, 0x33, 0x04]);

        AppState::new(Arc::new(text), Arc::new(media))
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn get_with_header_key(uri: &str, key: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header("X-API-Key", key)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_missing_key_is_forbidden() {
        set_test_key();
        let response = router(dict_state())
            .oneshot(get("/audio/apple"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_header_key_passes() {
        set_test_key();
        let response = router(dict_state())
            .oneshot(get_with_header_key("/audio/apple", TEST_KEY))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"],
            "audio/mpeg"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body.as_ref(), [0x49, 0x44, 0x33, 0x04]);
    }

    #[tokio::test]
    async fn test_query_key_passes() {
        set_test_key();
        let response = router(dict_state())
            .oneshot(get(&format!("/audio/apple?key={}", TEST_KEY)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_wrong_header_beats_correct_query_key() {
        set_test_key();
        // 请求头优先：查询参数正确也拒绝
        let response = router(dict_state())
            .oneshot(get_with_header_key(
                &format!("/audio/apple?key={}", TEST_KEY),
                "wrong",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_uninitialized_engines_return_500() {
        set_test_key();
        let response = router(AppState::uninitialized())
            .oneshot(get_with_header_key("/audio/apple", TEST_KEY))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_unknown_word_returns_404() {
        set_test_key();
        let response = router(dict_state())
            .oneshot(get_with_header_key("/audio/banana", TEST_KEY))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        // 404 消息里带上请求的单词
        assert!(json["error"].as_str().unwrap().contains("banana"));
    }

    #[tokio::test]
    async fn test_entry_without_reference_returns_404() {
        set_test_key();
        let response = router(dict_state())
            .oneshot(get_with_header_key("/audio/silent", TEST_KEY))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_fallback_media_key_still_serves_audio() {
        set_test_key();
        let mut text = InMemoryDictIndex::new();
        text.insert(
            "pear",
            br#"<a href="sound://voc/pear.wav">play</a>"#.to_vec(),
        );
        // 归档键不带前导反斜杠，走回退查询
        let mut media = InMemoryDictIndex::new();
        media.insert(r"voc\pear.wav", vec![0x52, 0x49, 0x46, 0x46]);
        let state = AppState::new(Arc::new(text), Arc::new(media));

        let response = router(state)
            .oneshot(get_with_header_key("/audio/pear", TEST_KEY))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "audio/wav");
    }

    #[tokio::test]
    async fn test_word_lookup_is_case_insensitive() {
        set_test_key();
        let response = router(dict_state())
            .oneshot(get_with_header_key("/audio/APPLE", TEST_KEY))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

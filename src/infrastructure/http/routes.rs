//! HTTP Routes
//!
//! API Endpoints:
//! - /              GET  健康检查
//! - /ping          GET  健康检查
//! - /info          GET  请求头回显（代理调试用）
//! - /audio/:word   GET  发音音频下载（需要 API Key）

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::ping))
        .route("/ping", get(handlers::ping))
        .route("/info", get(handlers::info))
        .route("/audio/:word", get(handlers::get_audio))
}

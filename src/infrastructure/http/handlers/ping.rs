//! Ping / Info Handlers
//!
//! 健康检查与请求头回显（反向代理部署时排查 IP 透传用）

use axum::{http::HeaderMap, Json};
use serde::Serialize;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Ping endpoint - 健康检查
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Info 响应
#[derive(Serialize)]
pub struct InfoResponse {
    pub connecting_ip: Option<String>,
    pub proxy_ip: Option<String>,
    pub host: Option<String>,
    pub user_agent: Option<String>,
}

/// Info endpoint - 回显与代理相关的请求头
pub async fn info(headers: HeaderMap) -> Json<InfoResponse> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
    };

    Json(InfoResponse {
        connecting_ip: header("x-real-ip"),
        proxy_ip: header("x-forwarded-for"),
        host: header("host"),
        user_agent: header("user-agent"),
    })
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use tower::util::ServiceExt;

    use super::*;

    fn test_router() -> Router {
        Router::new()
            .route("/ping", get(ping))
            .route("/info", get(info))
    }

    #[tokio::test]
    async fn test_ping_returns_ok() {
        let request = Request::builder()
            .uri("/ping")
            .body(Body::empty())
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "audict");
    }

    #[tokio::test]
    async fn test_info_echoes_proxy_headers() {
        let request = Request::builder()
            .uri("/info")
            .header("X-Real-IP", "203.0.113.9")
            .header("User-Agent", "curl/8.0")
            .body(Body::empty())
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["connecting_ip"], "203.0.113.9");
        assert_eq!(json["user_agent"], "curl/8.0");
        assert!(json["proxy_ip"].is_null());
    }
}

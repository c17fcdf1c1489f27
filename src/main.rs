//! Audict - 词典发音音频服务
//!
//! 启动流程：
//! 1. 加载配置（优先级：环境变量 > 配置文件 > 默认值）
//! 2. 校验共享密钥已配置（缺失则拒绝启动）
//! 3. 装载文本/媒体两份词典归档（失败只记录日志，服务照常启动）
//! 4. 启动 HTTP 服务器（带优雅关闭）

use std::sync::Arc;

use audict::application::ports::{ArchiveError, DictIndexPort};
use audict::config::{load_config, print_config, require_api_key, AppConfig};
use audict::infrastructure::archive::BincodeDictIndex;
use audict::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},audict={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt().with_env_filter(env_filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Audict - 词典发音音频服务");
    print_config(&config);

    // 共享密钥缺失时拒绝启动
    require_api_key()?;

    // 装载两份词典归档
    // 文件缺失或损坏不终止进程：引擎保持未初始化，后续请求返回 500
    let state = match load_indexes(&config) {
        Ok((text_index, media_index)) => AppState::new(text_index, media_index),
        Err(e) => {
            tracing::error!(
                error = %e,
                text_archive = %config.dict.text_archive.display(),
                media_archive = %config.dict.media_archive.display(),
                "Failed to load dictionary archives, audio lookups will fail"
            );
            AppState::uninitialized()
        }
    };

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 装载文本与媒体两份归档，装载完成后均为只读共享句柄
fn load_indexes(
    config: &AppConfig,
) -> Result<(Arc<dyn DictIndexPort>, Arc<dyn DictIndexPort>), ArchiveError> {
    let text_index = BincodeDictIndex::open(&config.dict.text_archive)?;
    let media_index = BincodeDictIndex::open(&config.dict.media_archive)?;
    Ok((Arc::new(text_index), Arc::new(media_index)))
}

//! # 啤酒资源 REST API
//!
//! 提供按标识查询、创建、更新和删除啤酒资源的 HTTP 接口：
//! - `app`: 处理器、数据模型和服务接口
//! - `core`: 错误处理、响应和中间件
//! - `infrastructure`: 日志等基础设施
//! - `config`: 配置文件加载

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

use axum::{middleware, response::Json, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use app::beer::{AppState, BeerDto, BeerId, BeerService, BeerStyle, InMemoryBeerService};
pub use crate::core::error::CoreError;

/// 构建完整的应用路由
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(app::beer::routes(state))
        .layer(middleware::from_fn(crate::core::middleware::request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// 健康检查
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

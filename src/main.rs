use anyhow::Context;
use beer_service::{
    build_router,
    config::{load_config, Config},
    infrastructure::logger::Logger,
    AppState, InMemoryBeerService,
};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 啤酒资源 REST API 服务
#[derive(Debug, Parser)]
#[command(name = "beer_service", version, about)]
struct Cli {
    /// 配置文件路径
    #[arg(short, long, env = "BEER_SERVICE_CONFIG")]
    config: Option<PathBuf>,

    /// 覆盖配置中的 HTTP 端口
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config: Config = load_config(cli.config.as_deref()).context("加载配置失败")?;
    if let Some(port) = cli.port {
        config.http.port = port;
    }
    config.validate()?;

    let _guard = Logger::init(&config.logging)?;

    info!("启动啤酒服务...");

    let service = if config.api.seed_sample_data {
        let service = InMemoryBeerService::with_sample_data()
            .await
            .context("写入示例数据失败")?;
        info!("✅ 已初始化 {} 个示例啤酒", service.len().await);
        service
    } else {
        InMemoryBeerService::new()
    };

    let state = AppState::new(Arc::new(service), config.api.base_path.as_str());
    let app = build_router(state);

    let addr = config.http.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    let base = &config.api.base_path;
    info!("🚀 服务器运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    {}/:id - 获取啤酒", base);
    info!("   POST   {}     - 创建啤酒", base);
    info!("   PUT    {}/:id - 更新啤酒", base);
    info!("   DELETE {}/:id - 删除啤酒", base);
    info!("   GET    /health - 健康检查");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务器运行失败")?;

    info!("服务器已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("监听退出信号失败: {}", e);
    }
}

//! 客户端入口
//!
//! 加载配置、装配状态提供者并启动编排器，收到 Ctrl-C 后退出。

use application::Router;
use config::AppConfig;
use infrastructure::Infrastructure;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AppConfig::load()?;
    tracing::info!(config = %config.sanitize(), "配置已加载");

    let sdk = config.sdk_config();
    tracing::debug!(
        server = %sdk.server,
        cache_prefix = %sdk.cache_prefix,
        clear_cache_on_refresh_error = sdk.clear_cache_on_refresh_error,
        "SDK 配置"
    );

    let infra = Infrastructure::assemble(&config)?;
    let orchestrator = infra.orchestrator();
    orchestrator.initialize()?;

    tracing::info!(
        name = orchestrator.name(),
        version = orchestrator.version(),
        path = %infra.router.current_path(),
        "客户端已启动"
    );

    tokio::signal::ctrl_c().await?;
    tracing::info!("收到退出信号，客户端关闭");

    Ok(())
}

//! HTTP 服务启动

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// 绑定地址并运行路由，直到进程退出
pub async fn serve(name: &str, router: Router, host: &str, port: u16) -> anyhow::Result<()> {
    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("绑定地址失败: {}", addr))?;

    tracing::info!("{} 已启动: http://{}", name, addr);

    axum::serve(listener, router.layer(TraceLayer::new_for_http()))
        .await
        .with_context(|| format!("{} 运行失败", name))?;
    Ok(())
}

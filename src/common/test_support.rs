//! 测试辅助：在随机端口上启动路由

use axum::Router;
use tokio::net::TcpListener;

/// 在 127.0.0.1 的随机端口上启动路由，返回基础地址
pub async fn spawn_router(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// 获取一个当前没有监听者的地址，用于模拟下游不可达
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

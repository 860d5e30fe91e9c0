mod business;
mod client;
mod common;
mod database;
mod error;
mod http_client;
mod model;
mod server;

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use business::{BusinessService, BusinessState, GoogleTranslator, create_business_router};
use client::{ClientState, TranslateService, create_client_router};
use database::{DatabaseState, RecordStore, create_database_router};
use model::config::Config;

/// 翻译并持久化的三服务组合
#[derive(Parser, Debug)]
#[command(name = "translate-relay", version, about)]
struct Cli {
    /// 配置文件路径
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 对外网关：认证、翻译、持久化
    Client(ServeArgs),
    /// 规范化、语种识别与翻译
    Business(ServeArgs),
    /// 内存记录存储
    Database(ServeArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// 监听地址
    #[arg(long)]
    host: Option<String>,

    /// 监听端口
    #[arg(short, long)]
    port: Option<u16>,
}

impl ServeArgs {
    fn apply(&self, mut config: Config) -> Config {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = Some(port);
        }
        config
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

/// 构建 Client Service 状态
///
/// 未配置 token 时返回 `ConfigError`，调用方在绑定端口之前退出
fn client_state(config: &Config) -> anyhow::Result<ClientState> {
    let token = config.client_token()?.to_string();
    let http = http_client::build_client_from_config(config)?;
    let service = TranslateService::new(
        http,
        &config.business_service_url,
        &config.database_service_url,
    );
    tracing::info!(
        business = %config.business_service_url,
        database = %config.database_service_url,
        "下游服务地址"
    );
    Ok(ClientState::new(token, service))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli
        .config
        .unwrap_or_else(|| Config::default_config_path().to_string());
    let config = Config::load(&config_path)?.with_env_overrides();

    match cli.command {
        Command::Client(args) => {
            let config = args.apply(config);
            let router = create_client_router(client_state(&config)?);
            server::serve(
                "Client Service",
                router,
                &config.host,
                config.effective_port(client::DEFAULT_PORT),
            )
            .await
        }
        Command::Business(args) => {
            let config = args.apply(config);
            let http = http_client::build_client_from_config(&config)?;
            let translator = Arc::new(GoogleTranslator::new(http, config.translator_url.clone()));
            let router = create_business_router(BusinessState::new(BusinessService::new(translator)));
            server::serve(
                "Business Service",
                router,
                &config.host,
                config.effective_port(business::DEFAULT_PORT),
            )
            .await
        }
        Command::Database(args) => {
            let config = args.apply(config);
            let router = create_database_router(DatabaseState::new(RecordStore::new()));
            server::serve(
                "Database Service",
                router,
                &config.host,
                config.effective_port(database::DEFAULT_PORT),
            )
            .await
        }
    }
}

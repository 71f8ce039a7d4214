use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use refund_core::RefundConfig;
use refund_slack::{MessageSink, SlackClient, SlackError};
use tracing::{info, warn};

mod app;
mod http;

/// Meetup refund form that forwards requests to Slack.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the TOML config file (default: $REFUND_CONFIG or ./refund.toml).
    #[arg(long)]
    config: Option<String>,

    /// Override the bind address from config.
    #[arg(long)]
    bind: Option<String>,

    /// Override the listen port from config.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "refund_gateway=info,refund_slack=info,refund_core=info,tower_http=debug".into()
            }),
        )
        .init();

    let args = Args::parse();

    let mut config = RefundConfig::load(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.gateway.bind = bind;
    }
    if let Some(port) = args.port {
        config.gateway.port = port;
    }

    for problem in config.problems() {
        warn!("configuration problem: {problem}");
    }
    info!(groups = config.groups.len(), "subgroups configured");

    let sink = build_sink(&config)?;

    let addr: SocketAddr = format!("{}:{}", config.gateway.bind, config.gateway.port).parse()?;
    let state = Arc::new(app::AppState::new(config, sink));
    let router = app::build_router(state);

    info!("refund gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("refund gateway stopped");
    Ok(())
}

/// Slack delivery when a bot token is configured, otherwise `None` so that
/// submissions fail with a configuration error.
fn build_sink(config: &RefundConfig) -> anyhow::Result<Option<Arc<dyn MessageSink>>> {
    match SlackClient::from_config(&config.slack) {
        Ok(client) => {
            info!(api_base = %config.slack.api_base, "Slack delivery enabled");
            Ok(Some(Arc::new(client)))
        }
        Err(SlackError::NoToken) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

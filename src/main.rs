use clap::Parser;
use origin_guard::cli_arguments::CliArguments;
use origin_guard::origin_client::reqwest_origin_client::ReqwestOriginClient;
use origin_guard::{ServerState, router};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: CliArguments = CliArguments::parse();
    let policy = args.guard_policy();

    let tcp_listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.port)).await?;

    info!("Server started on port {}", args.port);
    info!(
        origin_url = %args.origin_url,
        application_name = %policy.application_name,
        tunnel_error_codes = ?policy.tunnel_error_codes,
        status_marker = policy.status_marker,
        "Guarding origin"
    );

    let origin_client = ReqwestOriginClient::new(args.origin_url.clone(), args.origin_timeout())?;

    let state = ServerState {
        client: Arc::new(origin_client),
        policy: Arc::new(policy),
    };

    axum::serve(tcp_listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {err}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

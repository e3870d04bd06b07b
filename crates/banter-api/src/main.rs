//! Banter HTTP server entry point.
//!
//! Binary name: `banter`
//!
//! Parses CLI arguments, sets up tracing, loads configuration, then starts the
//! HTTP server or prints shell completions.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use banter_infra::config::{load_config, resolve_config_path};
use banter_observe::{init_tracing, shutdown_tracing, verbosity_filter, TracingOptions};
use banter_types::config::BanterConfig;
use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need logging or config
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "banter", &mut std::io::stdout());
        return Ok(());
    }

    init_tracing(&TracingOptions {
        default_filter: verbosity_filter(cli.verbose, cli.quiet).to_string(),
        json: cli.json_logs,
        otel: cli.otel,
    })?;

    let config_path = resolve_config_path(cli.config.as_deref());
    let mut config = load_config(&config_path).await;

    match cli.command {
        Commands::Serve { port, host } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(host) = host {
                config.server.host = host;
            }
            serve(&config, cli.quiet).await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    shutdown_tracing();
    Ok(())
}

async fn serve(config: &BanterConfig, quiet: bool) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    if !quiet {
        println!(
            "  {} Banter listening on {}",
            console::style("⚡").bold(),
            console::style(format!("http://{addr}")).cyan()
        );
        println!("  {}", console::style("Press Ctrl+C to stop").dim());
    }
    tracing::info!(%addr, "server started");

    let router = http::router::build_router(AppState::new(config));

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

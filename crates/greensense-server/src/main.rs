#![forbid(unsafe_code)]

use greensense_server::{build_router, AppState, RandomSource, ServerConfig};
use std::env;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(default)
}

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = ServerConfig {
        bind: env::var("GREENSENSE_BIND").unwrap_or_else(|_| "0.0.0.0".to_string()),
        port: env_u16("GREENSENSE_PORT", 3000),
        log_json: env_bool("GREENSENSE_LOG_JSON", false),
    };
    config.validate()?;
    init_tracing(config.log_json);

    let state = AppState::new(Arc::new(RandomSource));
    let router = build_router(state);

    let listener = TcpListener::bind(config.listen_addr())
        .await
        .map_err(|e| format!("bind {} failed: {e}", config.listen_addr()))?;
    info!(addr = %config.listen_addr(), "GreenSense backend listening");
    let surface = greensense_api::api_surface();
    for endpoint in surface["endpoints"].as_array().into_iter().flatten() {
        info!(path = endpoint["path"].as_str().unwrap_or_default(), "GET route available");
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .map_err(|e| format!("server error: {e}"))
}

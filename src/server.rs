use std::future::Future;

use anyhow::{Context, Result};
use axum::{Router, middleware};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{
    config::{AppConfig, GeneralConfig},
    middleware::{catch_panic_layer, json_error_middleware},
    routes,
};

/// Builds the full application: routes mounted under the configured base
/// path, wrapped in tracing, panic recovery and JSON error rendering.
pub fn app(cfg: &AppConfig) -> Router {
    routes::router(&cfg.general.base_path).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(catch_panic_layer())
            .layer(middleware::from_fn(json_error_middleware)),
    )
}

pub async fn bind(cfg: &GeneralConfig) -> Result<TcpListener> {
    TcpListener::bind((cfg.host.as_str(), cfg.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", cfg.host, cfg.port))
}

/// Serves `app` until `shutdown` resolves, then waits for in-flight requests.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let addr = listener.local_addr().context("listener has no local address")?;
    tracing::info!("listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("http server failed")?;

    tracing::info!("server stopped");
    Ok(())
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to listen for SIGTERM: {err}");
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

    tracing::info!("shutdown signal received");
}

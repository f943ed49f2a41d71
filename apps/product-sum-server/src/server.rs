use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use product_sum::{ProductSumService, ServiceConfig};
use tower_http::trace::TraceLayer;
use tracing::field::Empty;

use crate::config::AppConfig;

/// Assemble the HTTP router: module routes, optional docs, request tracing.
#[must_use]
pub fn build_router(config: &AppConfig) -> Router {
    let service = Arc::new(ProductSumService::new(ServiceConfig::from(
        &config.product_sum,
    )));

    let mut router = product_sum::register_routes(Router::new(), service);
    if config.server.enable_docs {
        router = product_sum::register_docs(router);
    }

    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &axum::http::Request<axum::body::Body>| {
                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    version = ?req.version(),
                    status = Empty,
                    latency_ms = Empty,
                )
            })
            .on_response(
                |res: &axum::http::Response<axum::body::Body>,
                 latency: std::time::Duration,
                 span: &tracing::Span| {
                    span.record("status", res.status().as_u16());
                    span.record("latency_ms", latency.as_millis());
                },
            ),
    )
}

/// Bind the listener and serve until a shutdown signal arrives.
///
/// # Errors
/// Returns an error if the bind address is invalid, the socket cannot be
/// bound, or the server fails while running.
pub async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let addr = config.server.socket_addr()?;
    let data_dir = &config.product_sum.data_dir;
    if !data_dir.is_dir() {
        tracing::warn!(
            data_dir = %data_dir.display(),
            "Data directory does not exist; every request will report file not found"
        );
    }

    let router = build_router(config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(
        %addr,
        data_dir = %data_dir.display(),
        docs = config.server.enable_docs,
        "HTTP server bound"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!(e))
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
///
/// If one source cannot be installed the other one still stops the server.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Ctrl+C handler unavailable, waiting for SIGTERM");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERM handler unavailable, waiting for Ctrl+C");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = tokio::select! {
        () = ctrl_c => "ctrl_c",
        () = terminate => "sigterm",
    };
    tracing::info!(signal, "HTTP server shutting down gracefully");
}

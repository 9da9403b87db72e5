//! Serve operation - answer every HTTP request with a fresh render.

use std::{sync::Arc, time::Instant};

use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use eyre::{Context, Result};

use super::Workspace;

const CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Listen on `addr` until interrupted.
///
/// The model is immutable, so requests render concurrently without locks.
pub fn serve(workspace: Workspace, addr: &str) -> Result<()> {
    let addr = normalize_addr(addr);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .wrap_err("failed to start the async runtime")?;

    runtime.block_on(run(Arc::new(workspace), addr))
}

async fn run(workspace: Arc<Workspace>, addr: String) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("cannot listen on {}", addr))?;
    tracing::info!(addr = %addr, "serving declarations");

    axum::serve(listener, router(workspace))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("server failed")
}

fn router(workspace: Arc<Workspace>) -> Router {
    Router::new().fallback(render).with_state(workspace)
}

async fn render(State(workspace): State<Arc<Workspace>>, uri: Uri) -> Response {
    let started = Instant::now();
    // A pass walks the whole model; keep it off the async workers.
    let response = match tokio::task::spawn_blocking(move || respond(&workspace)).await {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(error = %err, "render task failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, CONTENT_TYPE)],
                format!("error: {}", err),
            )
                .into_response()
        }
    };
    tracing::info!(
        path = %uri.path(),
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "handled request"
    );
    response
}

fn respond(workspace: &Workspace) -> Response {
    match workspace.render() {
        Ok(output) => ([(header::CONTENT_TYPE, CONTENT_TYPE)], output.text).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "render failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, CONTENT_TYPE)],
                format!("error: {}", err),
            )
                .into_response()
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "cannot listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

/// `:8080` listens on every interface.
fn normalize_addr(addr: &str) -> String {
    if addr.starts_with(':') {
        format!("0.0.0.0{}", addr)
    } else {
        addr.to_string()
    }
}

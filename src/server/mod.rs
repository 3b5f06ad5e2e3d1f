//! HTTP serving for the profile page.
//!
//! The page is rendered once at startup and held immutably; every request
//! is answered from that cached document. Routes: `GET /` serves the page,
//! `GET /healthz` answers liveness probes, anything else gets a minimal
//! 404 page. Shutdown is cooperative via a [`CancellationToken`].

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::error::ServerError;

/// Default bind address for `serve`.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Shared state: the rendered document.
#[derive(Debug, Clone)]
pub struct SiteState {
    page: Arc<str>,
}

impl SiteState {
    /// Wrap a rendered document for sharing across request handlers.
    #[must_use]
    pub fn new(page: String) -> Self {
        Self { page: page.into() }
    }

    /// The rendered document.
    #[must_use]
    pub fn page(&self) -> &str {
        &self.page
    }
}

/// Builds the axum router for the profile page.
#[must_use]
pub fn build_router(state: SiteState) -> Router {
    Router::new()
        .route("/", get(serve_page))
        .route("/healthz", get(healthz))
        .fallback(not_found)
        .with_state(state)
}

/// `GET /`: the profile page.
async fn serve_page(State(state): State<SiteState>) -> Html<String> {
    Html(state.page.as_ref().to_string())
}

/// `GET /healthz`: liveness probe.
async fn healthz() -> &'static str {
    "ok"
}

/// Fallback handler; there is only one page.
async fn not_found() -> (StatusCode, Html<String>) {
    let body = "<!DOCTYPE html>\n\
                <html lang=\"en\"><head><meta charset=\"utf-8\">\
                <title>Not Found</title></head>\
                <body><p>There is nothing here. The page lives at <a href=\"/\">/</a>.</p>\
                </body></html>\n";
    (StatusCode::NOT_FOUND, Html(body.to_string()))
}

/// Binds the listener and spawns the server task.
///
/// Returns the actual bound address (useful when binding to port 0 in
/// tests) and the join handle of the serving task, which completes after
/// `cancel` fires and in-flight requests drain.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the TCP listener cannot bind.
pub async fn start(
    bind_addr: &str,
    state: SiteState,
    cancel: CancellationToken,
) -> Result<(SocketAddr, JoinHandle<()>), ServerError> {
    let listener = TcpListener::bind(bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: bind_addr.to_string(),
            source,
        })?;

    let bound_addr = listener
        .local_addr()
        .map_err(|source| ServerError::Bind {
            addr: bind_addr.to_string(),
            source,
        })?;

    let router = build_router(state);

    let handle = tokio::spawn(async move {
        info!(%bound_addr, "profile page server started");
        axum::serve(listener, router)
            .with_graceful_shutdown(cancel.cancelled_owned())
            .await
            .ok();
        debug!("profile page server shut down");
    });

    Ok((bound_addr, handle))
}

/// Parses a bind address string into a full `host:port` form.
///
/// Accepts:
/// - `:8080` → `0.0.0.0:8080`
/// - `8080` → `0.0.0.0:8080`
/// - `1.2.3.4:8080` → as-is
///
/// # Errors
///
/// Returns [`ServerError::InvalidBindAddr`] if the result cannot be
/// parsed as a valid socket address.
pub fn parse_bind_addr(input: &str) -> Result<String, ServerError> {
    let addr = if input.starts_with(':') {
        format!("0.0.0.0{input}")
    } else if input.parse::<u16>().is_ok() {
        format!("0.0.0.0:{input}")
    } else {
        input.to_string()
    };
    // Validate it can be parsed as a socket address
    addr.parse::<SocketAddr>()
        .map_err(|e| ServerError::InvalidBindAddr {
            input: input.to_string(),
            message: e.to_string(),
        })?;
    Ok(addr)
}

//! Serve command handler.
//!
//! Renders the page once and serves it over HTTP until cancellation.

use tokio_util::sync::CancellationToken;

use crate::cli::args::ServeArgs;
use crate::content::Profile;
use crate::error::SiteError;
use crate::render::render_page;
use crate::server::{SiteState, parse_bind_addr, start};

/// Execute `serve`.
///
/// Blocks until the cancellation token fires and the server has drained.
///
/// # Errors
///
/// Returns a server error if the bind address is invalid or the listener
/// cannot bind.
pub async fn run(args: &ServeArgs, cancel: CancellationToken) -> Result<(), SiteError> {
    let addr = parse_bind_addr(&args.bind)?;

    let profile = Profile::aadarsh();
    let state = SiteState::new(render_page(&profile));

    let (bound_addr, handle) = start(&addr, state, cancel).await?;
    tracing::info!(%bound_addr, "serving profile page");

    let _ = handle.await;
    Ok(())
}

//! Static host for the built Folio site.
//!
//! Serves the cargo-leptos site root as plain files. Unknown paths fall back
//! to `index.html` so client-side routes survive a reload.

use std::path::Path;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Create the router serving `site_root`.
pub fn create_router(site_root: &Path) -> Router {
    let index = site_root.join("index.html");

    Router::new()
        .fallback_service(ServeDir::new(site_root).fallback(ServeFile::new(index)))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
}

/// Initialize tracing with the specified verbosity level.
///
/// `RUST_LOG` directives are applied on top of `default_level`.
pub fn init_tracing(default_level: tracing::Level) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()))
        .init();
}

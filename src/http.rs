use std::future::Future;
use std::path::Path;

use axum::Router;
use axum::http::HeaderValue;
use axum::http::header::{CACHE_CONTROL, EXPIRES, PRAGMA};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

/// Wrap `router` so every response tells clients and intermediaries to
/// never store or reuse it without revalidating. Applies uniformly to any
/// path, method, and status code; status, body, and content negotiation
/// stay with the inner service.
pub fn no_cache_headers(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(SetResponseHeaderLayer::overriding(
                CACHE_CONTROL,
                HeaderValue::from_static("no-cache, no-store, must-revalidate"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                PRAGMA,
                HeaderValue::from_static("no-cache"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                EXPIRES,
                HeaderValue::from_static("0"),
            )),
    )
}

/// Build the HTTP router serving every file under `root`, with caching
/// disabled on all of it.
pub fn build_router(root: &Path) -> Router {
    let files = ServeDir::new(root).append_index_html_on_directories(true);
    no_cache_headers(Router::new().fallback_service(files)).layer(TraceLayer::new_for_http())
}

/// Serve `app` on the already-bound `listener` until `shutdown` resolves,
/// then release the socket.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

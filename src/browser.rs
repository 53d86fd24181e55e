use tracing::warn;

/// Open `url` in the default local browser. Best effort: a missing or
/// broken browser must not take the server down, so failures are logged
/// and dropped.
pub fn open_tab(url: &str) {
    if let Err(err) = open::that(url) {
        warn!("Failed to open browser: {err}. Open {url} manually.");
    }
}

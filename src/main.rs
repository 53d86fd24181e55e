use std::path::PathBuf;

use anyhow::Context;
use devserve::{browser, http};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

/// Fixed development port; the served PWA expects its origin here.
const PORT: u16 = 8001;

#[derive(Debug, Clone)]
struct Settings {
    port: u16,
    root: PathBuf,
}

impl Settings {
    /// Serve from the directory containing the executable, not the
    /// directory the process was launched from, so the server works the
    /// same no matter where it is invoked.
    fn resolve() -> anyhow::Result<Self> {
        let exe = std::env::current_exe().context("failed to locate the running executable")?;
        let root = exe
            .parent()
            .context("executable path has no parent directory")?
            .to_path_buf();
        std::fs::read_dir(&root)
            .with_context(|| format!("cannot read serving root {}", root.display()))?;
        Ok(Self { port: PORT, root })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let settings = Settings::resolve()?;

    let listener = TcpListener::bind(("0.0.0.0", settings.port))
        .await
        .with_context(|| format!("failed to bind port {} (already in use?)", settings.port))?;

    let url = format!("http://localhost:{}", settings.port);
    info!("🌐 Devserve");
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("PWA server running at {url}");
    info!("Serving files from {}", settings.root.display());
    info!("Press Ctrl+C to stop.");

    browser::open_tab(&url);

    let app = http::build_router(&settings.root);
    http::serve(listener, app, shutdown_signal()).await?;

    info!("Server stopped.");
    Ok(())
}

fn init_tracing() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Resolves when an interrupt arrives. If the Ctrl+C handler cannot be
/// installed, serving continues without one rather than exiting.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {err}");
        std::future::pending::<()>().await;
    }
}

//! Robotics site host
//!
//! Serves the compiled client bundle over HTTP with a client-route fallback.

pub mod config;
pub mod error;
pub mod server;

pub use config::{load_config, Config};
pub use error::{Result, SiteError};
pub use server::build_router;

use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// Run the site host with the given configuration until Ctrl-C
pub async fn run(config: Config) -> Result<()> {
    if !config.site.root.is_dir() {
        return Err(SiteError::Config(format!(
            "Site root {:?} does not exist; build the bundle first",
            config.site.root
        )));
    }
    if !config.site.index_path().is_file() {
        tracing::warn!(
            "Index file {:?} is missing, client routes will return 404",
            config.site.index_path()
        );
    }

    let addr = format!("{}:{}", config.server.bind_address, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    let cancel = CancellationToken::new();

    // Setup shutdown handler
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for ctrl-c");
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    serve(listener, build_router(&config.site), cancel).await
}

/// Serve `router` on an already bound listener until `cancel` fires
pub async fn serve(listener: TcpListener, router: Router, cancel: CancellationToken) -> Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!("Site listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await
        .map_err(|e| SiteError::Server(e.to_string()))?;

    tracing::info!("Site host stopped");
    Ok(())
}

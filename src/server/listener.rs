use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::store::FileStore;

/// Binds the listening socket and accepts connections forever, one
/// spawned task per connection. A failed bind is fatal; a failed accept
/// is logged and the loop keeps going.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.listen_addr))?;
    info!("Listening on {}", cfg.listen_addr);

    let store = FileStore::new(cfg.directory.clone());

    loop {
        match listener.accept().await {
            Ok((socket, peer)) => {
                info!("Accepted connection from {}", peer);

                let store = store.clone();
                tokio::spawn(async move {
                    Connection::new(socket, store).run().await;
                    tracing::debug!(peer = %peer, "connection closed");
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "accept failed");
            }
        }
    }
}

use std::net::{Ipv4Addr, SocketAddr};

use axum::Router;

use crate::ready::ReadyGate;

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("runtime ready signal dropped before firing")]
    NeverReady,
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("HTTP server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Loopback only when `localhost` is set, otherwise every IPv4 interface.
pub fn bind_addr(port: u16, localhost: bool) -> SocketAddr {
    let ip = if localhost {
        Ipv4Addr::LOCALHOST
    } else {
        Ipv4Addr::UNSPECIFIED
    };
    SocketAddr::from((ip, port))
}

/// Wait for the ready gate, bind once, then serve until the process exits.
///
/// The display must be attached before the first request can arrive, which is
/// why binding happens after the gate and not before.
pub async fn run(addr: SocketAddr, app: Router, gate: ReadyGate) -> Result<(), ServeError> {
    if !gate.wait().await {
        return Err(ServeError::NeverReady);
    }

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;
    let local = listener.local_addr().unwrap_or(addr);
    tracing::info!("Listening on http://{}", local);

    axum::serve(listener, app).await.map_err(ServeError::Serve)
}

//! Graceful shutdown with a bounded drain

use std::{future::IntoFuture, time::Duration};

use tokio::sync::watch;
use tracing::{info, warn};

/// How the server stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drain {
    /// Every connection closed on its own
    Completed,
    /// Connections were still open when the timeout ran out
    TimedOut,
}

/// Resolves once `true` is sent, or once the sender is gone
pub async fn triggered(mut shutdown: watch::Receiver<bool>) {
    let _ = shutdown.wait_for(|stop| *stop).await;
}

/// Drive `server` until it stops, giving it at most `timeout` after shutdown is triggered
///
/// `server` is expected to start its own graceful shutdown from the same
/// channel. Connections still open when the timeout runs out are dropped.
pub async fn drain_with_timeout<S, E>(
    server: S,
    shutdown: watch::Receiver<bool>,
    timeout: Duration,
) -> Result<Drain, E>
where
    S: IntoFuture<Output = Result<(), E>>,
{
    let server = server.into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => return result.map(|()| Drain::Completed),
        () = triggered(shutdown) => {},
    }

    info!("⏳ Waiting up to {:?} for connections to close...", timeout);
    match tokio::time::timeout(timeout, server).await {
        Ok(result) => result.map(|()| Drain::Completed),
        Err(_) => {
            warn!(?timeout, "Connections still open after shutdown timeout, closing them");
            Ok(Drain::TimedOut)
        },
    }
}

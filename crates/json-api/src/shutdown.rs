//! Graceful shutdown on process signals

use std::{io, time::Duration};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

/// How long in-flight requests get to finish once a signal arrives.
const GRACE_PERIOD: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install Ctrl+C handler: {0}")]
    CtrlC(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    SigTerm(#[source] io::Error),
}

/// Which signal stopped the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Signal {
    Interrupt,
    #[cfg(unix)]
    Terminate,
}

#[cfg(unix)]
async fn terminate() -> Result<(), ShutdownSignalError> {
    signal::unix::signal(signal::unix::SignalKind::terminate())
        .map_err(ShutdownSignalError::SigTerm)?
        .recv()
        .await;

    Ok(())
}

async fn wait_for_signal() -> Result<Signal, ShutdownSignalError> {
    let interrupt = async { signal::ctrl_c().await.map_err(ShutdownSignalError::CtrlC) };

    #[cfg(unix)]
    {
        tokio::select! {
            result = interrupt => result.map(|()| Signal::Interrupt),
            result = terminate() => result.map(|()| Signal::Terminate),
        }
    }

    #[cfg(not(unix))]
    {
        interrupt.await.map(|()| Signal::Interrupt)
    }
}

/// Stop the server gracefully on Ctrl+C or SIGTERM.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownSignalError> {
    let received = wait_for_signal().await?;

    info!(signal = ?received, grace_secs = GRACE_PERIOD.as_secs(), "shutdown signal received");

    handle.stop_graceful(Some(GRACE_PERIOD));

    Ok(())
}

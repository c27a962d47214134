//! OS signal handling for the foreground monitor

use colored::Colorize;
use tokio::signal::unix::{signal, SignalKind};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Cancels a token when SIGINT or SIGTERM arrives
pub struct ShutdownSignal {
    token: CancellationToken,
}

impl ShutdownSignal {
    /// Create a new shutdown signal handler
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Token cancelled on shutdown
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Install the SIGINT and SIGTERM handlers
    pub fn setup(&self) -> Result<(), std::io::Error> {
        let mut sigint = signal(SignalKind::interrupt())?;
        let mut sigterm = signal(SignalKind::terminate())?;
        let token = self.token.clone();

        tokio::spawn(async move {
            let name = tokio::select! {
                _ = sigint.recv() => "SIGINT",
                _ = sigterm.recv() => "SIGTERM",
                _ = token.cancelled() => return,
            };
            eprintln!("{} Received {} (shutdown)", "↓".cyan(), name);
            info!(signal = name, "shutdown requested");
            token.cancel();
        });

        Ok(())
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

//! IPC (Inter-Process Communication) module for monitor control
//!
//! The foreground monitor serves requests on a Unix domain socket; client
//! subcommands connect, send one request and print the response.

mod handler;
mod protocol;
mod unix_socket;

pub use handler::MonitorRequestHandler;
pub use protocol::{decode_line, encode_line, IpcRequest, IpcResponse};
pub use unix_socket::{SocketPath, UnixSocketClient, UnixSocketServer};

use std::io;
use std::sync::Arc;

use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Errors seen by IPC clients
#[derive(Debug, Error)]
pub enum IpcError {
    #[error("No monitor running. Start with: clipmon")]
    NotRunning,

    #[error("Failed to communicate with monitor: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed message: {0}")]
    Protocol(#[from] serde_json::Error),

    #[error("Monitor closed the connection without responding")]
    Closed,

    /// The monitor answered with an error response
    #[error("{0}")]
    Rejected(String),

    #[error("Unexpected response from monitor")]
    UnexpectedResponse,
}

/// Answers decoded requests on behalf of the server
#[async_trait::async_trait]
pub trait RequestHandler: Send + Sync {
    async fn handle(&self, request: IpcRequest) -> IpcResponse;
}

/// Trait for IPC servers that listen for monitor commands
#[async_trait::async_trait]
pub trait IpcServer: Send + Sync {
    /// Bind to the IPC endpoint
    fn bind(&mut self) -> io::Result<()>;

    /// Get the path/name of the IPC endpoint
    fn path(&self) -> String;

    /// Accept connections until `cancel` fires, answering each request
    /// through `handler`.
    async fn run(
        &self,
        handler: Arc<dyn RequestHandler>,
        cancel: CancellationToken,
    ) -> io::Result<()>;

    /// Cleanup IPC resources
    fn cleanup(&self);
}

/// Trait for IPC clients that send commands to the monitor
#[async_trait::async_trait]
pub trait IpcClient: Send + Sync {
    /// Check if the monitor appears to be running (endpoint exists)
    fn is_monitor_running(&self) -> bool;

    /// Send a request and wait for the response
    async fn send(&self, request: &IpcRequest) -> Result<IpcResponse, IpcError>;
}

/// Create the IPC server at the default endpoint
pub fn create_ipc_server() -> Box<dyn IpcServer> {
    Box::new(UnixSocketServer::new(SocketPath::new()))
}

/// Create the IPC client for the default endpoint
pub fn create_ipc_client() -> Box<dyn IpcClient> {
    Box::new(UnixSocketClient::new(SocketPath::new()))
}

//! Unix Domain Socket transport for monitor control

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{UnixListener, UnixStream};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::protocol::{decode_line, encode_line};
use super::{IpcClient, IpcError, IpcRequest, IpcResponse, IpcServer, RequestHandler};
use crate::cli::runtime::runtime_path;

const SOCKET_FILE_NAME: &str = "clipmon.sock";

/// Socket path resolver
#[derive(Debug, Clone)]
pub struct SocketPath {
    path: PathBuf,
}

impl SocketPath {
    /// Socket in the runtime directory
    pub fn new() -> Self {
        Self {
            path: runtime_path(SOCKET_FILE_NAME),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the socket path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if socket file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Remove socket file if it exists
    pub fn cleanup(&self) -> io::Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

impl Default for SocketPath {
    fn default() -> Self {
        Self::new()
    }
}

/// Unix Domain Socket server for monitor commands
pub struct UnixSocketServer {
    socket_path: SocketPath,
    listener: Option<UnixListener>,
}

impl UnixSocketServer {
    /// Create a new socket server
    pub fn new(socket_path: SocketPath) -> Self {
        Self {
            socket_path,
            listener: None,
        }
    }
}

impl Drop for UnixSocketServer {
    fn drop(&mut self) {
        if self.listener.is_some() {
            self.cleanup();
        }
    }
}

#[async_trait]
impl IpcServer for UnixSocketServer {
    fn bind(&mut self) -> io::Result<()> {
        // The PID file already guarantees no live monitor owns this path
        self.socket_path.cleanup()?;

        let listener = UnixListener::bind(self.socket_path.path())?;
        self.listener = Some(listener);
        Ok(())
    }

    fn path(&self) -> String {
        self.socket_path.path().to_string_lossy().to_string()
    }

    async fn run(
        &self,
        handler: Arc<dyn RequestHandler>,
        cancel: CancellationToken,
    ) -> io::Result<()> {
        let listener = self
            .listener
            .as_ref()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "Socket not bound"))?;

        loop {
            let accepted = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Ok(()),
                accepted = listener.accept() => accepted,
            };

            match accepted {
                Ok((stream, _addr)) => {
                    let handler = Arc::clone(&handler);
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(stream, handler).await {
                            warn!(error = %e, "socket connection error");
                        }
                    });
                }
                Err(e) => {
                    warn!(error = %e, "socket accept error");
                }
            }
        }
    }

    fn cleanup(&self) {
        let _ = self.socket_path.cleanup();
    }
}

/// Handle a single client connection
async fn handle_connection(
    stream: UnixStream,
    handler: Arc<dyn RequestHandler>,
) -> io::Result<()> {
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);
    let mut line = String::new();

    if reader.read_line(&mut line).await? == 0 {
        return Ok(());
    }

    let response = match decode_line::<IpcRequest>(&line) {
        Ok(request) => {
            debug!(?request, "ipc request");
            handler.handle(request).await
        }
        Err(e) => IpcResponse::error(format!("invalid request: {}", e)),
    };

    let encoded =
        encode_line(&response).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writer.write_all(encoded.as_bytes()).await?;
    writer.flush().await?;

    Ok(())
}

/// Unix Domain Socket client for sending commands to the monitor
pub struct UnixSocketClient {
    socket_path: SocketPath,
}

impl UnixSocketClient {
    /// Create a new socket client
    pub fn new(socket_path: SocketPath) -> Self {
        Self { socket_path }
    }
}

#[async_trait]
impl IpcClient for UnixSocketClient {
    fn is_monitor_running(&self) -> bool {
        self.socket_path.exists()
    }

    async fn send(&self, request: &IpcRequest) -> Result<IpcResponse, IpcError> {
        let stream = UnixStream::connect(self.socket_path.path())
            .await
            .map_err(|e| match e.kind() {
                // Leftover socket from a monitor that did not shut down cleanly
                io::ErrorKind::NotFound | io::ErrorKind::ConnectionRefused => {
                    IpcError::NotRunning
                }
                _ => IpcError::Io(e),
            })?;
        let (reader, mut writer) = stream.into_split();

        writer.write_all(encode_line(request)?.as_bytes()).await?;
        writer.flush().await?;

        let mut reader = BufReader::new(reader);
        let mut response = String::new();
        if reader.read_line(&mut response).await? == 0 {
            return Err(IpcError::Closed);
        }

        Ok(decode_line(&response)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct EchoHandler;

    #[async_trait]
    impl RequestHandler for EchoHandler {
        async fn handle(&self, request: IpcRequest) -> IpcResponse {
            match request {
                IpcRequest::CopyText { text } => IpcResponse::error(text),
                _ => IpcResponse::Ok,
            }
        }
    }

    #[test]
    fn socket_path_is_in_runtime_dir() {
        let socket_path = SocketPath::new();
        assert_eq!(socket_path.path(), runtime_path("clipmon.sock").as_path());
    }

    #[tokio::test]
    async fn client_reports_not_running_without_socket() {
        let dir = TempDir::new().unwrap();
        let client = UnixSocketClient::new(SocketPath::with_path(dir.path().join("none.sock")));

        assert!(!client.is_monitor_running());
        let result = client.send(&IpcRequest::Status).await;
        assert!(matches!(result, Err(IpcError::NotRunning)));
    }

    #[tokio::test]
    async fn server_answers_requests_until_cancelled() {
        let dir = TempDir::new().unwrap();
        let path = SocketPath::with_path(dir.path().join("test.sock"));

        let mut server = UnixSocketServer::new(path.clone());
        server.bind().unwrap();
        let cancel = CancellationToken::new();
        let server_cancel = cancel.clone();
        let task = tokio::spawn(async move {
            let result = server.run(Arc::new(EchoHandler), server_cancel).await;
            drop(server);
            result
        });

        let client = UnixSocketClient::new(path.clone());
        assert!(client.is_monitor_running());
        assert_eq!(client.send(&IpcRequest::Clear).await.unwrap(), IpcResponse::Ok);
        assert_eq!(
            client
                .send(&IpcRequest::CopyText {
                    text: "echo".to_string()
                })
                .await
                .unwrap(),
            IpcResponse::error("echo")
        );

        cancel.cancel();
        task.await.unwrap().unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn malformed_request_gets_error_response() {
        let dir = TempDir::new().unwrap();
        let path = SocketPath::with_path(dir.path().join("bad.sock"));

        let mut server = UnixSocketServer::new(path.clone());
        server.bind().unwrap();
        let cancel = CancellationToken::new();
        let server_cancel = cancel.clone();
        let task =
            tokio::spawn(async move { server.run(Arc::new(EchoHandler), server_cancel).await });

        let stream = UnixStream::connect(path.path()).await.unwrap();
        let (reader, mut writer) = stream.into_split();
        writer.write_all(b"{\"command\":\"toggle\"}\n").await.unwrap();

        let mut line = String::new();
        BufReader::new(reader).read_line(&mut line).await.unwrap();
        let response: IpcResponse = decode_line(&line).unwrap();
        assert!(matches!(
            response,
            IpcResponse::Error { message } if message.starts_with("invalid request")
        ));

        cancel.cancel();
        task.await.unwrap().unwrap();
    }
}

//! Maps IPC requests onto the running monitor

use std::sync::Arc;

use async_trait::async_trait;

use super::{IpcRequest, IpcResponse, RequestHandler};
use crate::application::ports::Clipboard;
use crate::application::ClipboardMonitor;

/// Serves requests from a shared [`ClipboardMonitor`]
pub struct MonitorRequestHandler<C: Clipboard> {
    monitor: Arc<ClipboardMonitor<C>>,
}

impl<C: Clipboard> MonitorRequestHandler<C> {
    pub fn new(monitor: Arc<ClipboardMonitor<C>>) -> Self {
        Self { monitor }
    }
}

#[async_trait]
impl<C: Clipboard + 'static> RequestHandler for MonitorRequestHandler<C> {
    async fn handle(&self, request: IpcRequest) -> IpcResponse {
        match request {
            IpcRequest::List { limit } => {
                let mut entries = self.monitor.list_history();
                if let Some(limit) = limit {
                    entries.truncate(limit);
                }
                IpcResponse::Entries { entries }
            }
            IpcRequest::Clear => {
                self.monitor.clear_history();
                IpcResponse::Ok
            }
            IpcRequest::Delete { index } => match self.monitor.delete_history_entry(index) {
                Ok(_) => IpcResponse::Ok,
                Err(e) => IpcResponse::error(e.to_string()),
            },
            IpcRequest::Copy { index } => match self.monitor.copy_history_entry(index).await {
                Ok(_) => IpcResponse::Ok,
                Err(e) => IpcResponse::error(e.to_string()),
            },
            IpcRequest::CopyText { text } => match self.monitor.copy_to_clipboard(&text).await {
                Ok(()) => IpcResponse::Ok,
                Err(e) => IpcResponse::error(e.to_string()),
            },
            IpcRequest::Status => {
                let history = self.monitor.history();
                IpcResponse::State {
                    state: self.monitor.state(),
                    entries: history.len(),
                    capacity: history.capacity(),
                    interval: self.monitor.interval().to_string(),
                }
            }
        }
    }
}

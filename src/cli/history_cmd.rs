//! Client commands - talk to the running monitor over IPC

use super::args::HistoryAction;
use super::ipc::{IpcClient, IpcError, IpcRequest, IpcResponse};
use super::presenter::Presenter;

/// Handle `history` subcommands
pub async fn handle_history_command(
    action: HistoryAction,
    client: &dyn IpcClient,
    presenter: &Presenter,
) -> Result<(), IpcError> {
    match action {
        HistoryAction::List { limit, json } => {
            let entries = match send(client, &IpcRequest::List { limit }).await? {
                IpcResponse::Entries { entries } => entries,
                _ => return Err(IpcError::UnexpectedResponse),
            };

            if json {
                presenter.output(&serde_json::to_string_pretty(&entries)?);
            } else if entries.is_empty() {
                presenter.info("History is empty");
            } else {
                for (index, entry) in entries.iter().enumerate() {
                    presenter.history_entry(index, entry);
                }
            }
        }
        HistoryAction::Clear => {
            expect_ok(send(client, &IpcRequest::Clear).await?)?;
            presenter.success("History cleared");
        }
        HistoryAction::Delete { index } => {
            expect_ok(send(client, &IpcRequest::Delete { index }).await?)?;
            presenter.success(&format!("Deleted entry {}", index));
        }
        HistoryAction::Copy { index } => {
            expect_ok(send(client, &IpcRequest::Copy { index }).await?)?;
            presenter.success(&format!("Copied entry {} to clipboard", index));
        }
    }

    Ok(())
}

/// Handle `copy <TEXT>`
pub async fn handle_copy_command(
    text: String,
    client: &dyn IpcClient,
    presenter: &Presenter,
) -> Result<(), IpcError> {
    expect_ok(send(client, &IpcRequest::CopyText { text }).await?)?;
    presenter.success("Copied to clipboard");
    Ok(())
}

/// Handle `status`
pub async fn handle_status_command(
    client: &dyn IpcClient,
    presenter: &Presenter,
) -> Result<(), IpcError> {
    match send(client, &IpcRequest::Status).await? {
        IpcResponse::State {
            state,
            entries,
            capacity,
            interval,
        } => {
            presenter.monitor_status(state.as_str());
            presenter.key_value("entries", &format!("{}/{}", entries, capacity));
            presenter.key_value("interval", &interval);
            Ok(())
        }
        _ => Err(IpcError::UnexpectedResponse),
    }
}

/// Send `request`, turning error responses into [`IpcError::Rejected`]
async fn send(client: &dyn IpcClient, request: &IpcRequest) -> Result<IpcResponse, IpcError> {
    if !client.is_monitor_running() {
        return Err(IpcError::NotRunning);
    }

    match client.send(request).await? {
        IpcResponse::Error { message } => Err(IpcError::Rejected(message)),
        response => Ok(response),
    }
}

fn expect_ok(response: IpcResponse) -> Result<(), IpcError> {
    match response {
        IpcResponse::Ok => Ok(()),
        _ => Err(IpcError::UnexpectedResponse),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Client returning canned responses and recording requests
    struct MockClient {
        running: bool,
        response: IpcResponse,
        sent: Mutex<Vec<IpcRequest>>,
    }

    impl MockClient {
        fn answering(response: IpcResponse) -> Self {
            Self {
                running: true,
                response,
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl IpcClient for MockClient {
        fn is_monitor_running(&self) -> bool {
            self.running
        }

        async fn send(&self, request: &IpcRequest) -> Result<IpcResponse, IpcError> {
            self.sent.lock().unwrap().push(request.clone());
            Ok(self.response.clone())
        }
    }

    #[tokio::test]
    async fn not_running_is_reported_without_sending() {
        let client = MockClient {
            running: false,
            ..MockClient::answering(IpcResponse::Ok)
        };
        let result = handle_status_command(&client, &Presenter::new()).await;
        assert!(matches!(result, Err(IpcError::NotRunning)));
        assert!(client.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_sends_index() {
        let client = MockClient::answering(IpcResponse::Ok);
        handle_history_command(HistoryAction::Delete { index: 4 }, &client, &Presenter::new())
            .await
            .unwrap();
        assert_eq!(
            client.sent.lock().unwrap().as_slice(),
            &[IpcRequest::Delete { index: 4 }]
        );
    }

    #[tokio::test]
    async fn error_response_becomes_rejected() {
        let client = MockClient::answering(IpcResponse::error("index out of range: 9"));
        let result =
            handle_history_command(HistoryAction::Copy { index: 9 }, &client, &Presenter::new())
                .await;
        assert!(matches!(
            result,
            Err(IpcError::Rejected(message)) if message.contains("out of range")
        ));
    }

    #[tokio::test]
    async fn list_passes_limit() {
        let client = MockClient::answering(IpcResponse::Entries { entries: vec![] });
        handle_history_command(
            HistoryAction::List {
                limit: Some(3),
                json: true,
            },
            &client,
            &Presenter::new(),
        )
        .await
        .unwrap();
        assert_eq!(
            client.sent.lock().unwrap().as_slice(),
            &[IpcRequest::List { limit: Some(3) }]
        );
    }

    #[tokio::test]
    async fn list_rejects_mismatched_response() {
        let client = MockClient::answering(IpcResponse::Ok);
        let result = handle_history_command(
            HistoryAction::List {
                limit: None,
                json: false,
            },
            &client,
            &Presenter::new(),
        )
        .await;
        assert!(matches!(result, Err(IpcError::UnexpectedResponse)));
    }

    #[tokio::test]
    async fn copy_text_sends_text() {
        let client = MockClient::answering(IpcResponse::Ok);
        handle_copy_command("hi".to_string(), &client, &Presenter::new())
            .await
            .unwrap();
        assert_eq!(
            client.sent.lock().unwrap().as_slice(),
            &[IpcRequest::CopyText {
                text: "hi".to_string()
            }]
        );
    }
}

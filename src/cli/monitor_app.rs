//! Foreground monitor runner

use std::process::ExitCode;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::application::ports::DesktopNotifier;
use crate::application::{ClipboardMonitor, MonitorConfig};
use crate::domain::history::ClipboardEntry;
use crate::infrastructure::{create_clipboard, create_notifier};

use super::app::{EXIT_ERROR, EXIT_SUCCESS};
use super::args::MonitorOptions;
use super::ipc::{create_ipc_server, MonitorRequestHandler};
use super::pid_file::PidFile;
use super::presenter::{preview, Presenter};
use super::signals::ShutdownSignal;

/// Run the monitor until SIGINT/SIGTERM
pub async fn run_monitor(options: MonitorOptions) -> ExitCode {
    let presenter = Presenter::new();

    let pid_file = PidFile::new();
    if let Err(e) = pid_file.acquire() {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_ERROR);
    }

    let shutdown = ShutdownSignal::new();
    if let Err(e) = shutdown.setup() {
        presenter.error(&format!("Failed to setup signal handler: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }
    let token = shutdown.token();

    let monitor = Arc::new(ClipboardMonitor::new(
        create_clipboard(options.backend),
        MonitorConfig {
            max_history: options.max_history,
            interval: options.interval,
        },
    ));

    let mut server = create_ipc_server();
    if let Err(e) = server.bind() {
        presenter.error(&format!("Failed to bind socket: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }
    let socket = server.path();

    let handler = Arc::new(MonitorRequestHandler::new(Arc::clone(&monitor)));
    let server_token = token.clone();
    let server_task = tokio::spawn(async move {
        if let Err(e) = server.run(handler, server_token).await {
            warn!(error = %e, "IPC server stopped");
        }
    });

    // The listener only forwards; printing and notifications happen off the poll loop
    let (tx, rx) = mpsc::unbounded_channel::<ClipboardEntry>();
    monitor.set_change_listener(move |entry| {
        let _ = tx.send(entry.clone());
    });
    let notifier = options.notify.then(create_notifier);
    let presenter_task = spawn_entry_presenter(rx, options.quiet, notifier);

    presenter.monitor_status("Watching clipboard...");
    presenter.info(&format!(
        "PID: {} | Socket: {} | Backend: {} | Interval: {} | SIGINT: exit",
        std::process::id(),
        socket,
        options.backend,
        options.interval
    ));

    let result = monitor.start(token.clone()).await;

    token.cancel();
    monitor.clear_change_listener();
    let _ = server_task.await;
    let _ = presenter_task.await;
    let _ = pid_file.release();

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) if e.is_cancelled() => {
            presenter.monitor_status("Stopped");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Print and announce entries in detection order until the sender is dropped
fn spawn_entry_presenter(
    mut rx: mpsc::UnboundedReceiver<ClipboardEntry>,
    quiet: bool,
    notifier: Option<Box<dyn DesktopNotifier>>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let presenter = Presenter::new();
        while let Some(entry) = rx.recv().await {
            info!(chars = entry.content().chars().count(), "clipboard changed");
            if !quiet {
                presenter.new_entry(&entry);
            }
            if let Some(notifier) = notifier.as_ref() {
                let body = preview(entry.content());
                if let Err(e) = notifier.notify("Clipboard updated", &body).await {
                    warn!(error = %e, "desktop notification failed");
                }
            }
        }
    })
}

//! Library-level monitor tests over the in-memory clipboard

use std::sync::{Arc, Mutex};
use std::time::Duration;

use clipmon::application::{ClipboardMonitor, MonitorConfig, MonitorError};
use clipmon::domain::error::HistoryError;
use clipmon::domain::monitor::{MonitorState, PollInterval};
use clipmon::infrastructure::MemoryClipboard;
use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout, Instant};
use tokio_util::sync::CancellationToken;

type Monitor = Arc<ClipboardMonitor<MemoryClipboard>>;

fn monitor(clipboard: &MemoryClipboard, max_history: usize) -> Monitor {
    Arc::new(ClipboardMonitor::new(
        clipboard.clone(),
        MonitorConfig {
            max_history,
            interval: PollInterval::from_millis(5),
        },
    ))
}

fn spawn(monitor: &Monitor, token: &CancellationToken) -> JoinHandle<Result<(), MonitorError>> {
    let monitor = Arc::clone(monitor);
    let token = token.clone();
    tokio::spawn(async move { monitor.start(token).await })
}

/// Spawn the monitor and wait for its startup sample
async fn start_seeded(
    monitor: &Monitor,
    clipboard: &MemoryClipboard,
    token: &CancellationToken,
) -> JoinHandle<Result<(), MonitorError>> {
    let handle = spawn(monitor, token);
    wait_until(|| clipboard.read_count() >= 1).await;
    handle
}

async fn wait_until(mut condition: impl FnMut() -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !condition() {
        assert!(Instant::now() < deadline, "condition not reached in time");
        sleep(Duration::from_millis(2)).await;
    }
}

fn contents(monitor: &Monitor) -> Vec<String> {
    monitor
        .list_history()
        .into_iter()
        .map(|e| e.into_content())
        .collect()
}

/// Set the clipboard and wait until the monitor has sampled it
async fn change(clipboard: &MemoryClipboard, text: &str) {
    clipboard.set_text(text);
    let seen = clipboard.read_count();
    wait_until(|| clipboard.read_count() >= seen + 2).await;
}

#[tokio::test]
async fn eviction_keeps_most_recent_entries() {
    let clipboard = MemoryClipboard::new();
    let monitor = monitor(&clipboard, 3);
    let token = CancellationToken::new();
    let handle = start_seeded(&monitor, &clipboard, &token).await;

    for text in ["A", "B", "C", "D"] {
        change(&clipboard, text).await;
    }

    assert_eq!(contents(&monitor), vec!["D", "C", "B"]);

    token.cancel();
    assert!(matches!(handle.await.unwrap(), Err(MonitorError::Cancelled)));
}

#[tokio::test]
async fn returning_content_moves_to_front_once() {
    let clipboard = MemoryClipboard::new();
    let monitor = monitor(&clipboard, 10);
    let notified = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&notified);
    monitor.set_change_listener(move |entry| {
        sink.lock().unwrap().push(entry.content().to_string());
    });

    let token = CancellationToken::new();
    let handle = start_seeded(&monitor, &clipboard, &token).await;

    change(&clipboard, "A").await;
    change(&clipboard, "B").await;
    change(&clipboard, "A").await;

    assert_eq!(contents(&monitor), vec!["A", "B"]);
    assert_eq!(*notified.lock().unwrap(), vec!["A", "B", "A"]);

    token.cancel();
    handle.await.unwrap().unwrap_err();
}

#[tokio::test]
async fn unchanged_clipboard_notifies_nothing() {
    let clipboard = MemoryClipboard::with_text("seed");
    let monitor = monitor(&clipboard, 10);
    let count = Arc::new(Mutex::new(0usize));
    let sink = Arc::clone(&count);
    monitor.set_change_listener(move |_| *sink.lock().unwrap() += 1);

    let token = CancellationToken::new();
    let handle = spawn(&monitor, &token);
    wait_until(|| clipboard.read_count() >= 10).await;

    assert_eq!(contents(&monitor), vec!["seed"]);
    assert_eq!(*count.lock().unwrap(), 0);

    token.cancel();
    handle.await.unwrap().unwrap_err();
}

#[tokio::test]
async fn failures_are_skipped_and_polling_continues() {
    let clipboard = MemoryClipboard::new();
    let monitor = monitor(&clipboard, 10);
    let token = CancellationToken::new();
    let handle = start_seeded(&monitor, &clipboard, &token).await;

    clipboard.fail_next_reads(25);
    clipboard.set_text("after failures");
    wait_until(|| contents(&monitor) == vec!["after failures"]).await;
    assert_eq!(monitor.state(), MonitorState::Running);

    token.cancel();
    handle.await.unwrap().unwrap_err();
    assert_eq!(monitor.state(), MonitorState::Stopped);
}

#[tokio::test]
async fn cancellation_stops_within_one_interval() {
    let clipboard = MemoryClipboard::new();
    let monitor = Arc::new(ClipboardMonitor::new(
        clipboard.clone(),
        MonitorConfig {
            max_history: 5,
            interval: PollInterval::from_secs(30),
        },
    ));
    let token = CancellationToken::new();
    let handle = spawn(&monitor, &token);
    wait_until(|| clipboard.read_count() >= 1).await;

    token.cancel();
    let result = timeout(Duration::from_secs(2), handle)
        .await
        .expect("monitor did not stop promptly")
        .unwrap();
    assert!(matches!(result, Err(MonitorError::Cancelled)));
}

#[tokio::test]
async fn management_operations_while_running() {
    let clipboard = MemoryClipboard::new();
    let monitor = monitor(&clipboard, 10);
    let token = CancellationToken::new();
    let handle = start_seeded(&monitor, &clipboard, &token).await;

    change(&clipboard, "x").await;
    change(&clipboard, "y").await;

    assert_eq!(
        monitor.delete_history_entry(5),
        Err(HistoryError::OutOfRange { index: 5, len: 2 })
    );
    let removed = monitor.delete_history_entry(1).unwrap();
    assert_eq!(removed.content(), "x");
    assert_eq!(contents(&monitor), vec!["y"]);

    monitor.copy_to_clipboard("z").await.unwrap();
    wait_until(|| contents(&monitor) == vec!["z", "y"]).await;

    monitor.clear_history();
    assert!(monitor.list_history().is_empty());

    token.cancel();
    handle.await.unwrap().unwrap_err();
}

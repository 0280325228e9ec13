//! User-facing notification sink.
//!
//! The indexing server may return a human-readable `message` with a
//! successful submission ("Vectorized 12 sentences"); the pipeline hands
//! it to a sink. Delivery is fire-and-forget with no guarantee — a sink
//! must never fail the caller.

/// Fire-and-forget notification delivery.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, title: &str, message: &str, priority: i32);
}

/// Sink for non-interactive runs: notifications land in the log stream.
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn notify(&self, title: &str, message: &str, priority: i32) {
        tracing::info!(title, priority, "{}", message);
    }
}

/// Sink for interactive CLI runs: notifications go straight to stdout.
pub struct StdoutNotifier;

impl NotificationSink for StdoutNotifier {
    fn notify(&self, title: &str, message: &str, _priority: i32) {
        println!("  {}: {}", title, message);
    }
}

/// Sink that drops everything. Used in tests and dry paths.
pub struct NullNotifier;

impl NotificationSink for NullNotifier {
    fn notify(&self, _title: &str, _message: &str, _priority: i32) {}
}

//! # Search State
//!
//! Debounces raw search input into settled search terms.
//!
//! ## Timeline
//! ```text
//! keystroke:   "p"     "pr"    "pro"
//! time (ms):    0      100     200                  500
//!               │       │       │                    │
//! pending:      ├─abort─┤       │                    │
//!                       ├─abort─┤                    │
//!                               └──── 300 ms quiet ──┴──► settled "pro"
//! ```
//!
//! At most one timer task is pending. Each keystroke aborts it and spawns a
//! fresh one. Settled terms are published on a `watch` channel the event
//! loop selects on, so every state change still happens on the loop task.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

#[derive(Debug)]
pub struct SearchDebouncer {
    delay: Duration,

    /// Raw input as last typed.
    input: String,

    /// The single pending timer.
    pending: Option<JoinHandle<()>>,

    settled_tx: Arc<watch::Sender<String>>,
    settled_rx: watch::Receiver<String>,
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        let (tx, rx) = watch::channel(String::new());
        SearchDebouncer {
            delay,
            input: String::new(),
            pending: None,
            settled_tx: Arc::new(tx),
            settled_rx: rx,
        }
    }

    /// Raw input, possibly not yet settled.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Receiver for settled terms. Only values sent after this call are
    /// reported as changed.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        let mut rx = self.settled_rx.clone();
        rx.mark_unchanged();
        rx
    }

    /// Records new search input and restarts the quiet period.
    ///
    /// Must be called from within a tokio runtime.
    pub fn keystroke(&mut self, input: impl Into<String>) {
        let input = input.into();
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        debug!(input = %input, delay_ms = self.delay.as_millis() as u64, "Search input");
        self.input = input.clone();

        let tx = Arc::clone(&self.settled_tx);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tx.send_replace(input);
        }));
    }

    /// Cancels the pending timer and returns the input it would have
    /// settled, if any. Used when input ends before the quiet period does.
    pub fn flush(&mut self) -> Option<String> {
        let handle = self.pending.take()?;
        let was_pending = !handle.is_finished();
        handle.abort();
        was_pending.then(|| self.input.clone())
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{sleep, Instant};

    const DELAY: Duration = Duration::from_millis(300);

    #[tokio::test(start_paused = true)]
    async fn test_burst_settles_once_on_last_term() {
        let mut search = SearchDebouncer::new(DELAY);
        let mut settled = search.subscribe();
        let start = Instant::now();

        search.keystroke("p");
        sleep(Duration::from_millis(100)).await;
        search.keystroke("pr");
        sleep(Duration::from_millis(100)).await;
        search.keystroke("pro");
        sleep(Duration::from_millis(299)).await;

        assert!(!settled.has_changed().unwrap());

        settled.changed().await.unwrap();
        assert_eq!(*settled.borrow_and_update(), "pro");
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(500) && elapsed < Duration::from_millis(510));

        sleep(Duration::from_secs(5)).await;
        assert!(!settled.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_keystroke_after_quiet_period_settles_again() {
        let mut search = SearchDebouncer::new(DELAY);
        let mut settled = search.subscribe();

        search.keystroke("shoe");
        settled.changed().await.unwrap();
        assert_eq!(*settled.borrow_and_update(), "shoe");
        assert!(!search.is_pending());

        search.keystroke("shoes");
        settled.changed().await.unwrap();
        assert_eq!(*settled.borrow_and_update(), "shoes");
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_returns_pending_input_and_cancels() {
        let mut search = SearchDebouncer::new(DELAY);
        let settled = search.subscribe();

        search.keystroke("book");
        assert_eq!(search.input(), "book");
        assert_eq!(search.flush(), Some("book".to_string()));
        assert_eq!(search.flush(), None);

        sleep(Duration::from_secs(1)).await;
        assert!(!settled.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_after_settle_is_none() {
        let mut search = SearchDebouncer::new(DELAY);
        let mut settled = search.subscribe();

        search.keystroke("toy");
        settled.changed().await.unwrap();
        sleep(Duration::from_millis(1)).await;
        assert_eq!(search.flush(), None);
    }
}

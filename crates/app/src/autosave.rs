//! Autosave debouncer — coalesces bursts of changes into one deferred save.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::ports::UiSink;

/// Leading-edge autosave debouncer.
///
/// The first queue request within a window schedules one deferred save;
/// further requests are dropped until that save has both fired and run to
/// completion. The completed run commits one UI change.
pub struct Autosave {
    window: Duration,
    pending: Arc<AtomicBool>,
}

impl Autosave {
    /// Create a debouncer with the given coalescing window.
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether an autosave is scheduled or still running.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }

    /// Queue an autosave, unless one is already pending.
    ///
    /// `start_save` is built immediately but runs only after the window
    /// elapses; the pending flag clears when the returned future completes.
    /// Returns `false` when the request was coalesced into an already
    /// pending save.
    ///
    /// Must be called from within a tokio runtime.
    pub fn queue<F, Fut, U>(&self, ui: U, start_save: F) -> bool
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
        U: UiSink + Send + Sync + 'static,
    {
        if self.pending.swap(true, Ordering::SeqCst) {
            return false;
        }

        let pending = Arc::clone(&self.pending);
        let window = self.window;
        tokio::spawn(async move {
            tokio::time::sleep(window).await;
            tracing::debug!("autosave window elapsed, starting save");
            start_save().await;
            pending.store(false, Ordering::SeqCst);
            ui.changed();
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    struct NoopUi;

    impl UiSink for NoopUi {
        fn changed(&self) {}
    }

    async fn wait_until(mut condition: impl FnMut() -> bool) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while !condition() {
                tokio::time::sleep(Duration::from_millis(2)).await;
            }
        })
        .await
        .expect("condition should hold before the timeout");
    }

    #[tokio::test]
    async fn should_coalesce_requests_within_one_window() {
        let autosave = Autosave::new(Duration::from_millis(20));
        let saves = Arc::new(AtomicUsize::new(0));

        for n in 0..3 {
            let saves = Arc::clone(&saves);
            let queued = autosave.queue(NoopUi, move || async move {
                saves.fetch_add(1, Ordering::SeqCst);
            });
            assert_eq!(queued, n == 0);
        }

        wait_until(|| !autosave.is_pending()).await;
        assert_eq!(saves.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_stay_pending_while_the_save_runs() {
        let autosave = Autosave::new(Duration::from_millis(5));
        let (release, gate) = tokio::sync::watch::channel(false);
        let started = Arc::new(AtomicBool::new(false));

        let flag = Arc::clone(&started);
        let mut gate_rx = gate.clone();
        assert!(autosave.queue(NoopUi, move || async move {
            flag.store(true, Ordering::SeqCst);
            gate_rx.wait_for(|released| *released).await.unwrap();
        }));

        // the save has fired but not completed: still pending
        wait_until(|| started.load(Ordering::SeqCst)).await;
        assert!(autosave.is_pending());
        assert!(!autosave.queue(NoopUi, || async {}));

        release.send(true).unwrap();
        wait_until(|| !autosave.is_pending()).await;
    }

    #[tokio::test]
    async fn should_allow_a_new_autosave_after_completion() {
        let autosave = Autosave::new(Duration::from_millis(5));
        let saves = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let saves = Arc::clone(&saves);
            assert!(autosave.queue(NoopUi, move || async move {
                saves.fetch_add(1, Ordering::SeqCst);
            }));
            wait_until(|| !autosave.is_pending()).await;
        }

        assert_eq!(saves.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn should_commit_one_ui_change_per_completed_save() {
        struct CountingUi(Arc<AtomicUsize>);

        impl UiSink for CountingUi {
            fn changed(&self) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        let autosave = Autosave::new(Duration::from_millis(5));
        let commits = Arc::new(AtomicUsize::new(0));

        autosave.queue(CountingUi(Arc::clone(&commits)), || async {});
        autosave.queue(CountingUi(Arc::clone(&commits)), || async {});

        let commits_seen = Arc::clone(&commits);
        wait_until(move || commits_seen.load(Ordering::SeqCst) > 0).await;
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(commits.load(Ordering::SeqCst), 1);
    }
}

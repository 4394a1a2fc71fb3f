//! In-process UI change bus backed by a tokio watch channel.

use tokio::sync::watch;

use crate::ports::UiSink;

/// In-process UI change bus using a tokio [`watch`] channel.
///
/// Each commit bumps a generation counter; a rendering layer subscribes
/// and redraws whenever the generation changes. Committing succeeds even
/// when there are no active subscribers.
pub struct InProcessUiBus {
    generation: watch::Sender<u64>,
}

impl InProcessUiBus {
    /// Create a new bus at generation zero.
    #[must_use]
    pub fn new() -> Self {
        let (generation, _) = watch::channel(0);
        Self { generation }
    }

    /// Subscribe to generation changes.
    ///
    /// The receiver observes every commit made *after* the subscription
    /// is created (coalesced: a slow subscriber sees the latest value).
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.generation.subscribe()
    }

    /// The current generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        *self.generation.borrow()
    }
}

impl Default for InProcessUiBus {
    fn default() -> Self {
        Self::new()
    }
}

impl UiSink for InProcessUiBus {
    fn changed(&self) {
        self.generation.send_modify(|generation| *generation += 1);
    }
}

use tokio::sync::broadcast;

/// Default number of buffered notifications per subscriber.
const FEED_CAPACITY: usize = 64;

/// Collection whose contents changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionChange {
    User,
    Course,
}

/// Broadcast feed of collection changes.
///
/// Cloning shares the same channel. The feed closes once every clone is dropped.
#[derive(Clone)]
pub struct ChangeFeed {
    sender: broadcast::Sender<CollectionChange>,
}

impl ChangeFeed {
    pub fn new() -> Self {
        Self::with_capacity(FEED_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Opens a new subscription receiving changes published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<CollectionChange> {
        self.sender.subscribe()
    }

    /// Publishes a change. Having no listener is not an error.
    pub fn publish(&self, change: CollectionChange) {
        if self.sender.send(change).is_err() {
            tracing::debug!("No listener for {:?} change", change);
        }
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new()
    }
}

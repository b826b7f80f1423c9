//! Long-lived task keeping the current stats period in sync with the database.

use sea_orm::DatabaseConnection;
use tokio::{
    sync::broadcast::{error::RecvError, Receiver},
    task::JoinHandle,
};

use crate::server::{
    events::feed::{ChangeFeed, CollectionChange},
    service::stats::StatsService,
};

pub struct StatsListener {
    db: DatabaseConnection,
    receiver: Receiver<CollectionChange>,
}

impl StatsListener {
    /// Subscribes a new listener to the feed.
    ///
    /// Changes published before this call are not seen by the listener.
    pub fn new(db: DatabaseConnection, feed: &ChangeFeed) -> Self {
        Self {
            db,
            receiver: feed.subscribe(),
        }
    }

    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Processes changes until the feed closes.
    ///
    /// Missed notifications trigger a full refresh instead of stopping the task.
    pub async fn run(mut self) {
        tracing::info!("Stats listener started");

        loop {
            match self.receiver.recv().await {
                Ok(change) => self.handle(change).await,
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(
                        "Stats listener missed {} change notifications, refreshing all counts",
                        skipped
                    );
                    self.handle(CollectionChange::User).await;
                    self.handle(CollectionChange::Course).await;
                }
                Err(RecvError::Closed) => break,
            }
        }

        tracing::info!("Stats listener stopped, change feed closed");
    }

    async fn handle(&self, change: CollectionChange) {
        let service = StatsService::new(&self.db);

        let result = match change {
            CollectionChange::User => service.refresh_user_counts().await,
            CollectionChange::Course => service.refresh_views().await,
        };

        if let Err(e) = result {
            tracing::error!("Failed to refresh stats after {:?} change: {}", change, e);
        }
    }
}

/// Runs a stats listener for the process lifetime, spawning a fresh one on the
/// same feed whenever the previous task panics.
pub fn supervise(db: DatabaseConnection, feed: ChangeFeed) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match StatsListener::new(db.clone(), &feed).spawn().await {
                Ok(()) => break,
                Err(e) => {
                    tracing::error!("Stats listener terminated unexpectedly: {}; restarting", e)
                }
            }
        }
    })
}

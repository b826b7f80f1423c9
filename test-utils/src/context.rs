use sea_orm::{
    sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection, EntityTrait,
    QueryOrder,
};

use crate::error::TestError;

/// Per-test environment backed by an in-memory SQLite database.
///
/// The connection is opened on first use and dropped with the context, so every
/// test starts from an empty schema.
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Returns the connection, opening `sqlite::memory:` on first call.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;
                Ok(&*self.db.insert(db))
            }
        }
    }

    /// Runs the CREATE TABLE statements collected by `TestBuilder`, in order.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Newest stats period as `(users, subscriptions, views)`.
    ///
    /// Periods are ordered by creation time with the id as tie breaker, the same
    /// order the aggregator writes to. Returns `None` before any period exists.
    pub async fn latest_stats(&mut self) -> Result<Option<(i64, i64, i64)>, TestError> {
        let db = self.database().await?;

        let latest = entity::prelude::Stats::find()
            .order_by_desc(entity::stats::Column::CreatedAt)
            .order_by_desc(entity::stats::Column::Id)
            .one(db)
            .await?;

        Ok(latest.map(|row| (row.users, row.subscriptions, row.views)))
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

//! In-process change notifications.
//!
//! Services publish a `CollectionChange` after every write to the user or course
//! tables. The `StatsListener` task consumes them to keep the current stats
//! period up to date.

pub mod feed;
pub mod stats_listener;

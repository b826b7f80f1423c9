//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a course with a single lecture attached.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((course, lecture))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_course_with_lecture(
    db: &DatabaseConnection,
) -> Result<(entity::course::Model, entity::lecture::Model), DbErr> {
    let course = crate::factory::course::create_course(db).await?;
    let lecture = crate::factory::lecture::create_lecture(db, course.id).await?;

    Ok((course, lecture))
}

/// Creates a subscribed user together with the payment that activated it.
///
/// The user's subscription status is `active` and the payment references the
/// same gateway subscription id.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, payment))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_subscriber_with_payment(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::payment::Model), DbErr> {
    let subscription_id = format!("sub_{}", next_id());

    let user = crate::factory::user::UserFactory::new(db)
        .subscription(subscription_id.clone(), "active")
        .build()
        .await?;
    let payment = crate::factory::payment::PaymentFactory::new(db, subscription_id)
        .build()
        .await?;

    Ok((user, payment))
}

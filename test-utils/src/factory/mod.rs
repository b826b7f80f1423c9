//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let (course, lecture) = factory::helpers::create_course_with_lecture(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("admin@example.com")
//!     .admin(true)
//!     .subscription("sub_123", "active")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `course` - Create course entities
//! - `lecture` - Create lecture entities
//! - `payment` - Create payment entities
//! - `stats` - Create stats entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod course;
pub mod helpers;
pub mod lecture;
pub mod payment;
pub mod stats;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use course::create_course;
pub use lecture::create_lecture;
pub use payment::create_payment;
pub use stats::create_stats;
pub use user::create_user;

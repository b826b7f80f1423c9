//! SeaORM entity models for the course bundler schema.

pub mod prelude;

pub mod course;
pub mod lecture;
pub mod payment;
pub mod playlist_item;
pub mod stats;
pub mod user;

//! Request and response bodies exchanged with the frontend.

pub mod api;
pub mod contact;
pub mod course;
pub mod stats;
pub mod subscription;
pub mod user;

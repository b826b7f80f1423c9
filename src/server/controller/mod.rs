pub mod admin;
pub mod auth;
pub mod contact;
pub mod course;
pub mod subscription;
pub mod user;

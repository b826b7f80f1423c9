pub mod auth;
pub mod token;

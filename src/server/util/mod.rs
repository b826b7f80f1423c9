pub mod frontend;
pub mod multipart;
pub mod password;
pub mod reset_token;
pub mod signature;

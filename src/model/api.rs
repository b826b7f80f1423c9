use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every failed request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub success: bool,
    pub message: String,
}

/// Body of a successful request that only carries a message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub success: bool,
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

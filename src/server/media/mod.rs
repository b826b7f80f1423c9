//! Media host seam for avatars, course posters and lecture videos.

pub mod cloudinary;

#[cfg(test)]
pub mod mock;

use async_trait::async_trait;

use crate::server::error::upstream::UpstreamError;

/// File received from a multipart upload.
#[derive(Debug, Clone)]
pub struct MediaFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Kind of asset, which decides the media host endpoint used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}

/// Asset stored on the media host.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedMedia {
    pub public_id: String,
    pub secure_url: String,
}

#[async_trait]
pub trait MediaHost: Send + Sync {
    async fn upload(&self, file: MediaFile, kind: MediaKind) -> Result<UploadedMedia, UpstreamError>;

    async fn destroy(&self, public_id: &str, kind: MediaKind) -> Result<(), UpstreamError>;
}

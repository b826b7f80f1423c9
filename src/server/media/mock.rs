use std::sync::Mutex;

use async_trait::async_trait;

use crate::server::{
    error::upstream::UpstreamError,
    media::{MediaFile, MediaHost, MediaKind, UploadedMedia},
};

/// In-process media host that records uploads and destroys.
pub struct MockMediaHost {
    uploads: Mutex<Vec<(String, MediaKind)>>,
    destroyed: Mutex<Vec<(String, MediaKind)>>,
}

impl MockMediaHost {
    pub fn new() -> Self {
        Self {
            uploads: Mutex::new(Vec::new()),
            destroyed: Mutex::new(Vec::new()),
        }
    }

    /// File names uploaded so far, with their kind.
    pub fn uploads(&self) -> Vec<(String, MediaKind)> {
        self.uploads.lock().unwrap().clone()
    }

    /// Public ids destroyed so far, with their kind.
    pub fn destroyed(&self) -> Vec<(String, MediaKind)> {
        self.destroyed.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaHost for MockMediaHost {
    async fn upload(&self, file: MediaFile, kind: MediaKind) -> Result<UploadedMedia, UpstreamError> {
        let mut uploads = self.uploads.lock().unwrap();
        uploads.push((file.file_name.clone(), kind));

        let public_id = format!("{}/{}", kind.as_str(), uploads.len());
        Ok(UploadedMedia {
            secure_url: format!("https://media.example.com/{}", public_id),
            public_id,
        })
    }

    async fn destroy(&self, public_id: &str, kind: MediaKind) -> Result<(), UpstreamError> {
        self.destroyed
            .lock()
            .unwrap()
            .push((public_id.to_string(), kind));
        Ok(())
    }
}

/// A small file suitable for upload calls in tests.
pub fn test_file(name: &str) -> MediaFile {
    MediaFile {
        file_name: name.to_string(),
        content_type: Some("image/png".to_string()),
        bytes: vec![0x89, 0x50, 0x4e, 0x47],
    }
}

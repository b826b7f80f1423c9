//! Cloudinary upload API client.
//!
//! Requests are signed by hashing the sorted request parameters followed by the
//! API secret with SHA-256.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::server::{
    error::upstream::UpstreamError,
    media::{MediaFile, MediaHost, MediaKind, UploadedMedia},
};

const CLOUDINARY_API_URL: &str = "https://api.cloudinary.com/v1_1";

pub struct CloudinaryClient {
    http: reqwest::Client,
    cloud_name: String,
    api_key: String,
    api_secret: String,
}

#[derive(Deserialize)]
struct UploadResponse {
    public_id: String,
    secure_url: String,
}

impl CloudinaryClient {
    pub fn new(
        http: reqwest::Client,
        cloud_name: String,
        api_key: String,
        api_secret: String,
    ) -> Self {
        Self {
            http,
            cloud_name,
            api_key,
            api_secret,
        }
    }

    fn endpoint(&self, kind: MediaKind, action: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            CLOUDINARY_API_URL,
            self.cloud_name,
            kind.as_str(),
            action
        )
    }

    /// Signs `params`, which must already be sorted by key.
    fn sign(&self, params: &[(&str, &str)]) -> String {
        let to_sign = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&");

        hex::encode(Sha256::digest(format!("{}{}", to_sign, self.api_secret)))
    }

    async fn send(&self, url: String, form: Form) -> Result<reqwest::Response, UpstreamError> {
        let response = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(UpstreamError::MediaRequest)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::MediaStatus { status, body });
        }

        Ok(response)
    }
}

#[async_trait]
impl MediaHost for CloudinaryClient {
    async fn upload(&self, file: MediaFile, kind: MediaKind) -> Result<UploadedMedia, UpstreamError> {
        let timestamp = Utc::now().timestamp().to_string();
        let signature = self.sign(&[("timestamp", &timestamp)]);

        let mut part = Part::bytes(file.bytes).file_name(file.file_name);
        if let Some(content_type) = file.content_type {
            part = part
                .mime_str(&content_type)
                .map_err(UpstreamError::MediaRequest)?;
        }

        let form = Form::new()
            .part("file", part)
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp)
            .text("signature", signature)
            .text("signature_algorithm", "sha256");

        let uploaded: UploadResponse = self
            .send(self.endpoint(kind, "upload"), form)
            .await?
            .json()
            .await
            .map_err(UpstreamError::MediaRequest)?;

        Ok(UploadedMedia {
            public_id: uploaded.public_id,
            secure_url: uploaded.secure_url,
        })
    }

    async fn destroy(&self, public_id: &str, kind: MediaKind) -> Result<(), UpstreamError> {
        let timestamp = Utc::now().timestamp().to_string();
        let signature = self.sign(&[("public_id", public_id), ("timestamp", &timestamp)]);

        let form = Form::new()
            .text("public_id", public_id.to_string())
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp)
            .text("signature", signature)
            .text("signature_algorithm", "sha256");

        self.send(self.endpoint(kind, "destroy"), form).await?;

        Ok(())
    }
}

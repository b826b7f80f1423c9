//! Reading multipart form submissions that carry text fields and one file.

use std::collections::HashMap;

use axum::extract::Multipart;

use crate::server::{error::AppError, media::MediaFile};

/// Name of the form field carrying the uploaded file.
const FILE_FIELD: &str = "file";

/// Text fields and the optional file of a multipart submission.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    file: Option<MediaFile>,
}

impl MultipartForm {
    /// Drains the multipart stream.
    ///
    /// # Returns
    /// - `Ok(MultipartForm)` - All fields read
    /// - `Err(AppError::BadRequest)` - Malformed multipart body
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if name == FILE_FIELD {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;

                if !bytes.is_empty() {
                    form.file = Some(MediaFile {
                        file_name,
                        content_type,
                        bytes: bytes.to_vec(),
                    });
                }
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    /// Returns a trimmed, non-empty text field.
    pub fn text(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// Returns the listed text fields in order, failing if any is missing.
    pub fn require<const N: usize>(&self, names: [&str; N]) -> Result<[String; N], AppError> {
        let values = names
            .iter()
            .map(|name| self.text(name).ok_or_else(missing_fields))
            .collect::<Result<Vec<_>, _>>()?;

        values.try_into().map_err(|_| missing_fields())
    }

    /// Takes the uploaded file, failing if none was sent.
    pub fn require_file(self) -> Result<MediaFile, AppError> {
        self.file.ok_or_else(missing_fields)
    }
}

fn missing_fields() -> AppError {
    AppError::BadRequest("Please enter all fields".to_string())
}

#[cfg(test)]
impl MultipartForm {
    pub fn with_text(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_string(), value.to_string());
        self
    }
}

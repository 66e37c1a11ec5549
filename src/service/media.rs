//! Client for the external media-upload host.
//!
//! Avatar and cover image bytes are forwarded to the configured host as a
//! multipart upload; the host answers with the hosted URL, which is all the
//! application stores.

use serde::Deserialize;

use crate::error::AppError;

#[derive(Deserialize)]
struct UploadResponse {
    url: String,
}

pub struct MediaService<'a> {
    http_client: &'a reqwest::Client,
    upload_url: &'a str,
}

impl<'a> MediaService<'a> {
    pub fn new(http_client: &'a reqwest::Client, upload_url: &'a str) -> Self {
        Self {
            http_client,
            upload_url,
        }
    }

    /// Uploads file bytes to the media host.
    ///
    /// # Arguments
    /// - `file_name` - Original file name, forwarded for the host's benefit
    /// - `bytes` - Raw file content
    ///
    /// # Returns
    /// - `Ok(String)` - URL of the hosted file
    /// - `Err(AppError::BadRequest)` - The host rejected the upload
    /// - `Err(AppError::ReqwestErr)` - The host was unreachable
    pub async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, AppError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http_client
            .post(self.upload_url)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::BadRequest(
                "Error while uploading file".to_string(),
            ));
        }

        let body: UploadResponse = response.json().await?;

        Ok(body.url)
    }
}

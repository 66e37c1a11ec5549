use serde::{Deserialize, Serialize};

/// Success envelope wrapping every JSON response body.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn new(status: u16, data: T, message: impl Into<String>) -> Self {
        Self {
            status,
            data,
            message: message.into(),
        }
    }
}

/// Error response body, paired with a matching HTTP status code.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDto {
    pub status_code: u16,
    pub message: String,
}

impl ErrorDto {
    pub fn new(status_code: u16, message: String) -> Self {
        Self {
            status_code,
            message,
        }
    }
}

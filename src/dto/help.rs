use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dto::user::UserSummaryDto;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHelpRequestDto {
    pub title: String,
    pub description: String,
    pub urgency_level: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHelpRequestDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub urgency_level: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateHelpStatusDto {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct AddCommentDto {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequestDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub urgency_level: String,
    pub status: String,
    pub created_by: UserSummaryDto,
    pub helpers: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Help request with helper summaries and comments, returned by the detail
/// endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequestDetailsDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub urgency_level: String,
    pub status: String,
    pub created_by: UserSummaryDto,
    pub helpers: Vec<UserSummaryDto>,
    pub comments: Vec<CommentDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CommentDto {
    pub user: i32,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpListQuery {
    pub urgency_level: Option<String>,
    pub status: Option<String>,
}

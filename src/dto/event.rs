use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dto::user::UserSummaryDto;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventDto {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    /// RFC 3339 timestamp, parsed and validated by the service.
    pub date: String,
    pub registration_deadline: Option<String>,
    pub max_attendees: Option<i32>,
    pub team_organizer: Option<i32>,
    pub visibility: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub max_attendees: Option<i32>,
    pub visibility: Option<String>,
}

/// Full event representation with creator and attendee ids embedded.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub date: DateTime<Utc>,
    pub registration_deadline: Option<DateTime<Utc>>,
    pub created_by: UserSummaryDto,
    pub team_organizer: Option<i32>,
    pub max_attendees: Option<i32>,
    pub status: String,
    pub visibility: String,
    pub attendees: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Trimmed event representation returned by list and search endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventListItemDto {
    pub id: i32,
    pub title: String,
    pub category: String,
    pub location: String,
    pub date: DateTime<Utc>,
    pub status: String,
    pub created_by: UserSummaryDto,
}

/// Cursor-paginated event list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventListDto {
    pub events: Vec<EventListItemDto>,
    pub next_cursor: Option<i32>,
}

/// Abbreviated event reference embedded in volunteer logs and history.
#[derive(Debug, Serialize)]
pub struct EventSummaryDto {
    pub id: i32,
    pub title: String,
    pub date: DateTime<Utc>,
    pub location: String,
}

/// Query parameters for the cursor-paginated list endpoint.
#[derive(Debug, Deserialize)]
pub struct EventListQuery {
    pub category: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: u64,
    pub cursor: Option<String>,
    #[serde(default = "default_order")]
    pub order: String,
}

fn default_limit() -> u64 {
    10
}

fn default_order() -> String {
    "asc".to_string()
}

/// Query parameters for the offset-paginated search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchEventsQuery {
    pub query: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub date: Option<String>,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_page() -> u64 {
    1
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPaginationDto {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// Search response. Deliberately a different contract from the list endpoint,
/// matching the API this backend replaces.
#[derive(Debug, Serialize)]
pub struct SearchEventsResponseDto {
    pub success: bool,
    pub data: Vec<EventListItemDto>,
    pub pagination: SearchPaginationDto,
}

/// Attendee-set view returned by attend/leave.
#[derive(Debug, Serialize)]
pub struct AttendanceDto {
    pub id: i32,
    pub attendees: Vec<i32>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dto::user::UserSummaryDto;

#[derive(Debug, Deserialize)]
pub struct CreateTeamDto {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub team_type: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTeamDto {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub team_type: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub team_type: String,
    pub created_by: UserSummaryDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Team with member summaries, returned by the detail endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDetailsDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub team_type: String,
    pub created_by: UserSummaryDto,
    pub members: Vec<UserSummaryDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Member-set view returned by join/leave.
#[derive(Debug, Serialize)]
pub struct TeamMembershipDto {
    pub id: i32,
    pub name: String,
    pub members: Vec<i32>,
}

#[derive(Debug, Deserialize)]
pub struct TeamListQuery {
    #[serde(rename = "type")]
    pub team_type: Option<String>,
}

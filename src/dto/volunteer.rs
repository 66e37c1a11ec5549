use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dto::{event::EventSummaryDto, user::UserSummaryDto};

#[derive(Debug, Deserialize)]
pub struct LogHoursDto {
    /// Event id, carried as a string field named `event` on the wire.
    pub event: String,
    pub hours: f64,
}

#[derive(Debug, Deserialize)]
pub struct VerifyLogDto {
    pub status: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerLogDto {
    pub id: i32,
    pub user: Option<UserSummaryDto>,
    pub event: Option<EventSummaryDto>,
    pub hours: f64,
    pub verified: bool,
    pub peer_verifications: Vec<PeerVerificationDto>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct PeerVerificationDto {
    pub user: i32,
    pub status: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntryDto {
    pub user: i32,
    pub total_hours: f64,
}

#[derive(Debug, Serialize)]
pub struct CertificatesDto {
    pub hours: f64,
    pub certificates: Vec<String>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dto::event::EventSummaryDto;

/// Full user profile, secrets excluded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub avatar: Option<String>,
    pub cover_image: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub causes_supported: Vec<String>,
    pub total_hours: f64,
    pub points: i32,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Abbreviated user reference embedded in other resources.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryDto {
    pub id: i32,
    pub full_name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserDto {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub causes_supported: Option<Vec<String>>,
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginDto {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: String,
}

/// Login response: the user plus the freshly issued token pair.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseDto {
    pub user: UserDto,
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenDto {
    pub refresh_token: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairDto {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordDto {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Debug, Deserialize)]
pub struct ForgotPasswordDto {
    pub email: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetTokenDto {
    pub reset_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordDto {
    pub reset_token: String,
    pub new_password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountDto {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub causes_supported: Option<Vec<String>>,
    pub role: Option<String>,
}

/// Query parameters for user search. All filters optional; `hours` keeps the
/// lenient string form of the original API and is ignored when unparseable.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSearchQuery {
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub skills: Option<String>,
    pub causes: Option<String>,
    pub hours: Option<String>,
}

/// One entry of a user's volunteer history.
#[derive(Debug, Serialize)]
pub struct VolunteerHistoryEntryDto {
    pub event: Option<EventSummaryDto>,
    pub hours: f64,
    pub verified: bool,
}

//! User domain models and parameters.
//!
//! Provides the domain model for application users, credential material included,
//! with parameter types for account creation, profile updates, and search.

use chrono::{DateTime, Utc};

use crate::dto::user::{UserDto, UserSummaryDto};

/// Application role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// User account with profile, counters, and credential material.
///
/// Carries the password hash and persisted tokens so the service layer can
/// verify credentials; `into_dto` strips all secrets before anything reaches
/// the API boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    pub avatar: Option<String>,
    pub cover_image: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub causes_supported: Vec<String>,
    pub total_hours: f64,
    pub points: i32,
    pub role: Role,
    pub refresh_token: Option<String>,
    pub reset_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The JSON-encoded skill and cause columns are decoded here; undecodable
    /// values collapse to empty lists rather than failing the whole read.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let skills = serde_json::from_str(&entity.skills).unwrap_or_default();
        let causes_supported = serde_json::from_str(&entity.causes_supported).unwrap_or_default();
        let role = Role::parse(&entity.role).unwrap_or(Role::User);

        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            full_name: entity.full_name,
            password_hash: entity.password_hash,
            avatar: entity.avatar,
            cover_image: entity.cover_image,
            bio: entity.bio,
            skills,
            causes_supported,
            total_hours: entity.total_hours,
            points: entity.points,
            role,
            refresh_token: entity.refresh_token,
            reset_token: entity.reset_token,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// Password hash and persisted tokens never cross this boundary.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            full_name: self.full_name,
            avatar: self.avatar,
            cover_image: self.cover_image,
            bio: self.bio,
            skills: self.skills,
            causes_supported: self.causes_supported,
            total_hours: self.total_hours,
            points: self.points,
            role: self.role.as_str().to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Abbreviated reference for embedding into other resources.
    pub fn summary(&self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            full_name: self.full_name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Parameters for creating a new user at registration.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    /// Stored lowercased.
    pub username: String,
    /// Stored lowercased.
    pub email: String,
    pub full_name: String,
    /// Already hashed; the repository never sees a plaintext password.
    pub password_hash: String,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub causes_supported: Vec<String>,
    pub role: Role,
}

/// Parameters for updating account details.
#[derive(Debug, Clone)]
pub struct UpdateAccountParams {
    pub full_name: String,
    pub email: String,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub causes_supported: Vec<String>,
    pub role: Option<Role>,
}

/// Filters for the user search endpoint. Empty filter lists are no-ops.
#[derive(Debug, Clone, Default)]
pub struct UserSearchFilter {
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub skills: Vec<String>,
    pub causes: Vec<String>,
    pub min_hours: Option<f64>,
}

//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("custom")
///     .full_name("Custom User")
///     .total_hours(42.0)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: String,
    full_name: String,
    password_hash: String,
    skills: Vec<String>,
    causes_supported: Vec<String>,
    total_hours: f64,
    role: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user{id}"` where id is auto-incremented
    /// - email: `"user{id}@example.com"`
    /// - full_name: `"User {id}"`
    /// - password_hash: a fixed placeholder (not a valid argon2 hash)
    /// - role: `"user"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            email: format!("user{}@example.com", id),
            full_name: format!("User {}", id),
            password_hash: "hashed-password".to_string(),
            skills: Vec::new(),
            causes_supported: Vec::new(),
            total_hours: 0.0,
            role: "user".to_string(),
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn skills(mut self, skills: Vec<&str>) -> Self {
        self.skills = skills.into_iter().map(str::to_string).collect();
        self
    }

    pub fn causes_supported(mut self, causes: Vec<&str>) -> Self {
        self.causes_supported = causes.into_iter().map(str::to_string).collect();
        self
    }

    pub fn total_hours(mut self, total_hours: f64) -> Self {
        self.total_hours = total_hours;
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            full_name: ActiveValue::Set(self.full_name),
            password_hash: ActiveValue::Set(self.password_hash),
            avatar: ActiveValue::Set(None),
            cover_image: ActiveValue::Set(None),
            bio: ActiveValue::Set(None),
            skills: ActiveValue::Set(encode(&self.skills)),
            causes_supported: ActiveValue::Set(encode(&self.causes_supported)),
            total_hours: ActiveValue::Set(self.total_hours),
            points: ActiveValue::Set(0),
            role: ActiveValue::Set(self.role),
            refresh_token: ActiveValue::Set(None),
            reset_token: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

fn encode(values: &[String]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles account creation, credential lookups, token persistence, profile updates,
//! and search, with conversion between entity models and the domain model at the
//! infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::user::{CreateUserParams, UpdateAccountParams, User, UserSearchFilter};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and querying user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user from registration parameters.
    ///
    /// The password arrives pre-hashed; skill and cause lists are JSON-encoded
    /// into their text columns. Uniqueness of username and email is enforced by
    /// the schema, so a duplicate insert surfaces as `DbErr`.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error during insert (including unique violations)
    pub async fn create(&self, param: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            full_name: ActiveValue::Set(param.full_name),
            password_hash: ActiveValue::Set(param.password_hash),
            avatar: ActiveValue::Set(None),
            cover_image: ActiveValue::Set(None),
            bio: ActiveValue::Set(param.bio),
            skills: ActiveValue::Set(encode_list(&param.skills)),
            causes_supported: ActiveValue::Set(encode_list(&param.causes_supported)),
            total_hours: ActiveValue::Set(0.0),
            points: ActiveValue::Set(0),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            refresh_token: ActiveValue::Set(None),
            reset_token: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user matching either the given username or email.
    ///
    /// Used by login and by the registration duplicate check. Comparison values
    /// are expected to be lowercased by the caller.
    pub async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(
                Condition::any()
                    .add(entity::user::Column::Username.eq(username))
                    .add(entity::user::Column::Email.eq(email)),
            )
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Fetches users by id, preserving no particular order.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<User>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Persists or clears the user's refresh token.
    ///
    /// Overwriting the stored token is what invalidates previously issued
    /// refresh tokens; logout clears it entirely.
    pub async fn set_refresh_token(
        &self,
        user_id: i32,
        refresh_token: Option<&str>,
    ) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::RefreshToken,
                sea_orm::sea_query::Expr::value(refresh_token.map(str::to_string)),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Persists or clears the user's single-use password reset token.
    pub async fn set_reset_token(
        &self,
        user_id: i32,
        reset_token: Option<&str>,
    ) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::ResetToken,
                sea_orm::sea_query::Expr::value(reset_token.map(str::to_string)),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Replaces the stored password hash.
    pub async fn set_password_hash(&self, user_id: i32, hash: &str) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::PasswordHash,
                sea_orm::sea_query::Expr::value(hash.to_string()),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Stores the hosted avatar URL for the user.
    pub async fn set_avatar(&self, user_id: i32, url: &str) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::Avatar,
                sea_orm::sea_query::Expr::value(Some(url.to_string())),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Stores the hosted cover image URL for the user.
    pub async fn set_cover_image(&self, user_id: i32, url: &str) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::CoverImage,
                sea_orm::sea_query::Expr::value(Some(url.to_string())),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Updates account details for the user.
    ///
    /// Replaces name, email, bio, and the skill/cause lists; the role is only
    /// written when provided.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with that id
    pub async fn update_account(
        &self,
        user_id: i32,
        param: UpdateAccountParams,
    ) -> Result<User, DbErr> {
        let user = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User {} not found", user_id)))?;

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.full_name = ActiveValue::Set(param.full_name);
        active_model.email = ActiveValue::Set(param.email);
        active_model.bio = ActiveValue::Set(param.bio);
        active_model.skills = ActiveValue::Set(encode_list(&param.skills));
        active_model.causes_supported = ActiveValue::Set(encode_list(&param.causes_supported));
        if let Some(role) = param.role {
            active_model.role = ActiveValue::Set(role.as_str().to_string());
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(User::from_entity(entity))
    }

    /// Searches users by profile filters.
    ///
    /// Name filters are substring matches; skill and cause filters match users
    /// carrying any of the requested values (the JSON text columns are probed
    /// for the quoted value); `min_hours` lower-bounds the aggregate counter.
    pub async fn search(&self, filter: UserSearchFilter) -> Result<Vec<User>, DbErr> {
        let mut condition = Condition::all();

        if let Some(full_name) = filter.full_name {
            condition = condition.add(entity::user::Column::FullName.contains(full_name));
        }
        if let Some(username) = filter.username {
            condition = condition.add(entity::user::Column::Username.contains(username));
        }
        if !filter.skills.is_empty() {
            let mut any = Condition::any();
            for skill in &filter.skills {
                any = any.add(entity::user::Column::Skills.contains(format!("\"{}\"", skill)));
            }
            condition = condition.add(any);
        }
        if !filter.causes.is_empty() {
            let mut any = Condition::any();
            for cause in &filter.causes {
                any = any
                    .add(entity::user::Column::CausesSupported.contains(format!("\"{}\"", cause)));
            }
            condition = condition.add(any);
        }
        if let Some(min_hours) = filter.min_hours {
            condition = condition.add(entity::user::Column::TotalHours.gte(min_hours));
        }

        let entities = entity::prelude::User::find()
            .filter(condition)
            .order_by_asc(entity::user::Column::FullName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }
}

fn encode_list(values: &[String]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
}

//! Volunteer log factory for creating test log entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an unverified volunteer log.
pub async fn create_volunteer_log(
    db: &DatabaseConnection,
    user_id: i32,
    event_id: i32,
    hours: f64,
) -> Result<entity::volunteer_log::Model, DbErr> {
    let now = Utc::now();
    entity::volunteer_log::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        event_id: ActiveValue::Set(event_id),
        hours: ActiveValue::Set(hours),
        verified: ActiveValue::Set(false),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a verified volunteer log.
pub async fn create_verified_log(
    db: &DatabaseConnection,
    user_id: i32,
    event_id: i32,
    hours: f64,
) -> Result<entity::volunteer_log::Model, DbErr> {
    let now = Utc::now();
    entity::volunteer_log::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        event_id: ActiveValue::Set(event_id),
        hours: ActiveValue::Set(hours),
        verified: ActiveValue::Set(true),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

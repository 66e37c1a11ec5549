//! Help request factory for creating test help request entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct HelpRequestFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: String,
    urgency_level: String,
    status: String,
    created_by: i32,
}

impl<'a> HelpRequestFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, created_by: i32) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Help request {}", id),
            description: format!("Description for help request {}", id),
            urgency_level: "medium".to_string(),
            status: "open".to_string(),
            created_by,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn urgency_level(mut self, urgency_level: impl Into<String>) -> Self {
        self.urgency_level = urgency_level.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::help_request::Model, DbErr> {
        let now = Utc::now();
        entity::help_request::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            urgency_level: ActiveValue::Set(self.urgency_level),
            status: ActiveValue::Set(self.status),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a help request with default values for the given creator.
pub async fn create_help_request(
    db: &DatabaseConnection,
    created_by: i32,
) -> Result<entity::help_request::Model, DbErr> {
    HelpRequestFactory::new(db, created_by).build().await
}

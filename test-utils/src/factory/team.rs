//! Team factory for creating test team entities.
//!
//! The factory inserts the bare team row; membership rows are the caller's
//! concern, unlike the application repository which enrolls the creator.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    team_type: String,
    created_by: i32,
}

impl<'a> TeamFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, created_by: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Team {}", id),
            description: None,
            team_type: "public".to_string(),
            created_by,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn team_type(mut self, team_type: impl Into<String>) -> Self {
        self.team_type = team_type.into();
        self
    }

    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        let now = Utc::now();
        entity::team::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            team_type: ActiveValue::Set(self.team_type),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with default values for the given creator.
pub async fn create_team(
    db: &DatabaseConnection,
    created_by: i32,
) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db, created_by).build().await
}

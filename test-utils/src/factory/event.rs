//! Event factory for creating test event entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
///
/// Defaults to an upcoming public event dated one day from now.
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: String,
    category: String,
    location: String,
    date: DateTime<Utc>,
    registration_deadline: Option<DateTime<Utc>>,
    created_by: i32,
    team_organizer: Option<i32>,
    max_attendees: Option<i32>,
    status: String,
    visibility: String,
}

impl<'a> EventFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, created_by: i32) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Event {}", id),
            description: format!("Description for event {}", id),
            category: "community".to_string(),
            location: "Springfield".to_string(),
            date: Utc::now() + Duration::days(1),
            registration_deadline: None,
            created_by,
            team_organizer: None,
            max_attendees: None,
            status: "upcoming".to_string(),
            visibility: "public".to_string(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn registration_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.registration_deadline = Some(deadline);
        self
    }

    pub fn team_organizer(mut self, team_id: i32) -> Self {
        self.team_organizer = Some(team_id);
        self
    }

    pub fn max_attendees(mut self, max_attendees: i32) -> Self {
        self.max_attendees = Some(max_attendees);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the event entity into the database.
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let now = Utc::now();
        entity::event::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            category: ActiveValue::Set(self.category),
            location: ActiveValue::Set(self.location),
            date: ActiveValue::Set(self.date),
            registration_deadline: ActiveValue::Set(self.registration_deadline),
            created_by: ActiveValue::Set(self.created_by),
            team_organizer: ActiveValue::Set(self.team_organizer),
            max_attendees: ActiveValue::Set(self.max_attendees),
            status: ActiveValue::Set(self.status),
            visibility: ActiveValue::Set(self.visibility),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values for the given creator.
pub async fn create_event(
    db: &DatabaseConnection,
    created_by: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, created_by).build().await
}

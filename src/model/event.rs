//! Event domain types and parameters.

use chrono::{DateTime, Utc};

/// Lifecycle status of an event, a pure function of its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "upcoming" => Some(EventStatus::Upcoming),
            "ongoing" => Some(EventStatus::Ongoing),
            "completed" => Some(EventStatus::Completed),
            _ => None,
        }
    }

    /// Derives the status from the event date, recomputed on every write.
    ///
    /// A date in the past is completed even when it falls on the current
    /// calendar day; the ongoing state covers the remainder of that day.
    pub fn for_date(date: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if date < now {
            EventStatus::Completed
        } else if date.date_naive() == now.date_naive() {
            EventStatus::Ongoing
        } else {
            EventStatus::Upcoming
        }
    }
}

/// Whether an event is publicly listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "public" => Some(Visibility::Public),
            "private" => Some(Visibility::Private),
            _ => None,
        }
    }
}

/// Parameters for creating an event, validated by the service beforehand.
#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub title: String,
    pub description: String,
    /// Stored lowercased.
    pub category: String,
    pub location: String,
    pub date: DateTime<Utc>,
    pub registration_deadline: Option<DateTime<Utc>>,
    pub created_by: i32,
    pub team_organizer: Option<i32>,
    pub max_attendees: Option<i32>,
    pub status: EventStatus,
    pub visibility: Visibility,
}

/// Parameters for a partial event update. Only provided fields are written.
#[derive(Debug, Clone, Default)]
pub struct UpdateEventParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub max_attendees: Option<i32>,
    pub status: Option<EventStatus>,
    pub visibility: Option<Visibility>,
}

/// Filter and cursor for the event list endpoint.
#[derive(Debug, Clone, Default)]
pub struct EventListFilter {
    pub category: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub cursor: Option<i32>,
    pub limit: u64,
    pub descending: bool,
}

/// Filter and offset pagination for the event search endpoint.
#[derive(Debug, Clone, Default)]
pub struct EventSearchFilter {
    pub query: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub date_from: Option<DateTime<Utc>>,
    /// One-indexed page number.
    pub page: u64,
    pub limit: u64,
}

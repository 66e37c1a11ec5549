use crate::{
    data::event::EventRepository,
    model::event::{
        CreateEventParams, EventListFilter, EventSearchFilter, EventStatus, UpdateEventParams,
        Visibility,
    },
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod attendees;
mod create;
mod list;
mod search;
mod update;

fn create_params(created_by: i32) -> CreateEventParams {
    CreateEventParams {
        title: "Beach Cleanup".to_string(),
        description: "Cleaning the north shore".to_string(),
        category: "environment".to_string(),
        location: "North Shore".to_string(),
        date: Utc::now() + Duration::days(2),
        registration_deadline: None,
        created_by,
        team_organizer: None,
        max_attendees: None,
        status: EventStatus::Upcoming,
        visibility: Visibility::Public,
    }
}

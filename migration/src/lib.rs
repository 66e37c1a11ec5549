pub use sea_orm_migration::prelude::*;

mod m20260315_000001_create_user_table;
mod m20260315_000002_create_team_table;
mod m20260315_000003_create_team_member_table;
mod m20260315_000004_create_event_table;
mod m20260315_000005_create_event_attendee_table;
mod m20260315_000006_create_event_comment_table;
mod m20260316_000007_create_help_request_table;
mod m20260316_000008_create_help_request_helper_table;
mod m20260316_000009_create_help_request_comment_table;
mod m20260317_000010_create_volunteer_log_table;
mod m20260317_000011_create_peer_verification_table;
mod m20260318_000012_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260315_000001_create_user_table::Migration),
            Box::new(m20260315_000002_create_team_table::Migration),
            Box::new(m20260315_000003_create_team_member_table::Migration),
            Box::new(m20260315_000004_create_event_table::Migration),
            Box::new(m20260315_000005_create_event_attendee_table::Migration),
            Box::new(m20260315_000006_create_event_comment_table::Migration),
            Box::new(m20260316_000007_create_help_request_table::Migration),
            Box::new(m20260316_000008_create_help_request_helper_table::Migration),
            Box::new(m20260316_000009_create_help_request_comment_table::Migration),
            Box::new(m20260317_000010_create_volunteer_log_table::Migration),
            Box::new(m20260317_000011_create_peer_verification_table::Migration),
            Box::new(m20260318_000012_create_notification_table::Migration),
        ]
    }
}

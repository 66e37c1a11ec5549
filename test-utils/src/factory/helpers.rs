//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and an event owned by that user.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, event))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_creator(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::event::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let event = crate::factory::event::create_event(db, user.id).await?;

    Ok((user, event))
}

/// Creates a volunteer log with its full dependency chain.
///
/// Creates a user, an event owned by that user, and an unverified log of the
/// given hours submitted by the same user.
///
/// # Returns
/// - `Ok((user, event, log))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_log_with_dependencies(
    db: &DatabaseConnection,
    hours: f64,
) -> Result<
    (
        entity::user::Model,
        entity::event::Model,
        entity::volunteer_log::Model,
    ),
    DbErr,
> {
    let (user, event) = create_event_with_creator(db).await?;
    let log =
        crate::factory::volunteer_log::create_volunteer_log(db, user.id, event.id, hours).await?;

    Ok((user, event, log))
}

//! Volunteer log repository.
//!
//! Persistence for hour claims and their peer verdicts. The verification flag
//! is only ever raised here, never lowered; the service layer decides when the
//! approval threshold is met.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::volunteer_log::{LeaderboardEntry, VerificationStatus};

pub struct VolunteerLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VolunteerLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new hours claim, unverified and with no verdicts.
    pub async fn create(
        &self,
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
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::volunteer_log::Model>, DbErr> {
        entity::prelude::VolunteerLog::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets all logs, newest first.
    pub async fn get_all(&self) -> Result<Vec<entity::volunteer_log::Model>, DbErr> {
        entity::prelude::VolunteerLog::find()
            .order_by_desc(entity::volunteer_log::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Gets one user's logs, newest first.
    pub async fn get_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::volunteer_log::Model>, DbErr> {
        entity::prelude::VolunteerLog::find()
            .filter(entity::volunteer_log::Column::UserId.eq(user_id))
            .order_by_desc(entity::volunteer_log::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Gets the verdicts recorded against a log, oldest first.
    pub async fn verifications_for(
        &self,
        log_id: i32,
    ) -> Result<Vec<entity::peer_verification::Model>, DbErr> {
        entity::prelude::PeerVerification::find()
            .filter(entity::peer_verification::Column::LogId.eq(log_id))
            .order_by_asc(entity::peer_verification::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Checks whether a peer has already submitted a verdict on a log.
    ///
    /// First verdict per identity wins; there is no update-in-place path.
    pub async fn has_verification_from(&self, log_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::PeerVerification::find()
            .filter(entity::peer_verification::Column::LogId.eq(log_id))
            .filter(entity::peer_verification::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Appends a peer verdict to a log.
    ///
    /// The unique (log_id, user_id) index backs the one-verdict-per-peer rule,
    /// so a racing duplicate fails at the store instead of slipping through.
    pub async fn add_verification(
        &self,
        log_id: i32,
        user_id: i32,
        status: VerificationStatus,
    ) -> Result<entity::peer_verification::Model, DbErr> {
        entity::peer_verification::ActiveModel {
            log_id: ActiveValue::Set(log_id),
            user_id: ActiveValue::Set(user_id),
            status: ActiveValue::Set(status.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Counts `approved` verdicts on a log.
    pub async fn count_approvals(&self, log_id: i32) -> Result<u64, DbErr> {
        entity::prelude::PeerVerification::find()
            .filter(entity::peer_verification::Column::LogId.eq(log_id))
            .filter(
                entity::peer_verification::Column::Status
                    .eq(VerificationStatus::Approved.as_str()),
            )
            .count(self.db)
            .await
    }

    /// Marks a log as verified. One-directional; nothing unsets it.
    pub async fn set_verified(&self, log_id: i32) -> Result<(), DbErr> {
        entity::prelude::VolunteerLog::update_many()
            .filter(entity::volunteer_log::Column::Id.eq(log_id))
            .col_expr(
                entity::volunteer_log::Column::Verified,
                sea_orm::sea_query::Expr::value(true),
            )
            .col_expr(
                entity::volunteer_log::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Aggregates verified hours per user, highest totals first.
    ///
    /// # Arguments
    /// - `limit`: Maximum number of entries to return
    pub async fn leaderboard(&self, limit: u64) -> Result<Vec<LeaderboardEntry>, DbErr> {
        let rows: Vec<(i32, f64)> = entity::prelude::VolunteerLog::find()
            .select_only()
            .column(entity::volunteer_log::Column::UserId)
            .column_as(entity::volunteer_log::Column::Hours.sum(), "total_hours")
            .filter(entity::volunteer_log::Column::Verified.eq(true))
            .group_by(entity::volunteer_log::Column::UserId)
            .order_by_desc(entity::volunteer_log::Column::Hours.sum())
            .limit(limit)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(user_id, total_hours)| LeaderboardEntry {
                user_id,
                total_hours,
            })
            .collect())
    }

    /// Sums one user's verified hours.
    pub async fn total_verified_hours(&self, user_id: i32) -> Result<f64, DbErr> {
        let logs = entity::prelude::VolunteerLog::find()
            .filter(entity::volunteer_log::Column::UserId.eq(user_id))
            .filter(entity::volunteer_log::Column::Verified.eq(true))
            .all(self.db)
            .await?;

        Ok(logs.into_iter().map(|log| log.hours).sum())
    }
}

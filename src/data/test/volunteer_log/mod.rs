use crate::{
    data::volunteer_log::VolunteerLogRepository, model::volunteer_log::VerificationStatus,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add_verification;
mod create;
mod leaderboard;
mod total_verified_hours;

use crate::{
    data::team::TeamRepository,
    model::team::{CreateTeamParams, TeamType, UpdateTeamParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod membership;
mod update;

fn create_params(name: &str, created_by: i32) -> CreateTeamParams {
    CreateTeamParams {
        name: name.to_string(),
        description: None,
        team_type: TeamType::Public,
        created_by,
    }
}

use crate::{
    data::help_request::HelpRequestRepository,
    model::help_request::{
        CreateHelpRequestParams, HelpRequestFilter, UpdateHelpRequestParams, UrgencyLevel,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod comments;
mod create;
mod get_all;
mod helpers;
mod update;

use crate::{
    data::user::UserRepository,
    model::user::{CreateUserParams, Role, UpdateAccountParams, UserSearchFilter},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_username_or_email;
mod search;
mod set_refresh_token;
mod update_account;

fn create_params(username: &str, email: &str) -> CreateUserParams {
    CreateUserParams {
        username: username.to_string(),
        email: email.to_string(),
        full_name: "Test User".to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
        bio: None,
        skills: Vec::new(),
        causes_supported: Vec::new(),
        role: Role::User,
    }
}

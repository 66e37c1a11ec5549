use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::{
    controller::{event, help, team, user, volunteer},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1/users", user_routes())
        .nest("/api/v1/events", event_routes())
        .nest("/api/v1/teams", team_routes())
        .nest("/api/v1/helps", help_routes())
        .nest("/api/v1/volunteer", volunteer_routes())
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(user::register))
        .route("/login", post(user::login))
        .route("/forgot-password", post(user::forgot_password))
        .route("/reset-password", post(user::reset_password))
        .route("/logout", post(user::logout))
        .route("/refresh-token", post(user::refresh_token))
        .route("/change-password", post(user::change_password))
        .route("/current-user", get(user::current_user))
        .route("/update-account", patch(user::update_account))
        .route("/avatar", patch(user::update_avatar))
        .route("/cover-image", patch(user::update_cover_image))
        .route("/users/search", get(user::search_users))
        .route("/users/{id}", get(user::get_user_by_id))
        .route("/users/{id}/history", get(user::volunteer_history))
}

fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(event::get_all_events).post(event::create_event))
        .route("/search", get(event::search_events))
        .route(
            "/{eventId}",
            get(event::get_event_by_id)
                .patch(event::update_event)
                .delete(event::delete_event),
        )
        .route("/{eventId}/attend", post(event::attend_event))
        .route("/{eventId}/leave", delete(event::leave_event))
}

fn team_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(team::get_all_teams).post(team::create_team))
        .route("/my-teams", get(team::get_user_teams))
        .route(
            "/{id}",
            get(team::get_team_by_id)
                .patch(team::update_team)
                .delete(team::delete_team),
        )
        .route("/{id}/join", post(team::join_team))
        .route("/{id}/leave", post(team::leave_team))
}

fn help_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(help::get_all_help_requests).post(help::create_help_request),
        )
        .route(
            "/{id}",
            get(help::get_help_request_by_id)
                .patch(help::update_help_request)
                .delete(help::delete_help_request),
        )
        .route("/{id}/join", post(help::join_help_request))
        .route("/{id}/leave", post(help::leave_help_request))
        .route("/{id}/comments", post(help::add_comment))
        .route("/{id}/status", patch(help::update_help_request_status))
}

fn volunteer_routes() -> Router<AppState> {
    Router::new()
        .route("/log", post(volunteer::log_volunteer_hours))
        .route("/logs", get(volunteer::get_all_volunteer_logs))
        .route("/my-logs", get(volunteer::get_user_volunteer_logs))
        .route("/log/{logId}", get(volunteer::get_volunteer_log))
        .route("/verify/{logId}", post(volunteer::verify_volunteer_log))
        .route("/leaderboard", get(volunteer::get_leaderboard))
        .route("/certificates", get(volunteer::get_certificates))
}

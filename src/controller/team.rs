use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::ApiResponse,
        team::{CreateTeamDto, TeamListQuery, UpdateTeamDto},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    service::team::TeamService,
    state::AppState,
    util::parse::parse_id,
};

/// POST /api/v1/teams
pub async fn create_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;

    let team = TeamService::new(&state.db).create(user.id, dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(201, team, "Team created successfully")),
    ))
}

/// GET /api/v1/teams
pub async fn get_all_teams(
    State(state): State<AppState>,
    Query(query): Query<TeamListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let teams = TeamService::new(&state.db).get_all(query.team_type).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(200, teams, "Teams retrieved successfully")),
    ))
}

/// GET /api/v1/teams/my-teams
pub async fn get_user_teams(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;

    let teams = TeamService::new(&state.db).my_teams(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            200,
            teams,
            "User's teams retrieved successfully",
        )),
    ))
}

/// GET /api/v1/teams/{id}
pub async fn get_team_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let team_id = parse_id(&id, "team")?;

    let team = TeamService::new(&state.db).get(team_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(200, team, "Team retrieved successfully")),
    ))
}

/// PATCH /api/v1/teams/{id}
pub async fn update_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(dto): Json<UpdateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;
    let team_id = parse_id(&id, "team")?;

    let team = TeamService::new(&state.db).update(team_id, user.id, dto).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(200, team, "Team updated successfully")),
    ))
}

/// DELETE /api/v1/teams/{id}
pub async fn delete_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;
    let team_id = parse_id(&id, "team")?;

    let deleted = TeamService::new(&state.db).delete(team_id, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            200,
            serde_json::json!({ "deletedTeam": deleted }),
            "Team deleted successfully",
        )),
    ))
}

/// POST /api/v1/teams/{id}/join
pub async fn join_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;
    let team_id = parse_id(&id, "team")?;

    let team = TeamService::new(&state.db).join(team_id, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(200, team, "Joined the team successfully")),
    ))
}

/// POST /api/v1/teams/{id}/leave
pub async fn leave_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;
    let team_id = parse_id(&id, "team")?;

    let team = TeamService::new(&state.db).leave(team_id, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(200, team, "Left the team successfully")),
    ))
}

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::ApiResponse,
        volunteer::{LogHoursDto, VerifyLogDto},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    service::volunteer::VolunteerService,
    state::AppState,
    util::parse::parse_id,
};

/// POST /api/v1/volunteer/log
pub async fn log_volunteer_hours(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<LogHoursDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;

    let log = VolunteerService::new(&state.db).log_hours(user.id, dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            201,
            log,
            "Volunteer hours logged successfully",
        )),
    ))
}

/// GET /api/v1/volunteer/logs
pub async fn get_all_volunteer_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state).require(&headers).await?;

    let logs = VolunteerService::new(&state.db).all_logs().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            200,
            logs,
            "Volunteer logs fetched successfully",
        )),
    ))
}

/// GET /api/v1/volunteer/my-logs
pub async fn get_user_volunteer_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;

    let logs = VolunteerService::new(&state.db).user_logs(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            200,
            logs,
            "User volunteer logs fetched successfully",
        )),
    ))
}

/// GET /api/v1/volunteer/log/{logId}
pub async fn get_volunteer_log(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(log_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state).require(&headers).await?;
    let log_id = parse_id(&log_id, "log")?;

    let log = VolunteerService::new(&state.db).get_log(log_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            200,
            log,
            "Volunteer log details fetched successfully",
        )),
    ))
}

/// POST /api/v1/volunteer/verify/{logId}
pub async fn verify_volunteer_log(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(log_id): Path<String>,
    Json(dto): Json<VerifyLogDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;
    let log_id = parse_id(&log_id, "log")?;

    let log = VolunteerService::new(&state.db)
        .verify(log_id, user.id, &dto.status)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            200,
            log,
            "Volunteer log verified successfully",
        )),
    ))
}

/// GET /api/v1/volunteer/leaderboard
pub async fn get_leaderboard(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let leaderboard = VolunteerService::new(&state.db).leaderboard().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            200,
            leaderboard,
            "Leaderboard fetched successfully",
        )),
    ))
}

/// GET /api/v1/volunteer/certificates
pub async fn get_certificates(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;

    let certificates = VolunteerService::new(&state.db).certificates(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            200,
            certificates,
            "Certificates fetched successfully",
        )),
    ))
}

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::ApiResponse,
        help::{
            AddCommentDto, CreateHelpRequestDto, HelpListQuery, UpdateHelpRequestDto,
            UpdateHelpStatusDto,
        },
    },
    error::AppError,
    middleware::auth::AuthGuard,
    service::help_request::HelpRequestService,
    state::AppState,
    util::parse::parse_id,
};

/// GET /api/v1/helps
pub async fn get_all_help_requests(
    State(state): State<AppState>,
    Query(query): Query<HelpListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let requests = HelpRequestService::new(&state.db).get_all(query).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            200,
            requests,
            "Help requests retrieved successfully",
        )),
    ))
}

/// POST /api/v1/helps
pub async fn create_help_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateHelpRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;

    let request = HelpRequestService::new(&state.db).create(user.id, dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            201,
            request,
            "Help request created successfully",
        )),
    ))
}

/// GET /api/v1/helps/{id}
pub async fn get_help_request_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Help Request")?;

    let request = HelpRequestService::new(&state.db).get(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            200,
            request,
            "Help request retrieved successfully",
        )),
    ))
}

/// PATCH /api/v1/helps/{id}
pub async fn update_help_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(dto): Json<UpdateHelpRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;
    let id = parse_id(&id, "Help Request")?;

    let request = HelpRequestService::new(&state.db)
        .update(id, user.id, dto)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            200,
            request,
            "Help request updated successfully",
        )),
    ))
}

/// DELETE /api/v1/helps/{id}
pub async fn delete_help_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;
    let id = parse_id(&id, "Help Request")?;

    HelpRequestService::new(&state.db).delete(id, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            200,
            serde_json::Value::Null,
            "Help request deleted successfully",
        )),
    ))
}

/// POST /api/v1/helps/{id}/join
pub async fn join_help_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;
    let id = parse_id(&id, "Help Request")?;

    let request = HelpRequestService::new(&state.db).join(id, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            200,
            request,
            "Successfully joined help request",
        )),
    ))
}

/// POST /api/v1/helps/{id}/leave
pub async fn leave_help_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;
    let id = parse_id(&id, "Help Request")?;

    let request = HelpRequestService::new(&state.db).leave(id, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            200,
            request,
            "Successfully left help request",
        )),
    ))
}

/// POST /api/v1/helps/{id}/comments
pub async fn add_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(dto): Json<AddCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;
    let id = parse_id(&id, "Help Request")?;

    let request = HelpRequestService::new(&state.db)
        .add_comment(id, user.id, &dto.text)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(200, request, "Comment added successfully")),
    ))
}

/// PATCH /api/v1/helps/{id}/status
pub async fn update_help_request_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(dto): Json<UpdateHelpStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;
    let id = parse_id(&id, "Help Request")?;

    let request = HelpRequestService::new(&state.db)
        .set_status(id, user.id, &dto.status)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            200,
            request,
            "Help request status updated successfully",
        )),
    ))
}

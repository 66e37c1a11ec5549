use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::ApiResponse,
        event::{CreateEventDto, EventListQuery, SearchEventsQuery, UpdateEventDto},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    service::event::EventService,
    state::AppState,
    util::parse::parse_id,
};

/// POST /api/v1/events
pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;

    let event = EventService::new(&state.db).create(user.id, dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(201, event, "Event created successfully.")),
    ))
}

/// GET /api/v1/events
///
/// Public cursor-paginated list.
pub async fn get_all_events(
    State(state): State<AppState>,
    Query(query): Query<EventListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db).list(query).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(200, events, "Events fetched successfully")),
    ))
}

/// GET /api/v1/events/search
///
/// Offset-paginated search with its own response contract.
pub async fn search_events(
    State(state): State<AppState>,
    Query(query): Query<SearchEventsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let results = EventService::new(&state.db).search(query).await?;

    Ok((StatusCode::OK, Json(results)))
}

/// GET /api/v1/events/{eventId}
pub async fn get_event_by_id(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event_id = parse_id(&event_id, "Event")?;

    let event = EventService::new(&state.db).get(event_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(200, event, "Event fetched successfully")),
    ))
}

/// PATCH /api/v1/events/{eventId}
pub async fn update_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<String>,
    Json(dto): Json<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;
    let event_id = parse_id(&event_id, "Event")?;

    let event = EventService::new(&state.db)
        .update(event_id, user.id, dto)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(200, event, "Event updated successfully")),
    ))
}

/// DELETE /api/v1/events/{eventId}
pub async fn delete_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;
    let event_id = parse_id(&event_id, "Event")?;

    let deleted = EventService::new(&state.db).delete(event_id, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            200,
            serde_json::json!({ "deletedEvent": deleted }),
            "Event deleted successfully",
        )),
    ))
}

/// POST /api/v1/events/{eventId}/attend
pub async fn attend_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;
    let event_id = parse_id(&event_id, "Event")?;

    let attendance = EventService::new(&state.db).attend(event_id, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            200,
            attendance,
            "Successfully joined the event",
        )),
    ))
}

/// DELETE /api/v1/events/{eventId}/leave
pub async fn leave_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;
    let event_id = parse_id(&event_id, "Event")?;

    let attendance = EventService::new(&state.db).leave(event_id, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            200,
            attendance,
            "Successfully left the event",
        )),
    ))
}

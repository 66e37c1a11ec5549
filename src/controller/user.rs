use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header::SET_COOKIE, HeaderMap, HeaderName, StatusCode},
    response::{AppendHeaders, IntoResponse},
    Json,
};

use crate::{
    dto::{
        api::ApiResponse,
        user::{
            ChangePasswordDto, ForgotPasswordDto, LoginDto, LoginResponseDto, RegisterUserDto,
            RefreshTokenDto, ResetPasswordDto, ResetTokenDto, TokenPairDto, UpdateAccountDto,
            UserSearchQuery,
        },
    },
    error::{auth::AuthError, AppError},
    middleware::auth::{cookie_value, AuthGuard},
    service::{media::MediaService, user::UserService},
    state::AppState,
    util::parse::parse_id,
};

/// Cookie attributes shared by the token cookies.
const COOKIE_ATTRIBUTES: &str = "HttpOnly; SameSite=Lax; Path=/";

fn auth_cookies(
    access_token: &str,
    refresh_token: &str,
) -> AppendHeaders<[(HeaderName, String); 2]> {
    AppendHeaders([
        (
            SET_COOKIE,
            format!("accessToken={}; {}", access_token, COOKIE_ATTRIBUTES),
        ),
        (
            SET_COOKIE,
            format!("refreshToken={}; {}", refresh_token, COOKIE_ATTRIBUTES),
        ),
    ])
}

fn clear_cookies() -> AppendHeaders<[(HeaderName, String); 2]> {
    AppendHeaders([
        (
            SET_COOKIE,
            format!("accessToken=; Max-Age=0; {}", COOKIE_ATTRIBUTES),
        ),
        (
            SET_COOKIE,
            format!("refreshToken=; Max-Age=0; {}", COOKIE_ATTRIBUTES),
        ),
    ])
}

/// POST /api/v1/users/register
pub async fn register(
    State(state): State<AppState>,
    Json(dto): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db, &state.config).register(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(201, user, "User registered successfully")),
    ))
}

/// POST /api/v1/users/login
///
/// Issues a token pair, persists the refresh token, and sets both tokens as
/// HttpOnly cookies alongside the response body.
pub async fn login(
    State(state): State<AppState>,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (user, access_token, refresh_token) =
        UserService::new(&state.db, &state.config).login(dto).await?;

    let cookies = auth_cookies(&access_token, &refresh_token);

    Ok((
        StatusCode::OK,
        cookies,
        Json(ApiResponse::new(
            200,
            LoginResponseDto {
                user,
                access_token,
                refresh_token,
            },
            "User logged in successfully",
        )),
    ))
}

/// POST /api/v1/users/logout
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;

    UserService::new(&state.db, &state.config).logout(user.id).await?;

    Ok((
        StatusCode::OK,
        clear_cookies(),
        Json(ApiResponse::new(200, serde_json::json!({}), "User logged out")),
    ))
}

/// POST /api/v1/users/refresh-token
///
/// Reads the refresh token from the cookie or the request body and rotates
/// the pair.
pub async fn refresh_token(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Option<Json<RefreshTokenDto>>,
) -> Result<impl IntoResponse, AppError> {
    let incoming = cookie_value(&headers, "refreshToken")
        .or_else(|| body.and_then(|Json(dto)| dto.refresh_token));

    let Some(incoming) = incoming else {
        return Err(AuthError::MissingToken.into());
    };

    let (access_token, refresh_token) = UserService::new(&state.db, &state.config)
        .refresh(&incoming)
        .await?;

    let cookies = auth_cookies(&access_token, &refresh_token);

    Ok((
        StatusCode::OK,
        cookies,
        Json(ApiResponse::new(
            200,
            TokenPairDto {
                access_token,
                refresh_token,
            },
            "Access token refreshed",
        )),
    ))
}

/// POST /api/v1/users/change-password
pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;

    UserService::new(&state.db, &state.config)
        .change_password(user.id, dto)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            200,
            serde_json::json!({}),
            "Password changed successfully",
        )),
    ))
}

/// POST /api/v1/users/forgot-password
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(dto): Json<ForgotPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let reset_token = UserService::new(&state.db, &state.config)
        .forgot_password(&dto.email)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            200,
            ResetTokenDto { reset_token },
            "Reset token generated successfully",
        )),
    ))
}

/// POST /api/v1/users/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    Json(dto): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db, &state.config)
        .reset_password(dto)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            200,
            serde_json::json!({}),
            "Password reset successfully",
        )),
    ))
}

/// GET /api/v1/users/current-user
pub async fn current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            200,
            user.into_dto(),
            "User fetched successfully",
        )),
    ))
}

/// PATCH /api/v1/users/update-account
pub async fn update_account(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<UpdateAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;

    let updated = UserService::new(&state.db, &state.config)
        .update_account(user.id, dto)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            200,
            updated,
            "Account details updated successfully",
        )),
    ))
}

/// PATCH /api/v1/users/avatar (multipart)
pub async fn update_avatar(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;

    let Some((file_name, bytes)) = read_file_field(multipart, "avatar").await? else {
        return Err(AppError::BadRequest("Avatar file is missing".to_string()));
    };

    let url = MediaService::new(&state.http_client, &state.config.media_upload_url)
        .upload(&file_name, bytes)
        .await?;

    let updated = UserService::new(&state.db, &state.config)
        .set_avatar(user.id, &url)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            200,
            updated,
            "Avatar image updated successfully",
        )),
    ))
}

/// PATCH /api/v1/users/cover-image (multipart)
pub async fn update_cover_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;

    let Some((file_name, bytes)) = read_file_field(multipart, "coverImage").await? else {
        return Err(AppError::BadRequest(
            "Cover image file is missing".to_string(),
        ));
    };

    let url = MediaService::new(&state.http_client, &state.config.media_upload_url)
        .upload(&file_name, bytes)
        .await?;

    let updated = UserService::new(&state.db, &state.config)
        .set_cover_image(user.id, &url)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            200,
            updated,
            "Cover image updated successfully",
        )),
    ))
}

/// GET /api/v1/users/users/{id}
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_id(&id, "user")?;

    let user = UserService::new(&state.db, &state.config)
        .get_by_id(user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            200,
            user,
            "User profile fetched successfully",
        )),
    ))
}

/// GET /api/v1/users/users/{id}/history
///
/// History of the acting user, derived from their volunteer logs.
pub async fn volunteer_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers).await?;

    let history = UserService::new(&state.db, &state.config)
        .volunteer_history(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            200,
            history,
            "Volunteer history fetched successfully",
        )),
    ))
}

/// GET /api/v1/users/users/search
pub async fn search_users(
    State(state): State<AppState>,
    Query(query): Query<UserSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db, &state.config).search(query).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(200, users, "Users fetched successfully")),
    ))
}

/// Pulls the named file field out of a multipart request.
async fn read_file_field(
    mut multipart: Multipart,
    field_name: &str,
) -> Result<Option<(String, Vec<u8>)>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::BadRequest("Malformed multipart request".to_string()))?
    {
        if field.name() == Some(field_name) {
            let file_name = field.file_name().unwrap_or(field_name).to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|_| AppError::BadRequest("Malformed multipart request".to_string()))?;

            return Ok(Some((file_name, bytes.to_vec())));
        }
    }

    Ok(None)
}

use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    data::{event::EventRepository, user::UserRepository, volunteer_log::VolunteerLogRepository},
    dto::{
        event::EventSummaryDto,
        user::{
            ChangePasswordDto, LoginDto, RegisterUserDto, ResetPasswordDto, UpdateAccountDto,
            UserDto, UserSearchQuery, VolunteerHistoryEntryDto,
        },
    },
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, Role, UpdateAccountParams, User, UserSearchFilter},
    service::auth::AuthService,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    config: &'a Config,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection, config: &'a Config) -> Self {
        Self { db, config }
    }

    /// Registers a new user account.
    ///
    /// Username and email are lowercased before storage and checked against
    /// existing accounts. The password is hashed before it reaches the
    /// repository; the role is only honored when it names a known role.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created account, secrets excluded
    /// - `Err(AppError::BadRequest)` - A required field was missing or blank
    /// - `Err(AppError::Conflict)` - Username or email already registered
    pub async fn register(&self, dto: RegisterUserDto) -> Result<UserDto, AppError> {
        let username = dto.username.trim().to_lowercase();
        let email = dto.email.trim().to_lowercase();
        let full_name = dto.full_name.trim().to_string();

        if username.is_empty() || email.is_empty() || full_name.is_empty() || dto.password.trim().is_empty()
        {
            return Err(AppError::BadRequest(
                "All required fields must be provided".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo
            .find_by_username_or_email(&username, &email)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "User with this email or username already exists".to_string(),
            ));
        }

        let role = dto.role.as_deref().and_then(Role::parse).unwrap_or(Role::User);
        let password_hash = AuthService::new(self.config).hash_password(&dto.password)?;

        let user = user_repo
            .create(CreateUserParams {
                username,
                email,
                full_name,
                password_hash,
                bio: dto.bio.map(|bio| bio.trim().to_string()),
                skills: trim_list(dto.skills.unwrap_or_default()),
                causes_supported: trim_list(dto.causes_supported.unwrap_or_default()),
                role,
            })
            .await?;

        Ok(user.into_dto())
    }

    /// Authenticates a user and issues a token pair.
    ///
    /// The refresh token is persisted on the user row so a later refresh can
    /// check it was not rotated away.
    ///
    /// # Returns
    /// - `Ok((user, access_token, refresh_token))` - Login succeeded
    /// - `Err(AppError::BadRequest)` - Neither username nor email provided
    /// - `Err(AppError::NotFound)` - No matching account
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Wrong password
    pub async fn login(&self, dto: LoginDto) -> Result<(UserDto, String, String), AppError> {
        if dto.username.is_none() && dto.email.is_none() {
            return Err(AppError::BadRequest(
                "Username or email is required".to_string(),
            ));
        }

        let username = dto.username.unwrap_or_default().trim().to_lowercase();
        let email = dto.email.unwrap_or_default().trim().to_lowercase();

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_username_or_email(&username, &email).await? else {
            return Err(AppError::NotFound("User does not exist".to_string()));
        };

        let auth = AuthService::new(self.config);
        if !auth.verify_password(&dto.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let access_token = auth.issue_access_token(&user)?;
        let refresh_token = auth.issue_refresh_token(user.id)?;
        user_repo
            .set_refresh_token(user.id, Some(&refresh_token))
            .await?;

        Ok((user.into_dto(), access_token, refresh_token))
    }

    /// Exchanges a valid refresh token for a new token pair.
    ///
    /// The submitted token must match the one persisted on the user row; a
    /// mismatch means it was already rotated or revoked.
    pub async fn refresh(&self, token: &str) -> Result<(String, String), AppError> {
        let auth = AuthService::new(self.config);
        let claims = auth.decode_refresh_token(token)?;

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_id(claims.sub).await? else {
            return Err(AuthError::InvalidRefreshToken.into());
        };

        if user.refresh_token.as_deref() != Some(token) {
            return Err(AuthError::RefreshTokenReused.into());
        }

        let access_token = auth.issue_access_token(&user)?;
        let refresh_token = auth.issue_refresh_token(user.id)?;
        user_repo
            .set_refresh_token(user.id, Some(&refresh_token))
            .await?;

        Ok((access_token, refresh_token))
    }

    /// Clears the persisted refresh token, invalidating the session.
    pub async fn logout(&self, user_id: i32) -> Result<(), AppError> {
        UserRepository::new(self.db)
            .set_refresh_token(user_id, None)
            .await?;
        Ok(())
    }

    /// Changes the user's password after verifying the old one.
    pub async fn change_password(
        &self,
        user_id: i32,
        dto: ChangePasswordDto,
    ) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let auth = AuthService::new(self.config);
        if !auth.verify_password(&dto.old_password, &user.password_hash)? {
            return Err(AppError::BadRequest("Invalid old password".to_string()));
        }

        let hash = auth.hash_password(&dto.new_password)?;
        user_repo.set_password_hash(user_id, &hash).await?;

        Ok(())
    }

    /// Issues a one-hour password reset token for the account.
    ///
    /// The token is persisted on the user row so that it can only be redeemed
    /// once.
    pub async fn forgot_password(&self, email: &str) -> Result<String, AppError> {
        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_email(&email.trim().to_lowercase()).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let token = AuthService::new(self.config).issue_reset_token(user.id)?;
        user_repo.set_reset_token(user.id, Some(&token)).await?;

        Ok(token)
    }

    /// Redeems a reset token and stores the new password.
    ///
    /// The token must validate and match the persisted value; it is cleared
    /// after use.
    pub async fn reset_password(&self, dto: ResetPasswordDto) -> Result<(), AppError> {
        let auth = AuthService::new(self.config);
        let claims = auth.decode_reset_token(&dto.reset_token)?;

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_id(claims.sub).await? else {
            return Err(AuthError::InvalidResetToken.into());
        };

        if user.reset_token.as_deref() != Some(dto.reset_token.as_str()) {
            return Err(AuthError::InvalidResetToken.into());
        }

        let hash = auth.hash_password(&dto.new_password)?;
        user_repo.set_password_hash(user.id, &hash).await?;
        user_repo.set_reset_token(user.id, None).await?;

        Ok(())
    }

    /// Updates account details for the acting user.
    ///
    /// Full name and email are required; an unrecognized role value is
    /// silently ignored rather than rejected.
    pub async fn update_account(
        &self,
        user_id: i32,
        dto: UpdateAccountDto,
    ) -> Result<UserDto, AppError> {
        let full_name = dto.full_name.unwrap_or_default().trim().to_string();
        let email = dto.email.unwrap_or_default().trim().to_lowercase();

        if full_name.is_empty() || email.is_empty() {
            return Err(AppError::BadRequest(
                "Full name and email are required".to_string(),
            ));
        }

        let user = UserRepository::new(self.db)
            .update_account(
                user_id,
                UpdateAccountParams {
                    full_name,
                    email,
                    bio: dto.bio.map(|bio| bio.trim().to_string()),
                    skills: trim_list(dto.skills.unwrap_or_default()),
                    causes_supported: trim_list(dto.causes_supported.unwrap_or_default()),
                    role: dto.role.as_deref().and_then(Role::parse),
                },
            )
            .await?;

        Ok(user.into_dto())
    }

    /// Stores the hosted avatar URL and returns the refreshed profile.
    pub async fn set_avatar(&self, user_id: i32, url: &str) -> Result<UserDto, AppError> {
        UserRepository::new(self.db).set_avatar(user_id, url).await?;
        self.get_by_id(user_id).await
    }

    /// Stores the hosted cover image URL and returns the refreshed profile.
    pub async fn set_cover_image(&self, user_id: i32, url: &str) -> Result<UserDto, AppError> {
        UserRepository::new(self.db)
            .set_cover_image(user_id, url)
            .await?;
        self.get_by_id(user_id).await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<UserDto, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        Ok(user.into_dto())
    }

    /// Searches users by profile filters.
    ///
    /// The `hours` filter keeps the lenient contract of the API: unparseable
    /// or negative values are ignored instead of rejected.
    pub async fn search(&self, query: UserSearchQuery) -> Result<Vec<UserDto>, AppError> {
        let filter = UserSearchFilter {
            full_name: query.full_name,
            username: query.username,
            skills: split_csv(query.skills),
            causes: split_csv(query.causes),
            min_hours: query
                .hours
                .and_then(|hours| hours.parse::<f64>().ok())
                .filter(|hours| *hours >= 0.0),
        };

        let users = UserRepository::new(self.db).search(filter).await?;

        Ok(users.into_iter().map(User::into_dto).collect())
    }

    /// Derives the user's volunteer history from their logs.
    ///
    /// Each entry carries the event summary when the event still exists.
    pub async fn volunteer_history(
        &self,
        user_id: i32,
    ) -> Result<Vec<VolunteerHistoryEntryDto>, AppError> {
        let logs = VolunteerLogRepository::new(self.db).get_by_user(user_id).await?;
        let event_repo = EventRepository::new(self.db);

        let mut entries = Vec::new();
        for log in logs {
            let event = event_repo.get_by_id(log.event_id).await?;
            entries.push(VolunteerHistoryEntryDto {
                event: event.map(|event| EventSummaryDto {
                    id: event.id,
                    title: event.title,
                    date: event.date,
                    location: event.location,
                }),
                hours: log.hours,
                verified: log.verified,
            });
        }

        Ok(entries)
    }
}

fn trim_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}

fn split_csv(value: Option<String>) -> Vec<String> {
    value
        .map(|value| {
            value
                .split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

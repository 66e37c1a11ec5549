use sea_orm::DatabaseConnection;

use crate::{
    data::{help_request::HelpRequestRepository, user::UserRepository},
    dto::help::{
        CommentDto, CreateHelpRequestDto, HelpListQuery, HelpRequestDetailsDto, HelpRequestDto,
        UpdateHelpRequestDto,
    },
    error::{auth::AuthError, AppError},
    model::help_request::{
        CreateHelpRequestParams, HelpRequestFilter, HelpStatus, UpdateHelpRequestParams,
        UrgencyLevel,
    },
};

pub struct HelpRequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HelpRequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a help request with status `open`
    ///
    /// # Returns
    /// - `Ok(HelpRequestDto)`: The created request
    /// - `Err(AppError::BadRequest)`: Missing fields or unknown urgency level
    pub async fn create(
        &self,
        user_id: i32,
        dto: CreateHelpRequestDto,
    ) -> Result<HelpRequestDto, AppError> {
        let title = dto.title.trim().to_string();
        let description = dto.description.trim().to_string();

        if title.is_empty() || description.is_empty() || dto.urgency_level.trim().is_empty() {
            return Err(AppError::BadRequest("All fields are required".to_string()));
        }

        let Some(urgency_level) = UrgencyLevel::parse(&dto.urgency_level) else {
            return Err(AppError::BadRequest("Invalid urgency level".to_string()));
        };

        let help_request = HelpRequestRepository::new(self.db)
            .create(CreateHelpRequestParams {
                title,
                description,
                urgency_level,
                created_by: user_id,
            })
            .await?;

        self.to_dto(help_request).await
    }

    /// Gets all help requests matching the filter
    pub async fn get_all(&self, query: HelpListQuery) -> Result<Vec<HelpRequestDto>, AppError> {
        let requests = HelpRequestRepository::new(self.db)
            .get_all(HelpRequestFilter {
                urgency_level: query.urgency_level,
                status: query.status,
            })
            .await?;

        let mut dtos = Vec::new();
        for request in requests {
            dtos.push(self.to_dto(request).await?);
        }

        Ok(dtos)
    }

    /// Gets a help request with helper summaries and comments embedded
    pub async fn get(&self, id: i32) -> Result<HelpRequestDetailsDto, AppError> {
        let repo = HelpRequestRepository::new(self.db);
        let Some(request) = repo.get_by_id(id).await? else {
            return Err(AppError::NotFound("Help request not found".to_string()));
        };

        self.to_details_dto(request).await
    }

    /// Updates a help request owned by the acting user
    pub async fn update(
        &self,
        id: i32,
        user_id: i32,
        dto: UpdateHelpRequestDto,
    ) -> Result<HelpRequestDto, AppError> {
        let repo = HelpRequestRepository::new(self.db);
        let Some(request) = repo.get_by_id(id).await? else {
            return Err(AppError::NotFound("Help request not found".to_string()));
        };

        if request.created_by != user_id {
            return Err(AuthError::Forbidden(
                "You can only update your own help requests".to_string(),
            )
            .into());
        }

        let urgency_level = match dto.urgency_level.as_deref() {
            Some(value) => match UrgencyLevel::parse(value) {
                Some(level) => Some(level),
                None => {
                    return Err(AppError::BadRequest("Invalid urgency level".to_string()));
                }
            },
            None => None,
        };

        let updated = repo
            .update(
                id,
                UpdateHelpRequestParams {
                    title: dto.title.map(|title| title.trim().to_string()),
                    description: dto.description.map(|description| description.trim().to_string()),
                    urgency_level,
                },
            )
            .await?;

        self.to_dto(updated).await
    }

    /// Sets the status of a help request owned by the acting user
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)`: Status outside {open, in-progress, resolved}
    /// - `Err(AppError::AuthErr(Forbidden))`: Acting user is not the owner
    pub async fn set_status(
        &self,
        id: i32,
        user_id: i32,
        status: &str,
    ) -> Result<HelpRequestDto, AppError> {
        let Some(status) = HelpStatus::parse(status) else {
            return Err(AppError::BadRequest("Invalid status value".to_string()));
        };

        let repo = HelpRequestRepository::new(self.db);
        let Some(request) = repo.get_by_id(id).await? else {
            return Err(AppError::NotFound("Help request not found".to_string()));
        };

        if request.created_by != user_id {
            return Err(AuthError::Forbidden(
                "You can only update your own help requests".to_string(),
            )
            .into());
        }

        repo.set_status(id, status.as_str()).await?;

        let Some(updated) = repo.get_by_id(id).await? else {
            return Err(AppError::NotFound("Help request not found".to_string()));
        };

        self.to_dto(updated).await
    }

    /// Deletes a help request owned by the acting user
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        let repo = HelpRequestRepository::new(self.db);
        let Some(request) = repo.get_by_id(id).await? else {
            return Err(AppError::NotFound("Help request not found".to_string()));
        };

        if request.created_by != user_id {
            return Err(AuthError::Forbidden(
                "You can only delete your own help requests".to_string(),
            )
            .into());
        }

        repo.delete(id).await?;

        Ok(())
    }

    /// Adds the acting user to the helper set
    pub async fn join(&self, id: i32, user_id: i32) -> Result<HelpRequestDto, AppError> {
        let repo = HelpRequestRepository::new(self.db);
        let Some(request) = repo.get_by_id(id).await? else {
            return Err(AppError::NotFound("Help request not found".to_string()));
        };

        if repo.is_helper(id, user_id).await? {
            return Err(AppError::BadRequest(
                "You have already joined this help request".to_string(),
            ));
        }

        repo.add_helper(id, user_id).await?;

        self.to_dto(request).await
    }

    /// Removes the acting user from the helper set
    pub async fn leave(&self, id: i32, user_id: i32) -> Result<HelpRequestDto, AppError> {
        let repo = HelpRequestRepository::new(self.db);
        let Some(request) = repo.get_by_id(id).await? else {
            return Err(AppError::NotFound("Help request not found".to_string()));
        };

        if !repo.is_helper(id, user_id).await? {
            return Err(AppError::BadRequest(
                "You have not joined this help request".to_string(),
            ));
        }

        repo.remove_helper(id, user_id).await?;

        self.to_dto(request).await
    }

    /// Appends a comment to a help request
    pub async fn add_comment(
        &self,
        id: i32,
        user_id: i32,
        text: &str,
    ) -> Result<HelpRequestDetailsDto, AppError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::BadRequest("Comment text is required".to_string()));
        }

        let repo = HelpRequestRepository::new(self.db);
        let Some(request) = repo.get_by_id(id).await? else {
            return Err(AppError::NotFound("Help request not found".to_string()));
        };

        repo.add_comment(id, user_id, text.to_string()).await?;

        self.to_details_dto(request).await
    }

    async fn to_dto(&self, request: entity::help_request::Model) -> Result<HelpRequestDto, AppError> {
        let Some(creator) = UserRepository::new(self.db).find_by_id(request.created_by).await? else {
            return Err(AppError::NotFound("Help request creator not found".to_string()));
        };

        let helpers = HelpRequestRepository::new(self.db).helper_ids(request.id).await?;

        Ok(HelpRequestDto {
            id: request.id,
            title: request.title,
            description: request.description,
            urgency_level: request.urgency_level,
            status: request.status,
            created_by: creator.summary(),
            helpers,
            created_at: request.created_at,
            updated_at: request.updated_at,
        })
    }

    async fn to_details_dto(
        &self,
        request: entity::help_request::Model,
    ) -> Result<HelpRequestDetailsDto, AppError> {
        let repo = HelpRequestRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let Some(creator) = user_repo.find_by_id(request.created_by).await? else {
            return Err(AppError::NotFound("Help request creator not found".to_string()));
        };

        let helper_ids = repo.helper_ids(request.id).await?;
        let helpers = user_repo
            .find_by_ids(&helper_ids)
            .await?
            .iter()
            .map(|helper| helper.summary())
            .collect();

        let comments = repo
            .comments_for(request.id)
            .await?
            .into_iter()
            .map(|comment| CommentDto {
                user: comment.user_id,
                text: comment.text,
                timestamp: comment.created_at,
            })
            .collect();

        Ok(HelpRequestDetailsDto {
            id: request.id,
            title: request.title,
            description: request.description,
            urgency_level: request.urgency_level,
            status: request.status,
            created_by: creator.summary(),
            helpers,
            comments,
            created_at: request.created_at,
            updated_at: request.updated_at,
        })
    }
}

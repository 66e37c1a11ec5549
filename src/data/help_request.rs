use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::help_request::{
    CreateHelpRequestParams, HelpRequestFilter, UpdateHelpRequestParams,
};

pub struct HelpRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HelpRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new help request with status `open`
    pub async fn create(
        &self,
        param: CreateHelpRequestParams,
    ) -> Result<entity::help_request::Model, DbErr> {
        let now = Utc::now();

        entity::help_request::ActiveModel {
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            urgency_level: ActiveValue::Set(param.urgency_level.as_str().to_string()),
            status: ActiveValue::Set("open".to_string()),
            created_by: ActiveValue::Set(param.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a help request by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::help_request::Model>, DbErr> {
        entity::prelude::HelpRequest::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets all help requests matching the filter, newest first
    pub async fn get_all(
        &self,
        filter: HelpRequestFilter,
    ) -> Result<Vec<entity::help_request::Model>, DbErr> {
        let mut query = entity::prelude::HelpRequest::find();

        if let Some(urgency_level) = filter.urgency_level {
            query = query.filter(entity::help_request::Column::UrgencyLevel.eq(urgency_level));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::help_request::Column::Status.eq(status));
        }

        query
            .order_by_desc(entity::help_request::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Updates a help request's descriptive fields
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated help request
    /// - `Err(DbErr)`: Database error, including `RecordNotFound`
    pub async fn update(
        &self,
        id: i32,
        param: UpdateHelpRequestParams,
    ) -> Result<entity::help_request::Model, DbErr> {
        let help_request = entity::prelude::HelpRequest::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Help request {} not found",
                id
            )))?;

        let mut active_model: entity::help_request::ActiveModel = help_request.into();

        if let Some(title) = param.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(urgency_level) = param.urgency_level {
            active_model.urgency_level = ActiveValue::Set(urgency_level.as_str().to_string());
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Sets the status of a help request
    pub async fn set_status(&self, id: i32, status: &str) -> Result<(), DbErr> {
        entity::prelude::HelpRequest::update_many()
            .filter(entity::help_request::Column::Id.eq(id))
            .col_expr(
                entity::help_request::Column::Status,
                sea_orm::sea_query::Expr::value(status.to_string()),
            )
            .col_expr(
                entity::help_request::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes a help request by ID
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::HelpRequest::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Checks whether a user has joined as a helper
    pub async fn is_helper(&self, help_request_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::HelpRequestHelper::find()
            .filter(entity::help_request_helper::Column::HelpRequestId.eq(help_request_id))
            .filter(entity::help_request_helper::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Adds a user to the helper set
    pub async fn add_helper(&self, help_request_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::help_request_helper::ActiveModel {
            help_request_id: ActiveValue::Set(help_request_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;
        Ok(())
    }

    /// Removes a user from the helper set
    pub async fn remove_helper(&self, help_request_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::HelpRequestHelper::delete_many()
            .filter(entity::help_request_helper::Column::HelpRequestId.eq(help_request_id))
            .filter(entity::help_request_helper::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Gets the user ids helping on a request
    pub async fn helper_ids(&self, help_request_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::HelpRequestHelper::find()
            .filter(entity::help_request_helper::Column::HelpRequestId.eq(help_request_id))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.user_id).collect())
    }

    /// Appends a comment to a help request
    pub async fn add_comment(
        &self,
        help_request_id: i32,
        user_id: i32,
        text: String,
    ) -> Result<entity::help_request_comment::Model, DbErr> {
        entity::help_request_comment::ActiveModel {
            help_request_id: ActiveValue::Set(help_request_id),
            user_id: ActiveValue::Set(user_id),
            text: ActiveValue::Set(text),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a help request's comments, oldest first
    pub async fn comments_for(
        &self,
        help_request_id: i32,
    ) -> Result<Vec<entity::help_request_comment::Model>, DbErr> {
        entity::prelude::HelpRequestComment::find()
            .filter(entity::help_request_comment::Column::HelpRequestId.eq(help_request_id))
            .order_by_asc(entity::help_request_comment::Column::CreatedAt)
            .all(self.db)
            .await
    }
}

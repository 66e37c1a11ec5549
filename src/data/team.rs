use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::team::{CreateTeamParams, UpdateTeamParams};

pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new team with the creator as its first member
    ///
    /// # Returns
    /// - `Ok(Model)`: The created team
    /// - `Err(DbErr)`: Database error (including unique name violations)
    pub async fn create(&self, param: CreateTeamParams) -> Result<entity::team::Model, DbErr> {
        let now = Utc::now();

        let team = entity::team::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            team_type: ActiveValue::Set(param.team_type.as_str().to_string()),
            created_by: ActiveValue::Set(param.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        entity::team_member::ActiveModel {
            team_id: ActiveValue::Set(team.id),
            user_id: ActiveValue::Set(param.created_by),
            created_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(team)
    }

    /// Finds a team by its unique name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Gets a team by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find_by_id(id).one(self.db).await
    }

    /// Gets all teams, optionally filtered by type, ordered by name
    pub async fn get_all(
        &self,
        team_type: Option<&str>,
    ) -> Result<Vec<entity::team::Model>, DbErr> {
        let mut query = entity::prelude::Team::find();

        if let Some(team_type) = team_type {
            query = query.filter(entity::team::Column::TeamType.eq(team_type));
        }

        query
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await
    }

    /// Updates a team
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated team
    /// - `Err(DbErr)`: Database error, including `RecordNotFound`
    pub async fn update(
        &self,
        id: i32,
        param: UpdateTeamParams,
    ) -> Result<entity::team::Model, DbErr> {
        let team = entity::prelude::Team::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Team {} not found", id)))?;

        let mut active_model: entity::team::ActiveModel = team.into();

        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(team_type) = param.team_type {
            active_model.team_type = ActiveValue::Set(team_type.as_str().to_string());
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Deletes a team by ID
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Team::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Checks whether a user is a member of a team
    pub async fn is_member(&self, team_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .filter(entity::team_member::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Adds a user to the member set
    pub async fn add_member(&self, team_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::team_member::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;
        Ok(())
    }

    /// Removes a user from the member set
    pub async fn remove_member(&self, team_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::TeamMember::delete_many()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .filter(entity::team_member::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Gets the user ids belonging to a team
    pub async fn member_ids(&self, team_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.user_id).collect())
    }

    /// Gets all teams a user belongs to
    pub async fn teams_for_user(&self, user_id: i32) -> Result<Vec<entity::team::Model>, DbErr> {
        let memberships = entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        let team_ids: Vec<i32> = memberships.into_iter().map(|row| row.team_id).collect();
        if team_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Team::find()
            .filter(entity::team::Column::Id.is_in(team_ids))
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await
    }
}

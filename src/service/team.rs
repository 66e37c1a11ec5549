use sea_orm::DatabaseConnection;

use crate::{
    data::{team::TeamRepository, user::UserRepository},
    dto::team::{
        CreateTeamDto, TeamDetailsDto, TeamDto, TeamMembershipDto, UpdateTeamDto,
    },
    error::{auth::AuthError, AppError},
    model::team::{CreateTeamParams, TeamType, UpdateTeamParams},
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a team with the acting user as owner and first member
    ///
    /// # Returns
    /// - `Ok(TeamDto)`: The created team
    /// - `Err(AppError::BadRequest)`: Missing name/type, unknown type, or
    ///   duplicate team name
    pub async fn create(&self, user_id: i32, dto: CreateTeamDto) -> Result<TeamDto, AppError> {
        let name = dto.name.trim().to_string();

        if name.is_empty() || dto.team_type.trim().is_empty() {
            return Err(AppError::BadRequest("Name and type are required".to_string()));
        }

        let Some(team_type) = TeamType::parse(&dto.team_type) else {
            return Err(AppError::BadRequest("Invalid team type".to_string()));
        };

        let repo = TeamRepository::new(self.db);

        if repo.find_by_name(&name).await?.is_some() {
            return Err(AppError::BadRequest("Team name already exists".to_string()));
        }

        let team = repo
            .create(CreateTeamParams {
                name,
                description: dto.description.map(|description| description.trim().to_string()),
                team_type,
                created_by: user_id,
            })
            .await?;

        self.to_dto(team).await
    }

    /// Gets all teams, optionally filtered by type
    ///
    /// An unrecognized type filter is ignored rather than rejected.
    pub async fn get_all(&self, team_type: Option<String>) -> Result<Vec<TeamDto>, AppError> {
        let team_type = team_type.filter(|value| TeamType::parse(value).is_some());

        let teams = TeamRepository::new(self.db)
            .get_all(team_type.as_deref())
            .await?;

        let mut dtos = Vec::new();
        for team in teams {
            dtos.push(self.to_dto(team).await?);
        }

        Ok(dtos)
    }

    /// Gets a team with member summaries embedded
    pub async fn get(&self, team_id: i32) -> Result<TeamDetailsDto, AppError> {
        let repo = TeamRepository::new(self.db);
        let Some(team) = repo.get_by_id(team_id).await? else {
            return Err(AppError::NotFound("Team not found".to_string()));
        };

        let user_repo = UserRepository::new(self.db);
        let Some(creator) = user_repo.find_by_id(team.created_by).await? else {
            return Err(AppError::NotFound("Team creator not found".to_string()));
        };

        let member_ids = repo.member_ids(team_id).await?;
        let members = user_repo
            .find_by_ids(&member_ids)
            .await?
            .iter()
            .map(|member| member.summary())
            .collect();

        Ok(TeamDetailsDto {
            id: team.id,
            name: team.name,
            description: team.description,
            team_type: team.team_type,
            created_by: creator.summary(),
            members,
            created_at: team.created_at,
            updated_at: team.updated_at,
        })
    }

    /// Updates a team owned by the acting user
    ///
    /// An unrecognized type value is ignored, matching the API contract.
    pub async fn update(
        &self,
        team_id: i32,
        user_id: i32,
        dto: UpdateTeamDto,
    ) -> Result<TeamDto, AppError> {
        let repo = TeamRepository::new(self.db);
        let Some(team) = repo.get_by_id(team_id).await? else {
            return Err(AppError::NotFound("Team not found".to_string()));
        };

        ensure_owner(team.created_by, user_id)?;

        let team = repo
            .update(
                team_id,
                UpdateTeamParams {
                    name: dto.name.map(|name| name.trim().to_string()),
                    description: dto.description.map(|description| description.trim().to_string()),
                    team_type: dto.team_type.as_deref().and_then(TeamType::parse),
                },
            )
            .await?;

        self.to_dto(team).await
    }

    /// Deletes a team owned by the acting user
    pub async fn delete(&self, team_id: i32, user_id: i32) -> Result<i32, AppError> {
        let repo = TeamRepository::new(self.db);
        let Some(team) = repo.get_by_id(team_id).await? else {
            return Err(AppError::NotFound("Team not found".to_string()));
        };

        ensure_owner(team.created_by, user_id)?;

        repo.delete(team_id).await?;

        Ok(team_id)
    }

    /// Adds the acting user to the member set
    pub async fn join(&self, team_id: i32, user_id: i32) -> Result<TeamMembershipDto, AppError> {
        let repo = TeamRepository::new(self.db);
        let Some(team) = repo.get_by_id(team_id).await? else {
            return Err(AppError::NotFound("Team not found".to_string()));
        };

        if repo.is_member(team_id, user_id).await? {
            return Err(AppError::BadRequest(
                "Already a member of this team".to_string(),
            ));
        }

        repo.add_member(team_id, user_id).await?;

        Ok(TeamMembershipDto {
            id: team.id,
            name: team.name,
            members: repo.member_ids(team_id).await?,
        })
    }

    /// Removes the acting user from the member set
    pub async fn leave(&self, team_id: i32, user_id: i32) -> Result<TeamMembershipDto, AppError> {
        let repo = TeamRepository::new(self.db);
        let Some(team) = repo.get_by_id(team_id).await? else {
            return Err(AppError::NotFound("Team not found".to_string()));
        };

        if !repo.is_member(team_id, user_id).await? {
            return Err(AppError::BadRequest(
                "Not a member of this team".to_string(),
            ));
        }

        repo.remove_member(team_id, user_id).await?;

        Ok(TeamMembershipDto {
            id: team.id,
            name: team.name,
            members: repo.member_ids(team_id).await?,
        })
    }

    /// Gets the teams the acting user belongs to
    pub async fn my_teams(&self, user_id: i32) -> Result<Vec<TeamDto>, AppError> {
        let teams = TeamRepository::new(self.db).teams_for_user(user_id).await?;

        let mut dtos = Vec::new();
        for team in teams {
            dtos.push(self.to_dto(team).await?);
        }

        Ok(dtos)
    }

    async fn to_dto(&self, team: entity::team::Model) -> Result<TeamDto, AppError> {
        let Some(creator) = UserRepository::new(self.db).find_by_id(team.created_by).await? else {
            return Err(AppError::NotFound("Team creator not found".to_string()));
        };

        Ok(TeamDto {
            id: team.id,
            name: team.name,
            description: team.description,
            team_type: team.team_type,
            created_by: creator.summary(),
            created_at: team.created_at,
            updated_at: team.updated_at,
        })
    }
}

fn ensure_owner(created_by: i32, user_id: i32) -> Result<(), AppError> {
    if created_by != user_id {
        return Err(AuthError::Forbidden("Not authorized to perform this action".to_string()).into());
    }
    Ok(())
}

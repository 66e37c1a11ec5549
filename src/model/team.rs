//! Team domain types and parameters.

/// Visibility class of a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamType {
    Public,
    Private,
}

impl TeamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamType::Public => "public",
            TeamType::Private => "private",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "public" => Some(TeamType::Public),
            "private" => Some(TeamType::Private),
            _ => None,
        }
    }
}

/// Parameters for creating a team. The creator becomes the first member.
#[derive(Debug, Clone)]
pub struct CreateTeamParams {
    pub name: String,
    pub description: Option<String>,
    pub team_type: TeamType,
    pub created_by: i32,
}

/// Parameters for a partial team update.
#[derive(Debug, Clone, Default)]
pub struct UpdateTeamParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub team_type: Option<TeamType>,
}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    pub avatar: Option<String>,
    pub cover_image: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    /// JSON-encoded array of skill names.
    #[sea_orm(column_type = "Text")]
    pub skills: String,
    /// JSON-encoded array of supported cause names.
    #[sea_orm(column_type = "Text")]
    pub causes_supported: String,
    pub total_hours: f64,
    pub points: i32,
    pub role: String,
    pub refresh_token: Option<String>,
    pub reset_token: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event::Entity")]
    Event,
    #[sea_orm(has_many = "super::team::Entity")]
    Team,
    #[sea_orm(has_many = "super::help_request::Entity")]
    HelpRequest,
    #[sea_orm(has_many = "super::volunteer_log::Entity")]
    VolunteerLog,
    #[sea_orm(has_many = "super::notification::Entity")]
    Notification,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::help_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HelpRequest.def()
    }
}

impl Related<super::volunteer_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VolunteerLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

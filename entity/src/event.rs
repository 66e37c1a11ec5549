use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category: String,
    pub location: String,
    pub date: DateTimeUtc,
    pub registration_deadline: Option<DateTimeUtc>,
    pub created_by: i32,
    pub team_organizer: Option<i32>,
    pub max_attendees: Option<i32>,
    pub status: String,
    pub visibility: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamOrganizer",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Team,
    #[sea_orm(has_many = "super::event_attendee::Entity")]
    EventAttendee,
    #[sea_orm(has_many = "super::event_comment::Entity")]
    EventComment,
    #[sea_orm(has_many = "super::volunteer_log::Entity")]
    VolunteerLog,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::event_attendee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventAttendee.def()
    }
}

impl Related<super::volunteer_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VolunteerLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "peer_verification")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub log_id: i32,
    pub user_id: i32,
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::volunteer_log::Entity",
        from = "Column::LogId",
        to = "super::volunteer_log::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    VolunteerLog,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::volunteer_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VolunteerLog.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "help_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub urgency_level: String,
    pub status: String,
    pub created_by: i32,
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
    #[sea_orm(has_many = "super::help_request_helper::Entity")]
    HelpRequestHelper,
    #[sea_orm(has_many = "super::help_request_comment::Entity")]
    HelpRequestComment,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::help_request_helper::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HelpRequestHelper.def()
    }
}

impl Related<super::help_request_comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HelpRequestComment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub content_type: String,
    pub title: String,
    pub creator: Option<String>,
    pub thumbnail_url: Option<String>,
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_contents::Entity")]
    UserContents,
}

impl Related<super::user_contents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserContents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

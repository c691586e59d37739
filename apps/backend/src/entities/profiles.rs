use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nickname: String,
    /// `USER` or `CELEB`
    pub profile_type: String,
    pub title: Option<String>,
    pub avatar_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub philosophy: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub quotes: Option<String>,
    /// JSON object, label -> 0..=100
    #[sea_orm(column_type = "Text", nullable)]
    pub persona_stats: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
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

//! SeaORM adapter for contents and the profile <-> content join.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use time::OffsetDateTime;

use crate::entities::{contents, user_contents};

pub mod dto;

pub use dto::{ContentCreate, UserContentCreate};

/// Contents on a profile's shelf, most recently updated record first.
pub async fn recent_contents_for_profile<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    profile_id: i64,
    limit: u64,
) -> Result<Vec<contents::Model>, sea_orm::DbErr> {
    contents::Entity::find()
        .inner_join(user_contents::Entity)
        .filter(user_contents::Column::ProfileId.eq(profile_id))
        .order_by_desc(user_contents::Column::UpdatedAt)
        .order_by_desc(user_contents::Column::Id)
        .limit(limit)
        .all(conn)
        .await
}

/// Every library record of a profile with its content.
pub async fn library_rows<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    profile_id: i64,
) -> Result<Vec<(user_contents::Model, Option<contents::Model>)>, sea_orm::DbErr> {
    user_contents::Entity::find()
        .filter(user_contents::Column::ProfileId.eq(profile_id))
        .find_also_related(contents::Entity)
        .all(conn)
        .await
}

pub async fn create_content<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ContentCreate,
) -> Result<contents::Model, sea_orm::DbErr> {
    let active = contents::ActiveModel {
        content_type: Set(dto.content_type),
        title: Set(dto.title),
        creator: Set(dto.creator),
        thumbnail_url: Set(dto.thumbnail_url),
        created_at: Set(OffsetDateTime::now_utc()),
        ..Default::default()
    };
    active.insert(conn).await
}

pub async fn create_user_content<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserContentCreate,
) -> Result<user_contents::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let active = user_contents::ActiveModel {
        profile_id: Set(dto.profile_id),
        content_id: Set(dto.content_id),
        status: Set(dto.status),
        rating: Set(dto.rating),
        review: Set(dto.review),
        created_at: Set(dto.updated_at.unwrap_or(now)),
        updated_at: Set(dto.updated_at.unwrap_or(now)),
        ..Default::default()
    };
    active.insert(conn).await
}

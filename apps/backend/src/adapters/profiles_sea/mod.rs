//! SeaORM adapter for profiles - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use time::OffsetDateTime;

use crate::entities::profiles;

pub mod dto;

pub use dto::{CelebSummary, ProfileCreate};

const CELEB: &str = "CELEB";

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<profiles::Model>, sea_orm::DbErr> {
    profiles::Entity::find_by_id(id).one(conn).await
}

/// `(id, persona_stats)` of every celeb outside `excluded`.
pub async fn celeb_stats_excluding<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    excluded: &[i64],
) -> Result<Vec<(i64, Option<String>)>, sea_orm::DbErr> {
    let mut query = profiles::Entity::find()
        .select_only()
        .column(profiles::Column::Id)
        .column(profiles::Column::PersonaStats)
        .filter(profiles::Column::ProfileType.eq(CELEB));
    if !excluded.is_empty() {
        query = query.filter(profiles::Column::Id.is_not_in(excluded.iter().copied()));
    }
    query.into_tuple().all(conn).await
}

/// Every celeb except `subject_id`, ordered by nickname.
pub async fn celeb_summaries<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    except: Option<i64>,
) -> Result<Vec<CelebSummary>, sea_orm::DbErr> {
    let mut query = profiles::Entity::find()
        .select_only()
        .column(profiles::Column::Id)
        .column(profiles::Column::Nickname)
        .column(profiles::Column::AvatarUrl)
        .filter(profiles::Column::ProfileType.eq(CELEB));
    if let Some(id) = except {
        query = query.filter(profiles::Column::Id.ne(id));
    }
    let rows: Vec<(i64, String, Option<String>)> = query
        .order_by_asc(profiles::Column::Nickname)
        .order_by_asc(profiles::Column::Id)
        .into_tuple()
        .all(conn)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(id, nickname, avatar_url)| CelebSummary {
            id,
            nickname,
            avatar_url,
        })
        .collect())
}

pub async fn create_profile<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ProfileCreate,
) -> Result<profiles::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let active = profiles::ActiveModel {
        nickname: Set(dto.nickname),
        profile_type: Set(dto.profile_type),
        title: Set(dto.title),
        avatar_url: Set(dto.avatar_url),
        bio: Set(dto.bio),
        philosophy: Set(dto.philosophy),
        quotes: Set(dto.quotes),
        persona_stats: Set(dto.persona_stats),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    active.insert(conn).await
}

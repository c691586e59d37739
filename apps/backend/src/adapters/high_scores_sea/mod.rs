//! SeaORM adapter for tracker high scores.

use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ConnectionTrait, EntityTrait, Set};
use time::OffsetDateTime;

use crate::entities::tracker_high_scores;

pub async fn find_by_player_key<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_key: &str,
) -> Result<Option<tracker_high_scores::Model>, sea_orm::DbErr> {
    tracker_high_scores::Entity::find_by_id(player_key.to_string())
        .one(conn)
        .await
}

/// Store `score` unless a higher value is already recorded. Returns the row
/// as it stands afterwards.
///
/// One `INSERT .. ON CONFLICT DO UPDATE .. WHERE high_score < score`, so a
/// concurrent writer for the same key never surfaces as an error and cannot
/// poison the surrounding transaction.
pub async fn raise_high_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_key: &str,
    score: i32,
) -> Result<tracker_high_scores::Model, sea_orm::DbErr> {
    let active = tracker_high_scores::ActiveModel {
        player_key: Set(player_key.to_string()),
        high_score: Set(score),
        updated_at: Set(OffsetDateTime::now_utc()),
    };

    tracker_high_scores::Entity::insert(active)
        .on_conflict(
            OnConflict::column(tracker_high_scores::Column::PlayerKey)
                .update_columns([
                    tracker_high_scores::Column::HighScore,
                    tracker_high_scores::Column::UpdatedAt,
                ])
                .action_and_where(
                    Expr::col((
                        tracker_high_scores::Entity,
                        tracker_high_scores::Column::HighScore,
                    ))
                    .lt(score),
                )
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    find_by_player_key(conn, player_key).await?.ok_or_else(|| {
        sea_orm::DbErr::RecordNotFound("tracker_high_scores.player_key not found".to_string())
    })
}

//! Repository layer for persisted tracker high scores.

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::adapters::high_scores_sea as adapter;
use crate::db::txn::with_txn;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;
use crate::services::tracker::HighScoreStore;

/// 0 when the player has no row yet.
pub async fn load<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_key: &str,
) -> Result<u32, DomainError> {
    let row = adapter::find_by_player_key(conn, player_key)
        .await
        .map_err(map_db_err)?;
    row.map(|r| to_score(r.high_score, player_key))
        .transpose()
        .map(Option::unwrap_or_default)
}

/// Raise the stored score to `score` if it is higher; returns the stored value.
pub async fn save<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_key: &str,
    score: u32,
) -> Result<u32, DomainError> {
    let score = i32::try_from(score)
        .map_err(|_| DomainError::validation(format!("score {score} out of range")))?;
    let row = adapter::raise_high_score(conn, player_key, score)
        .await
        .map_err(map_db_err)?;
    to_score(row.high_score, player_key)
}

/// `HighScoreStore` backed by `tracker_high_scores`.
#[derive(Debug, Clone)]
pub struct SeaHighScoreStore {
    db: DatabaseConnection,
}

impl SeaHighScoreStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HighScoreStore for SeaHighScoreStore {
    async fn load(&self, player_key: &str) -> Result<u32, DomainError> {
        load(&self.db, player_key).await
    }

    async fn save(&self, player_key: &str, score: u32) -> Result<u32, DomainError> {
        let key = player_key.to_owned();
        with_txn(&self.db, move |txn| {
            Box::pin(async move { save(txn, &key, score).await })
        })
        .await
    }
}

fn to_score(stored: i32, player_key: &str) -> Result<u32, DomainError> {
    u32::try_from(stored).map_err(|_| {
        DomainError::corruption(format!(
            "negative high_score {stored} stored for player_key={player_key}"
        ))
    })
}

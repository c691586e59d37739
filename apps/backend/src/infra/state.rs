use std::sync::Arc;

use async_trait::async_trait;
use db_infra::bootstrap_db;
use db_infra::db::{DbKind, RuntimeEnv};

use crate::config::TrackerConfig;
use crate::domain::round::Round;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::repos::high_scores::SeaHighScoreStore;
use crate::repos::tracker_rounds::{CelebName, SeaRoundSource};
use crate::services::tracker::{HighScoreStore, RoundSource, TrackerService};
use crate::state::app_state::AppState;

/// Builds `AppState` for `main` and for tests.
///
/// With a database the tracker reads rounds and high scores through SeaORM
/// unless `with_sources` overrides them. Without one, unset sources answer
/// every call with `DB_UNAVAILABLE`.
pub struct StateBuilder {
    env: RuntimeEnv,
    db_kind: Option<DbKind>,
    tracker_config: TrackerConfig,
    rounds: Option<Arc<dyn RoundSource>>,
    scores: Option<Arc<dyn HighScoreStore>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            env: RuntimeEnv::Test,
            db_kind: None,
            tracker_config: TrackerConfig::default(),
            rounds: None,
            scores: None,
        }
    }

    pub fn with_env(mut self, env: RuntimeEnv) -> Self {
        self.env = env;
        self
    }

    pub fn with_db(mut self, db_kind: DbKind) -> Self {
        self.db_kind = Some(db_kind);
        self
    }

    pub fn with_tracker_config(mut self, config: TrackerConfig) -> Self {
        self.tracker_config = config;
        self
    }

    pub fn with_sources(
        mut self,
        rounds: Arc<dyn RoundSource>,
        scores: Arc<dyn HighScoreStore>,
    ) -> Self {
        self.rounds = Some(rounds);
        self.scores = Some(scores);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let Some(db_kind) = self.db_kind else {
            let tracker = TrackerService::new(
                self.rounds.unwrap_or_else(|| Arc::new(Unavailable)),
                self.scores.unwrap_or_else(|| Arc::new(Unavailable)),
                self.tracker_config,
            );
            return Ok(AppState::without_db(tracker));
        };

        let conn = bootstrap_db(self.env, db_kind).await?;
        let rounds = self
            .rounds
            .unwrap_or_else(|| Arc::new(SeaRoundSource::new(conn.clone())));
        let scores = self
            .scores
            .unwrap_or_else(|| Arc::new(SeaHighScoreStore::new(conn.clone())));
        let tracker = TrackerService::new(rounds, scores, self.tracker_config);
        Ok(AppState::new(conn, tracker))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

struct Unavailable;

#[async_trait]
impl RoundSource for Unavailable {
    async fn fetch_round(&self, _excluded_ids: &[i64]) -> Result<Option<Round>, DomainError> {
        Err(DomainError::unavailable())
    }

    async fn celeb_names(&self) -> Result<Vec<CelebName>, DomainError> {
        Err(DomainError::unavailable())
    }
}

#[async_trait]
impl HighScoreStore for Unavailable {
    async fn load(&self, _player_key: &str) -> Result<u32, DomainError> {
        Err(DomainError::unavailable())
    }

    async fn save(&self, _player_key: &str, _score: u32) -> Result<u32, DomainError> {
        Err(DomainError::unavailable())
    }
}

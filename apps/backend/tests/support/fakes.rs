use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use archive_backend::domain::round::Round;
use archive_backend::errors::domain::{DomainError, InfraErrorKind};
use archive_backend::repos::tracker_rounds::CelebName;
use archive_backend::services::tracker::{HighScoreStore, RoundSource};
use async_trait::async_trait;
use parking_lot::Mutex;

/// Serves the first listed round whose subject is not excluded.
#[derive(Default)]
pub struct FakeRounds {
    rounds: Vec<Round>,
    delay: Option<Duration>,
    failing: AtomicBool,
    fetches: Mutex<Vec<Vec<i64>>>,
}

impl FakeRounds {
    pub fn new(rounds: Vec<Round>) -> Self {
        Self {
            rounds,
            ..Self::default()
        }
    }

    /// Every fetch sleeps first (use with paused time).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Exclusion lists seen so far.
    pub fn fetches(&self) -> Vec<Vec<i64>> {
        self.fetches.lock().clone()
    }
}

#[async_trait]
impl RoundSource for FakeRounds {
    async fn fetch_round(&self, excluded_ids: &[i64]) -> Result<Option<Round>, DomainError> {
        self.fetches.lock().push(excluded_ids.to_vec());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::unavailable());
        }
        Ok(self
            .rounds
            .iter()
            .find(|r| !excluded_ids.contains(&r.subject_id))
            .cloned())
    }

    async fn celeb_names(&self) -> Result<Vec<CelebName>, DomainError> {
        let mut names: Vec<CelebName> = self
            .rounds
            .iter()
            .map(|r| CelebName {
                id: r.subject_id,
                nickname: r.subject_name.clone(),
            })
            .collect();
        names.sort_by(|a, b| a.nickname.cmp(&b.nickname));
        Ok(names)
    }
}

#[derive(Default)]
pub struct MemoryHighScores {
    scores: Mutex<HashMap<String, u32>>,
    failing_saves: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryHighScores {
    pub fn with_score(self, player_key: &str, score: u32) -> Self {
        self.scores.lock().insert(player_key.to_string(), score);
        self
    }

    pub fn get(&self, player_key: &str) -> Option<u32> {
        self.scores.lock().get(player_key).copied()
    }

    pub fn save_calls(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn set_failing_saves(&self, failing: bool) {
        self.failing_saves.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl HighScoreStore for MemoryHighScores {
    async fn load(&self, player_key: &str) -> Result<u32, DomainError> {
        Ok(self.get(player_key).unwrap_or(0))
    }

    async fn save(&self, player_key: &str, score: u32) -> Result<u32, DomainError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.failing_saves.load(Ordering::SeqCst) {
            return Err(DomainError::infra(InfraErrorKind::Timeout, "Database timeout"));
        }
        let mut scores = self.scores.lock();
        let stored = scores.entry(player_key.to_string()).or_insert(0);
        *stored = (*stored).max(score);
        Ok(*stored)
    }
}

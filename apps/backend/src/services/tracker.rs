//! Tracker game service: owns live sessions and drives `GameSession`.
//!
//! Each session sits in a `moka` cache behind a `parking_lot::Mutex`. The
//! lock is only ever held for synchronous state transitions; round fetches
//! and high-score writes run with it released. Stage countdowns are detached
//! tokio tasks holding a `Weak` back-reference, so a dropped service cancels
//! nothing explicitly but fires nothing either.

use std::sync::{Arc, Weak};

use async_trait::async_trait;
use moka::future::Cache;
use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::TrackerConfig;
use crate::domain::errors::GameError;
use crate::domain::round::Round;
use crate::domain::session::{GameSession, LoadTicket, Outcome};
use crate::domain::tracker_view::TrackerView;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;
use crate::repos::tracker_rounds::CelebName;

pub const MAX_PLAYER_KEY_LEN: usize = 128;

/// Where rounds and the autocomplete list come from.
#[async_trait]
pub trait RoundSource: Send + Sync {
    /// A fresh round whose subject is not in `excluded_ids`, or `None` when
    /// nobody eligible is left.
    async fn fetch_round(&self, excluded_ids: &[i64]) -> Result<Option<Round>, DomainError>;

    async fn celeb_names(&self) -> Result<Vec<CelebName>, DomainError>;
}

/// Persisted best scores keyed by an opaque player key.
#[async_trait]
pub trait HighScoreStore: Send + Sync {
    async fn load(&self, player_key: &str) -> Result<u32, DomainError>;

    /// Only ever raises the stored value. Returns what is stored afterwards.
    async fn save(&self, player_key: &str, score: u32) -> Result<u32, DomainError>;
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    #[serde(flatten)]
    pub view: TrackerView,
    pub stage_seconds: u64,
    pub reveal_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionResponse {
    pub outcome: Outcome,
    pub session: SessionSnapshot,
}

struct SessionEntry {
    game: GameSession,
    player_key: Option<String>,
    /// Timer key a countdown is already running for.
    armed_key: Option<u64>,
}

type SessionHandle = Arc<Mutex<SessionEntry>>;

/// High score to write once the session lock is released.
type PendingSave = Option<(String, u32)>;

struct Inner {
    sessions: Cache<Uuid, SessionHandle>,
    rounds: Arc<dyn RoundSource>,
    scores: Arc<dyn HighScoreStore>,
    config: TrackerConfig,
}

#[derive(Clone)]
pub struct TrackerService {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for TrackerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackerService")
            .field("sessions", &self.inner.sessions.entry_count())
            .field("config", &self.inner.config)
            .finish()
    }
}

impl TrackerService {
    pub fn new(
        rounds: Arc<dyn RoundSource>,
        scores: Arc<dyn HighScoreStore>,
        config: TrackerConfig,
    ) -> Self {
        let sessions = Cache::builder()
            .max_capacity(config.max_sessions)
            .time_to_idle(config.session_idle)
            .build();
        Self {
            inner: Arc::new(Inner {
                sessions,
                rounds,
                scores,
                config,
            }),
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.inner.config
    }

    /// Sessions still held, after flushing pending evictions.
    pub async fn live_sessions(&self) -> u64 {
        self.inner.sessions.run_pending_tasks().await;
        self.inner.sessions.entry_count()
    }

    /// New idle session. With a player key the persisted high score is loaded.
    pub async fn create_session(
        &self,
        player_key: Option<String>,
    ) -> Result<SessionSnapshot, AppError> {
        let player_key = player_key.map(validate_player_key).transpose()?;
        let high_score = match &player_key {
            Some(key) => self.inner.scores.load(key).await?,
            None => 0,
        };

        let id = Uuid::new_v4();
        let entry = SessionEntry {
            game: GameSession::new(high_score),
            player_key,
            armed_key: None,
        };
        let snapshot = self.snapshot_of(id, &entry.game);
        info!(
            session_id = %id,
            has_player_key = entry.player_key.is_some(),
            high_score,
            "tracker.session_created"
        );
        self.inner
            .sessions
            .insert(id, Arc::new(Mutex::new(entry)))
            .await;
        Ok(snapshot)
    }

    pub async fn snapshot(&self, id: Uuid) -> Result<SessionSnapshot, AppError> {
        let handle = self.session(id).await?;
        let entry = handle.lock();
        Ok(self.snapshot_of(id, &entry.game))
    }

    pub async fn start(&self, id: Uuid) -> Result<ActionResponse, AppError> {
        let handle = self.session(id).await?;
        let ticket = handle.lock().game.begin_start()?;
        self.load_round(id, &handle, ticket).await
    }

    pub async fn next(&self, id: Uuid) -> Result<ActionResponse, AppError> {
        let handle = self.session(id).await?;
        let ticket = handle.lock().game.begin_next()?;
        self.load_round(id, &handle, ticket).await
    }

    pub async fn guess(&self, id: Uuid, guess: &str) -> Result<ActionResponse, AppError> {
        let response = self.act(id, |game| game.submit_guess(guess)).await?;
        debug!(
            session_id = %id,
            stage = response.session.view.stage.as_str(),
            correct = matches!(response.outcome, Outcome::Correct { .. }),
            "tracker.guess"
        );
        Ok(response)
    }

    pub async fn pass(&self, id: Uuid) -> Result<ActionResponse, AppError> {
        self.act(id, GameSession::pass).await
    }

    /// Client-reported countdown expiry; a stale key is a no-op.
    pub async fn timeout(&self, id: Uuid, timer_key: u64) -> Result<ActionResponse, AppError> {
        self.act(id, |game| game.timeout(timer_key)).await
    }

    pub async fn choose(&self, id: Uuid, candidate_id: i64) -> Result<ActionResponse, AppError> {
        self.act(id, |game| game.choose_option(candidate_id)).await
    }

    pub async fn go_to_result(&self, id: Uuid) -> Result<ActionResponse, AppError> {
        self.act(id, GameSession::go_to_result).await
    }

    pub async fn quit(&self, id: Uuid) -> Result<ActionResponse, AppError> {
        self.act(id, |game| Ok(game.quit())).await
    }

    pub async fn celeb_names(&self) -> Result<Vec<CelebName>, AppError> {
        Ok(self.inner.rounds.celeb_names().await?)
    }

    pub async fn high_score(&self, player_key: &str) -> Result<u32, AppError> {
        let key = validate_player_key(player_key.to_string())?;
        Ok(self.inner.scores.load(&key).await?)
    }

    async fn session(&self, id: Uuid) -> Result<SessionHandle, AppError> {
        self.inner.sessions.get(&id).await.ok_or_else(|| {
            AppError::not_found(ErrorCode::SessionNotFound, format!("Session {id} not found"))
        })
    }

    async fn act<F>(&self, id: Uuid, f: F) -> Result<ActionResponse, AppError>
    where
        F: FnOnce(&mut GameSession) -> Result<Outcome, GameError>,
    {
        let handle = self.session(id).await?;
        let (response, pending) = self.apply(id, &handle, f)?;
        self.persist(pending).await;
        Ok(response)
    }

    /// Run one transition under the lock, arm the next countdown and note
    /// whether the high score moved.
    fn apply<F>(
        &self,
        id: Uuid,
        handle: &SessionHandle,
        f: F,
    ) -> Result<(ActionResponse, PendingSave), AppError>
    where
        F: FnOnce(&mut GameSession) -> Result<Outcome, GameError>,
    {
        let mut entry = handle.lock();
        let before = entry.game.high_score();
        let outcome = f(&mut entry.game)?;

        let after = entry.game.high_score();
        let pending = entry
            .player_key
            .clone()
            .filter(|_| after > before)
            .map(|key| (key, after));

        self.arm_timer(id, &mut entry);
        let session = self.snapshot_of(id, &entry.game);
        Ok((ActionResponse { outcome, session }, pending))
    }

    async fn load_round(
        &self,
        id: Uuid,
        handle: &SessionHandle,
        ticket: LoadTicket,
    ) -> Result<ActionResponse, AppError> {
        match self.inner.rounds.fetch_round(&ticket.excluded_ids).await {
            Ok(round) => {
                let subject_id = round.as_ref().map(|r| r.subject_id);
                let (response, pending) =
                    self.apply(id, handle, |game| Ok(game.finish_loading(&ticket, round)))?;
                match response.outcome {
                    Outcome::RoundStarted { .. } => info!(
                        session_id = %id,
                        subject_id,
                        played = response.session.view.played_count,
                        "tracker.round_started"
                    ),
                    Outcome::NoRoundAvailable => info!(
                        session_id = %id,
                        excluded = ticket.excluded_ids.len(),
                        "tracker.no_round_available"
                    ),
                    _ => debug!(session_id = %id, "tracker.load_discarded"),
                }
                self.persist(pending).await;
                Ok(response)
            }
            Err(e) => {
                handle.lock().game.abort_loading(&ticket);
                warn!(session_id = %id, error = %e, "tracker.round_fetch_failed");
                Err(e.into())
            }
        }
    }

    async fn persist(&self, pending: PendingSave) {
        let Some((player_key, score)) = pending else {
            return;
        };
        if let Err(e) = self.inner.scores.save(&player_key, score).await {
            warn!(
                score,
                transient = e.is_transient(),
                error = %e,
                "tracker.high_score_save_failed"
            );
        }
    }

    fn arm_timer(&self, id: Uuid, entry: &mut SessionEntry) {
        let Some(duration) = self.inner.config.stage_duration() else {
            return;
        };
        let key = entry.game.timer_key();
        if !entry.game.awaiting_answer() || entry.armed_key == Some(key) {
            return;
        }
        entry.armed_key = Some(key);

        let weak: Weak<Inner> = Arc::downgrade(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let Some(inner) = weak.upgrade() else {
                return;
            };
            TrackerService { inner }.fire_timeout(id, key).await;
        });
    }

    async fn fire_timeout(&self, id: Uuid, key: u64) {
        match self.act(id, |game| game.timeout(key)).await {
            Ok(response) if response.outcome != Outcome::Ignored => info!(
                session_id = %id,
                timer_key = key,
                stage = response.session.view.stage.as_str(),
                "tracker.timeout_fired"
            ),
            Ok(_) => {}
            Err(e) => debug!(session_id = %id, timer_key = key, error = %e, "tracker.timeout_dropped"),
        }
    }

    fn snapshot_of(&self, id: Uuid, game: &GameSession) -> SessionSnapshot {
        SessionSnapshot {
            id,
            view: TrackerView::of(game),
            stage_seconds: self.inner.config.stage_seconds,
            reveal_delay_ms: self.inner.config.reveal_delay_ms,
        }
    }
}

fn validate_player_key(raw: String) -> Result<String, AppError> {
    let key = raw.trim();
    let len = key.chars().count();
    if len == 0 || len > MAX_PLAYER_KEY_LEN {
        return Err(AppError::invalid(
            ErrorCode::InvalidPlayerKey,
            format!("player_key must be 1 to {MAX_PLAYER_KEY_LEN} characters"),
        ));
    }
    Ok(key.to_string())
}

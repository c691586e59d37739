//! The tracker game state machine.
//!
//! `GameSession` is synchronous and owns no I/O. The service layer fetches
//! rounds, persists high scores and arms timers around it.

use serde::Serialize;

use crate::domain::errors::GameError;
use crate::domain::nickname::match_nickname;
use crate::domain::round::Round;
use crate::domain::stage::{next_stage, Stage};

/// What an action did, returned next to the refreshed snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    RoundStarted { stage: Stage },
    /// Every eligible subject has been played (or none exist).
    NoRoundAvailable,
    Correct { stage: Stage, points: u32 },
    /// Silent miss; `wrong_signal` lets the client replay a shake animation.
    Wrong { stage: Stage, wrong_signal: u64 },
    ContentRevealed { revealed: usize },
    Advanced { stage: Stage },
    GaveUp { answer_id: i64 },
    Chose { correct: bool, points: u32, answer_id: i64 },
    ShowingResult,
    /// Stale timer or a load that lost its race with quit.
    Ignored,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundEnding {
    Solved,
    ChoiceCorrect,
    ChoiceWrong,
    GaveUp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    pub subject_id: i64,
    pub subject_name: String,
    pub ending: RoundEnding,
    pub solved_stage: Option<Stage>,
    pub points: u32,
}

/// Handed out by `begin_start`/`begin_next`; the fetched round is only
/// accepted if the session is still waiting on this ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub key: u64,
    pub excluded_ids: Vec<i64>,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    stage: Stage,
    round: Option<Round>,
    score: u32,
    high_score: u32,
    streak: u32,
    solved_at: Option<Stage>,
    revealed_contents: usize,
    timer_key: u64,
    wrong_signal: u64,
    played_ids: Vec<i64>,
    last_result: Option<RoundResult>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(0)
    }
}

impl GameSession {
    pub fn new(high_score: u32) -> Self {
        Self {
            stage: Stage::Idle,
            round: None,
            score: 0,
            high_score,
            streak: 0,
            solved_at: None,
            revealed_contents: 0,
            timer_key: 0,
            wrong_signal: 0,
            played_ids: Vec::new(),
            last_result: None,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }
    pub fn score(&self) -> u32 {
        self.score
    }
    pub fn high_score(&self) -> u32 {
        self.high_score
    }
    pub fn streak(&self) -> u32 {
        self.streak
    }
    pub fn solved_at(&self) -> Option<Stage> {
        self.solved_at
    }
    pub fn revealed_contents(&self) -> usize {
        self.revealed_contents
    }
    pub fn timer_key(&self) -> u64 {
        self.timer_key
    }
    pub fn wrong_signal(&self) -> u64 {
        self.wrong_signal
    }
    pub fn played_ids(&self) -> &[i64] {
        &self.played_ids
    }
    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// True while the current stage still needs an answer, so a countdown applies.
    pub fn awaiting_answer(&self) -> bool {
        self.stage.is_timed() && self.solved_at.is_none()
    }

    pub fn begin_start(&mut self) -> Result<LoadTicket, GameError> {
        self.begin_loading("start", Stage::Idle)
    }

    pub fn begin_next(&mut self) -> Result<LoadTicket, GameError> {
        self.begin_loading("move to the next round", Stage::Result)
    }

    fn begin_loading(&mut self, action: &'static str, from: Stage) -> Result<LoadTicket, GameError> {
        if self.stage == Stage::Loading {
            return Err(GameError::RoundLoading);
        }
        if self.stage != from {
            return Err(GameError::InvalidStage {
                action,
                stage: self.stage,
            });
        }
        self.round = None;
        self.solved_at = None;
        self.revealed_contents = 0;
        self.last_result = None;
        self.enter(Stage::Loading);
        Ok(LoadTicket {
            key: self.timer_key,
            excluded_ids: self.played_ids.clone(),
        })
    }

    /// Apply a fetch result. `None` means nothing is left to play.
    pub fn finish_loading(&mut self, ticket: &LoadTicket, round: Option<Round>) -> Outcome {
        if self.stage != Stage::Loading || self.timer_key != ticket.key {
            return Outcome::Ignored;
        }
        match round {
            None => {
                self.enter(Stage::Idle);
                Outcome::NoRoundAvailable
            }
            Some(round) => {
                if !self.played_ids.contains(&round.subject_id) {
                    self.played_ids.push(round.subject_id);
                }
                self.round = Some(round);
                self.enter(Stage::Stat);
                Outcome::RoundStarted { stage: Stage::Stat }
            }
        }
    }

    /// A fetch failed; fall back to idle if the session still waits on it.
    pub fn abort_loading(&mut self, ticket: &LoadTicket) {
        if self.stage == Stage::Loading && self.timer_key == ticket.key {
            self.enter(Stage::Idle);
        }
    }

    pub fn submit_guess(&mut self, guess: &str) -> Result<Outcome, GameError> {
        let stage = self.stage;
        if !stage.is_reveal() {
            return Err(GameError::InvalidStage {
                action: "guess",
                stage,
            });
        }
        if let Some(solved) = self.solved_at {
            return Err(GameError::AlreadySolved(solved));
        }
        let (hit, content_count) = {
            let round = self.require_round("guess")?;
            (
                match_nickname(guess, &round.subject_name),
                round.content_count(),
            )
        };

        if hit {
            let points = stage.points();
            self.award(points);
            self.solved_at = Some(stage);
            self.timer_key += 1;
            self.record_result(RoundEnding::Solved, Some(stage), points);
            return Ok(Outcome::Correct { stage, points });
        }

        self.wrong_signal += 1;
        if stage == Stage::Content && self.revealed_contents < content_count {
            self.revealed_contents += 1;
            self.timer_key += 1;
        }
        Ok(Outcome::Wrong {
            stage,
            wrong_signal: self.wrong_signal,
        })
    }

    pub fn pass(&mut self) -> Result<Outcome, GameError> {
        let stage = self.stage;
        if stage == Stage::Choice {
            return Ok(self.give_up());
        }
        if !stage.is_reveal() {
            return Err(GameError::InvalidStage {
                action: "pass",
                stage,
            });
        }
        if let Some(solved) = self.solved_at {
            return Err(GameError::AlreadySolved(solved));
        }

        let round = self.require_round("pass")?;
        if stage == Stage::Content && self.revealed_contents < round.content_count() {
            self.revealed_contents += 1;
            self.timer_key += 1;
            return Ok(Outcome::ContentRevealed {
                revealed: self.revealed_contents,
            });
        }
        let next = next_stage(round, stage);
        self.enter(next);
        Ok(Outcome::Advanced { stage: next })
    }

    /// Countdown expiry. Acts as `pass` only when `key` is still current.
    pub fn timeout(&mut self, key: u64) -> Result<Outcome, GameError> {
        if key != self.timer_key || !self.awaiting_answer() {
            return Ok(Outcome::Ignored);
        }
        self.pass()
    }

    pub fn choose_option(&mut self, candidate_id: i64) -> Result<Outcome, GameError> {
        if self.stage != Stage::Choice {
            return Err(GameError::InvalidStage {
                action: "choose",
                stage: self.stage,
            });
        }
        let answer_id = {
            let round = self.require_round("choose")?;
            if !round.is_candidate(candidate_id) {
                return Err(GameError::UnknownCandidate(candidate_id));
            }
            round.subject_id
        };

        let correct = candidate_id == answer_id;
        let points = if correct { Stage::Choice.points() } else { 0 };
        if correct {
            self.award(points);
            self.solved_at = Some(Stage::Choice);
            self.record_result(RoundEnding::ChoiceCorrect, Some(Stage::Choice), points);
        } else {
            self.streak = 0;
            self.record_result(RoundEnding::ChoiceWrong, None, 0);
        }
        self.enter(Stage::Result);
        Ok(Outcome::Chose {
            correct,
            points,
            answer_id,
        })
    }

    pub fn go_to_result(&mut self) -> Result<Outcome, GameError> {
        match self.solved_at {
            None => Err(GameError::NotSolved),
            Some(_) if self.stage == Stage::Result => Err(GameError::InvalidStage {
                action: "show the result",
                stage: self.stage,
            }),
            Some(_) => {
                self.enter(Stage::Result);
                Ok(Outcome::ShowingResult)
            }
        }
    }

    /// Leave the game. Score, streak and the played list reset; the high
    /// score stays.
    pub fn quit(&mut self) -> Outcome {
        self.score = 0;
        self.streak = 0;
        self.played_ids.clear();
        self.round = None;
        self.solved_at = None;
        self.revealed_contents = 0;
        self.last_result = None;
        self.enter(Stage::Idle);
        Outcome::Quit
    }

    fn give_up(&mut self) -> Outcome {
        self.streak = 0;
        self.record_result(RoundEnding::GaveUp, None, 0);
        let answer_id = self.round.as_ref().map_or(0, |r| r.subject_id);
        self.enter(Stage::Result);
        Outcome::GaveUp { answer_id }
    }

    fn award(&mut self, points: u32) {
        self.score += points;
        self.streak += 1;
        self.high_score = self.high_score.max(self.score);
    }

    fn record_result(&mut self, ending: RoundEnding, solved_stage: Option<Stage>, points: u32) {
        if let Some(round) = &self.round {
            self.last_result = Some(RoundResult {
                subject_id: round.subject_id,
                subject_name: round.subject_name.clone(),
                ending,
                solved_stage,
                points,
            });
        }
    }

    fn enter(&mut self, stage: Stage) {
        self.stage = stage;
        self.timer_key += 1;
        if stage == Stage::Content {
            let count = self.round.as_ref().map_or(0, Round::content_count);
            self.revealed_contents = count.min(1);
        }
    }

    fn require_round(&self, action: &'static str) -> Result<&Round, GameError> {
        self.round.as_ref().ok_or(GameError::InvalidStage {
            action,
            stage: self.stage,
        })
    }
}

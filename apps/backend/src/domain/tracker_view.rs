//! Player-facing snapshot of a `GameSession`.
//!
//! Nothing here may give the answer away: the subject's identity appears only
//! once the round is solved or over, candidates only from `choice` on, and
//! clues only for stages the player has reached.

use serde::Serialize;

use crate::domain::round::{Candidate, PersonaStat, Round, RoundContent};
use crate::domain::session::{GameSession, RoundResult};
use crate::domain::stage::{reached, stage_plan, Stage};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub id: i64,
    pub name: String,
    pub title: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clues {
    pub stats: Vec<PersonaStat>,
    pub contents: Vec<RoundContent>,
    pub content_total: usize,
    pub philosophy: Option<String>,
    pub bio: Option<String>,
    pub quotes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackerView {
    pub stage: Stage,
    pub score: u32,
    pub high_score: u32,
    pub streak: u32,
    pub timer_key: u64,
    pub wrong_signal: u64,
    pub solved_stage: Option<Stage>,
    /// Points a correct answer is worth right now.
    pub stage_points: u32,
    pub played_count: usize,
    pub plan: Vec<Stage>,
    pub clues: Option<Clues>,
    pub candidates: Option<Vec<Candidate>>,
    pub answer: Option<Answer>,
    pub last_result: Option<RoundResult>,
}

impl TrackerView {
    pub fn of(session: &GameSession) -> Self {
        let stage = session.stage();
        let round = session.round();
        let revealed = session.solved_at().is_some() || stage == Stage::Result;

        TrackerView {
            stage,
            score: session.score(),
            high_score: session.high_score(),
            streak: session.streak(),
            timer_key: session.timer_key(),
            wrong_signal: session.wrong_signal(),
            solved_stage: session.solved_at(),
            stage_points: if session.awaiting_answer() {
                stage.points()
            } else {
                0
            },
            played_count: session.played_ids().len(),
            plan: round.map(stage_plan).unwrap_or_default(),
            clues: round.map(|r| clues(r, stage, session.revealed_contents())),
            candidates: round
                .filter(|_| matches!(stage, Stage::Choice | Stage::Result))
                .map(|r| r.candidates.clone()),
            answer: round.filter(|_| revealed).map(|r| Answer {
                id: r.subject_id,
                name: r.subject_name.clone(),
                title: r.title.clone(),
                avatar_url: r.avatar_url.clone(),
            }),
            last_result: session.last_result().cloned(),
        }
    }
}

fn clues(round: &Round, stage: Stage, revealed_contents: usize) -> Clues {
    let shown = |s: Stage| reached(round, stage, s);
    let text = |s: Stage, field: &Option<String>| {
        if shown(s) {
            field.clone().filter(|t| !t.trim().is_empty())
        } else {
            None
        }
    };

    let content_limit = if stage == Stage::Result {
        round.content_count()
    } else if shown(Stage::Content) {
        revealed_contents.min(round.content_count())
    } else {
        0
    };

    Clues {
        stats: round.stats.clone(),
        contents: round.contents.iter().take(content_limit).cloned().collect(),
        content_total: round.content_count(),
        philosophy: text(Stage::Philosophy, &round.philosophy),
        bio: text(Stage::Bio, &round.bio),
        quotes: text(Stage::Quotes, &round.quotes),
    }
}

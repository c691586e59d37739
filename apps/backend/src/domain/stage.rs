//! Tracker stages, their point values and the per-round stage plan.

use serde::{Deserialize, Serialize};

use crate::domain::round::Round;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Idle,
    Loading,
    Stat,
    Content,
    Philosophy,
    Bio,
    Quotes,
    Choice,
    Result,
}

impl Stage {
    /// Stages where a free-text guess is accepted, in reveal order.
    pub const REVEAL: [Stage; 5] = [
        Stage::Stat,
        Stage::Content,
        Stage::Philosophy,
        Stage::Bio,
        Stage::Quotes,
    ];

    /// Points for solving the round at this stage.
    pub const fn points(self) -> u32 {
        match self {
            Stage::Stat => 6,
            Stage::Content => 5,
            Stage::Philosophy => 4,
            Stage::Bio => 3,
            Stage::Quotes => 2,
            Stage::Choice => 1,
            Stage::Idle | Stage::Loading | Stage::Result => 0,
        }
    }

    pub const fn is_reveal(self) -> bool {
        matches!(
            self,
            Stage::Stat | Stage::Content | Stage::Philosophy | Stage::Bio | Stage::Quotes
        )
    }

    /// Stages that run a countdown.
    pub const fn is_timed(self) -> bool {
        self.is_reveal() || matches!(self, Stage::Choice)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Stage::Idle => "idle",
            Stage::Loading => "loading",
            Stage::Stat => "stat",
            Stage::Content => "content",
            Stage::Philosophy => "philosophy",
            Stage::Bio => "bio",
            Stage::Quotes => "quotes",
            Stage::Choice => "choice",
            Stage::Result => "result",
        }
    }
}

/// Stages a round will actually visit, from `stat` through `result`.
/// Clue stages without material are left out.
pub fn stage_plan(round: &Round) -> Vec<Stage> {
    let mut plan = Vec::with_capacity(7);
    plan.push(Stage::Stat);
    if round.has_contents() {
        plan.push(Stage::Content);
    }
    if round.has_philosophy() {
        plan.push(Stage::Philosophy);
    }
    if round.has_bio() {
        plan.push(Stage::Bio);
    }
    if round.has_quotes() {
        plan.push(Stage::Quotes);
    }
    plan.push(Stage::Choice);
    plan.push(Stage::Result);
    plan
}

/// The stage that follows `current` in this round's plan.
pub fn next_stage(round: &Round, current: Stage) -> Stage {
    let plan = stage_plan(round);
    plan.iter()
        .position(|s| *s == current)
        .and_then(|i| plan.get(i + 1).copied())
        .unwrap_or(Stage::Result)
}

/// True when `stage` has been shown to the player, given the current stage.
pub fn reached(round: &Round, current: Stage, stage: Stage) -> bool {
    if current == Stage::Result {
        return true;
    }
    let plan = stage_plan(round);
    match (
        plan.iter().position(|s| *s == stage),
        plan.iter().position(|s| *s == current),
    ) {
        (Some(target), Some(now)) => target <= now,
        _ => false,
    }
}

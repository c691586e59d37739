use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::stage::Stage;

/// Rule violations of the tracker state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// `action` is not allowed while the session sits in `stage`.
    InvalidStage { action: &'static str, stage: Stage },
    /// A round fetch is already running for this session.
    RoundLoading,
    AlreadySolved(Stage),
    NotSolved,
    UnknownCandidate(i64),
}

impl Display for GameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            GameError::InvalidStage { action, stage } => {
                write!(f, "cannot {action} during stage {}", stage.as_str())
            }
            GameError::RoundLoading => write!(f, "a round is already loading"),
            GameError::AlreadySolved(stage) => {
                write!(f, "round already solved at stage {}", stage.as_str())
            }
            GameError::NotSolved => write!(f, "round has not been solved"),
            GameError::UnknownCandidate(id) => write!(f, "candidate {id} is not part of this round"),
        }
    }
}

impl Error for GameError {}

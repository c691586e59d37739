pub mod library;
pub mod tracker;

pub use tracker::{ActionResponse, HighScoreStore, RoundSource, SessionSnapshot, TrackerService};

//! Domain layer: pure tracker and library logic, no I/O.

pub mod catalog;
pub mod errors;
pub mod fixtures;
pub mod library;
pub mod nickname;
pub mod round;
pub mod session;
pub mod stage;
pub mod tracker_view;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_library;
#[cfg(test)]
mod tests_props_session;
#[cfg(test)]
mod tests_session;
#[cfg(test)]
mod tests_stage_plan;
#[cfg(test)]
mod tests_view;

// Re-exports for ergonomics
pub use errors::GameError;
pub use nickname::match_nickname;
pub use round::Round;
pub use session::{GameSession, Outcome};
pub use stage::Stage;
pub use tracker_view::TrackerView;

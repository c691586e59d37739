//! Repositories: domain-typed reads and writes over the SeaORM adapters.

pub mod high_scores;
pub mod library;
pub mod tracker_rounds;

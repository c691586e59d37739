//! SeaORM adapters. Functions return `DbErr`; repos map to `DomainError`.

pub mod high_scores_sea;
pub mod profiles_sea;
pub mod user_contents_sea;

// Pure error mapping, no HTTP server or database.
use crate::domain::errors::GameError;
use crate::domain::stage::Stage;
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_422() {
    let app: AppError = DomainError::validation("page_size out of range").into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 422);
}

#[test]
fn maps_conflicts() {
    let app: AppError = DomainError::conflict(ConflictKind::Unique, "dup").into();
    assert_eq!(app.code(), ErrorCode::UniqueViolation);
    assert_eq!(app.status().as_u16(), 409);

    let app: AppError = DomainError::conflict(ConflictKind::Other("x".into()), "other").into();
    assert_eq!(app.code(), ErrorCode::Conflict);
}

#[test]
fn maps_not_found() {
    let app: AppError = DomainError::not_found(NotFoundKind::Session, "no session").into();
    assert_eq!(app.code(), ErrorCode::SessionNotFound);
    assert_eq!(app.status().as_u16(), 404);

    let app: AppError = DomainError::profile_not_found(7).into();
    assert_eq!(app.code(), ErrorCode::ProfileNotFound);
    assert!(app.to_string().contains("Profile 7"));
}

#[test]
fn only_timeouts_and_outages_are_transient() {
    assert!(DomainError::unavailable().is_transient());
    assert!(DomainError::infra(InfraErrorKind::Timeout, "slow").is_transient());
    assert!(!DomainError::corruption("bad row").is_transient());
    assert!(!DomainError::validation("nope").is_transient());
}

#[test]
fn maps_infra() {
    let app: AppError = DomainError::infra(InfraErrorKind::Timeout, "slow").into();
    assert_eq!(app.code(), ErrorCode::DbTimeout);
    assert_eq!(app.status().as_u16(), 504);

    let app: AppError = DomainError::infra(InfraErrorKind::DbUnavailable, "down").into();
    assert_eq!(app.code(), ErrorCode::DbUnavailable);
    assert_eq!(app.status().as_u16(), 503);

    let app: AppError = DomainError::corruption("bad enum").into();
    assert_eq!(app.code(), ErrorCode::DataCorruption);
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn maps_game_errors() {
    let app: AppError = GameError::InvalidStage {
        action: "guess",
        stage: Stage::Idle,
    }
    .into();
    assert_eq!(app.code(), ErrorCode::InvalidStage);
    assert_eq!(app.status().as_u16(), 409);

    let app: AppError = GameError::RoundLoading.into();
    assert_eq!(app.code(), ErrorCode::RoundLoading);

    let app: AppError = GameError::AlreadySolved(Stage::Bio).into();
    assert_eq!(app.code(), ErrorCode::RoundAlreadySolved);

    let app: AppError = GameError::NotSolved.into();
    assert_eq!(app.code(), ErrorCode::RoundNotSolved);

    let app: AppError = GameError::UnknownCandidate(9).into();
    assert_eq!(app.code(), ErrorCode::UnknownCandidate);
    assert_eq!(app.status().as_u16(), 422);
}

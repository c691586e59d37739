use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extractors::{SessionId, ValidatedJson, ValidatedQuery};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub player_key: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GuessRequest {
    pub guess: String,
}

#[derive(Debug, Deserialize)]
pub struct TimeoutRequest {
    pub timer_key: u64,
}

#[derive(Debug, Deserialize)]
pub struct ChooseRequest {
    pub candidate_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct HighScoreQuery {
    pub player_key: String,
}

#[derive(Debug, Serialize)]
struct HighScoreResponse {
    high_score: u32,
}

async fn create_session(
    body: ValidatedJson<CreateSessionRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let snapshot = app_state
        .tracker
        .create_session(body.into_inner().player_key)
        .await?;
    Ok(HttpResponse::Created().json(snapshot))
}

async fn get_session(
    id: SessionId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(app_state.tracker.snapshot(id.0).await?))
}

async fn start(id: SessionId, app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(app_state.tracker.start(id.0).await?))
}

async fn next(id: SessionId, app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(app_state.tracker.next(id.0).await?))
}

async fn guess(
    id: SessionId,
    body: ValidatedJson<GuessRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let response = app_state.tracker.guess(id.0, &body.guess).await?;
    Ok(HttpResponse::Ok().json(response))
}

async fn pass(id: SessionId, app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(app_state.tracker.pass(id.0).await?))
}

async fn timeout(
    id: SessionId,
    body: ValidatedJson<TimeoutRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let response = app_state.tracker.timeout(id.0, body.timer_key).await?;
    Ok(HttpResponse::Ok().json(response))
}

async fn choose(
    id: SessionId,
    body: ValidatedJson<ChooseRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let response = app_state.tracker.choose(id.0, body.candidate_id).await?;
    Ok(HttpResponse::Ok().json(response))
}

async fn result(id: SessionId, app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(app_state.tracker.go_to_result(id.0).await?))
}

async fn quit(id: SessionId, app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(app_state.tracker.quit(id.0).await?))
}

async fn celeb_names(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(app_state.tracker.celeb_names().await?))
}

async fn high_score(
    query: ValidatedQuery<HighScoreQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let high_score = app_state.tracker.high_score(&query.player_key).await?;
    Ok(HttpResponse::Ok().json(HighScoreResponse { high_score }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/sessions", web::post().to(create_session))
        .route("/sessions/{session_id}", web::get().to(get_session))
        .route("/sessions/{session_id}/start", web::post().to(start))
        .route("/sessions/{session_id}/next", web::post().to(next))
        .route("/sessions/{session_id}/guess", web::post().to(guess))
        .route("/sessions/{session_id}/pass", web::post().to(pass))
        .route("/sessions/{session_id}/timeout", web::post().to(timeout))
        .route("/sessions/{session_id}/choose", web::post().to(choose))
        .route("/sessions/{session_id}/result", web::post().to(result))
        .route("/sessions/{session_id}/quit", web::post().to(quit))
        .route("/celeb-names", web::get().to(celeb_names))
        .route("/high-score", web::get().to(high_score));
}

//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use db_infra::db::DbKind;

use crate::error::AppError;

pub const DEFAULT_STAGE_SECONDS: u64 = 20;
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 1200;
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 1800;
pub const DEFAULT_MAX_SESSIONS: u64 = 10_000;

/// Knobs for the tracker game service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Countdown per timed stage; 0 disables server-side timers.
    pub stage_seconds: u64,
    /// How long clients show the choice feedback before the result.
    pub reveal_delay_ms: u64,
    pub session_idle: Duration,
    pub max_sessions: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            stage_seconds: DEFAULT_STAGE_SECONDS,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            session_idle: Duration::from_secs(DEFAULT_SESSION_IDLE_SECS),
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl TrackerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let session_idle_secs = parse_var("TRACKER_SESSION_IDLE_SECS", DEFAULT_SESSION_IDLE_SECS)?;
        if session_idle_secs == 0 {
            return Err(AppError::config("TRACKER_SESSION_IDLE_SECS must be at least 1"));
        }
        let max_sessions = parse_var("TRACKER_MAX_SESSIONS", DEFAULT_MAX_SESSIONS)?;
        if max_sessions == 0 {
            return Err(AppError::config("TRACKER_MAX_SESSIONS must be at least 1"));
        }

        Ok(Self {
            stage_seconds: parse_var("TRACKER_STAGE_SECONDS", DEFAULT_STAGE_SECONDS)?,
            reveal_delay_ms: parse_var("TRACKER_REVEAL_DELAY_MS", DEFAULT_REVEAL_DELAY_MS)?,
            session_idle: Duration::from_secs(session_idle_secs),
            max_sessions,
        })
    }

    pub fn stage_duration(&self) -> Option<Duration> {
        (self.stage_seconds > 0).then(|| Duration::from_secs(self.stage_seconds))
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `BACKEND_DB_KIND`: `postgres` (default) or `sqlite-file`.
    pub db_kind: DbKind,
    pub tracker: TrackerConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_var("BACKEND_PORT", 3001u16)?;
        let db_kind = match env::var("BACKEND_DB_KIND").as_deref() {
            Err(_) | Ok("postgres") => DbKind::Postgres,
            Ok("sqlite-file") => DbKind::SqliteFile,
            Ok(other) => {
                return Err(AppError::config(format!(
                    "BACKEND_DB_KIND must be 'postgres' or 'sqlite-file', got '{other}'"
                )))
            }
        };

        Ok(Self {
            host,
            port,
            db_kind,
            tracker: TrackerConfig::from_env()?,
        })
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => raw.trim().parse::<T>().map_err(|_| {
            AppError::config(format!("{name} must be a non-negative integer, got '{raw}'"))
        }),
    }
}

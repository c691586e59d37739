use sea_orm::DatabaseConnection;

use crate::config::TrackerConfig;
use crate::services::tracker::TrackerService;

/// Shared resources handed to every handler through `web::Data`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// `None` in tests that never touch the database.
    db: Option<DatabaseConnection>,
    pub tracker: TrackerService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tracker: TrackerService) -> Self {
        Self {
            db: Some(db),
            tracker,
        }
    }

    pub fn without_db(tracker: TrackerService) -> Self {
        Self { db: None, tracker }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn tracker_config(&self) -> &TrackerConfig {
        self.tracker.config()
    }
}

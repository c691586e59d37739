use archive_backend::adapters::profiles_sea::dto::ProfileCreate;
use archive_backend::adapters::profiles_sea;
use archive_backend::adapters::user_contents_sea::dto::{ContentCreate, UserContentCreate};
use archive_backend::adapters::user_contents_sea;
use archive_backend::entities::profiles;
use db_infra::bootstrap_db;
use db_infra::db::{DbKind, RuntimeEnv};
use sea_orm::DatabaseConnection;
use time::OffsetDateTime;

pub const STATS: &str = r#"{"ambition": 98, "patience": 12.4}"#;

/// Fresh, fully migrated in-memory database.
pub async fn memory_db() -> DatabaseConnection {
    bootstrap_db(RuntimeEnv::Test, DbKind::SqliteMemory)
        .await
        .expect("bootstrap in-memory sqlite")
}

/// A celeb with stats and every text clue.
pub async fn celeb(db: &DatabaseConnection, nickname: &str) -> profiles::Model {
    profiles_sea::create_profile(
        db,
        ProfileCreate::celeb(nickname)
            .with_title("Figure")
            .with_bio(format!("{nickname} was born."))
            .with_philosophy("Keep going.")
            .with_quotes("\"Onward.\"")
            .with_persona_stats(STATS),
    )
    .await
    .expect("insert celeb")
}

pub async fn celeb_without_stats(db: &DatabaseConnection, nickname: &str) -> profiles::Model {
    profiles_sea::create_profile(db, ProfileCreate::celeb(nickname))
        .await
        .expect("insert celeb")
}

pub async fn user(db: &DatabaseConnection, nickname: &str) -> profiles::Model {
    profiles_sea::create_profile(db, ProfileCreate::user(nickname).with_persona_stats(STATS))
        .await
        .expect("insert user")
}

/// Put a new content on `profile_id`'s shelf.
pub async fn shelve(
    db: &DatabaseConnection,
    profile_id: i64,
    content: ContentCreate,
    status: &str,
    rating: Option<f64>,
    updated_at: OffsetDateTime,
) -> i64 {
    let content = user_contents_sea::create_content(db, content)
        .await
        .expect("insert content");
    let mut record = UserContentCreate::new(profile_id, content.id, status).updated_at(updated_at);
    if let Some(rating) = rating {
        record = record.rated(rating);
    }
    user_contents_sea::create_user_content(db, record)
        .await
        .expect("insert user content")
        .id
}

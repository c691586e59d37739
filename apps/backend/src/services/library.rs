//! Library listing for a profile.

use sea_orm::ConnectionTrait;

use crate::domain::library::{apply_query, LibraryPage, LibraryQuery};
use crate::errors::domain::DomainError;
use crate::repos::library::entries_for_profile;

/// Validate `query` before touching the database, then load and shape the page.
pub async fn library_page<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    profile_id: i64,
    query: &LibraryQuery,
) -> Result<LibraryPage, DomainError> {
    query.validate()?;
    let entries = entries_for_profile(conn, profile_id).await?;
    apply_query(entries, query)
}

//! Repository layer for a profile's content library.

use sea_orm::ConnectionTrait;

use crate::adapters::{profiles_sea, user_contents_sea};
use crate::domain::catalog::{ContentStatus, ContentType};
use crate::domain::library::LibraryEntry;
use crate::entities::{contents, user_contents};
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

/// All entries of `profile_id`; unordered, the domain sorts them.
pub async fn entries_for_profile<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    profile_id: i64,
) -> Result<Vec<LibraryEntry>, DomainError> {
    if profiles_sea::find_by_id(conn, profile_id)
        .await
        .map_err(map_db_err)?
        .is_none()
    {
        return Err(DomainError::profile_not_found(profile_id));
    }

    user_contents_sea::library_rows(conn, profile_id)
        .await
        .map_err(map_db_err)?
        .into_iter()
        .map(|(record, content)| {
            let content = content.ok_or_else(|| {
                DomainError::corruption(format!(
                    "user_content_id={} points at missing content_id={}",
                    record.id, record.content_id
                ))
            })?;
            to_entry(record, content)
        })
        .collect()
}

fn to_entry(
    record: user_contents::Model,
    content: contents::Model,
) -> Result<LibraryEntry, DomainError> {
    let status = ContentStatus::parse(&record.status).ok_or_else(|| {
        DomainError::corruption(format!(
            "invalid status '{}' stored for user_content_id={}",
            record.status, record.id
        ))
    })?;
    let content_type = ContentType::parse(&content.content_type).ok_or_else(|| {
        DomainError::corruption(format!(
            "invalid content_type '{}' stored for content_id={}",
            content.content_type, content.id
        ))
    })?;

    Ok(LibraryEntry {
        id: record.id,
        content_id: content.id,
        content_type,
        title: content.title,
        creator: content.creator,
        thumbnail_url: content.thumbnail_url,
        status,
        rating: record.rating,
        review: record.review,
        created_at: record.created_at,
        updated_at: record.updated_at,
    })
}

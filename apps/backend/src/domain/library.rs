//! Library listing: filter, sort, paginate and group a profile's entries.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::catalog::{ContentStatus, ContentType};
use crate::errors::domain::DomainError;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// A user-content record joined with its content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibraryEntry {
    pub id: i64,
    pub content_id: i64,
    pub content_type: ContentType,
    pub title: String,
    pub creator: Option<String>,
    pub thumbnail_url: Option<String>,
    pub status: ContentStatus,
    pub rating: Option<f64>,
    pub review: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LibrarySort {
    #[default]
    Recent,
    Oldest,
    Title,
    Rating,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryQuery {
    pub content_type: Option<ContentType>,
    pub status: Option<ContentStatus>,
    pub search: Option<String>,
    pub sort: LibrarySort,
    pub page: u32,
    pub page_size: u32,
    pub group_by_month: bool,
}

impl Default for LibraryQuery {
    fn default() -> Self {
        Self {
            content_type: None,
            status: None,
            search: None,
            sort: LibrarySort::Recent,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            group_by_month: false,
        }
    }
}

impl LibraryQuery {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.page == 0 {
            return Err(DomainError::validation("page starts at 1"));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(DomainError::validation(format!(
                "page_size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.page_size
            )));
        }
        Ok(())
    }

    fn matches(&self, entry: &LibraryEntry, needle: Option<&str>) -> bool {
        if self.content_type.is_some_and(|t| t != entry.content_type) {
            return false;
        }
        if self.status.is_some_and(|s| s != entry.status) {
            return false;
        }
        match needle {
            None => true,
            Some(needle) => {
                entry.title.to_lowercase().contains(needle)
                    || entry
                        .creator
                        .as_deref()
                        .is_some_and(|c| c.to_lowercase().contains(needle))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGroup {
    /// `YYYY-MM` of `updated_at`
    pub month: String,
    pub items: Vec<LibraryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibraryPage {
    pub items: Vec<LibraryEntry>,
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
    pub has_more: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<MonthGroup>>,
}

fn compare(sort: LibrarySort, a: &LibraryEntry, b: &LibraryEntry) -> Ordering {
    match sort {
        LibrarySort::Recent => b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)),
        LibrarySort::Oldest => a.updated_at.cmp(&b.updated_at).then(a.id.cmp(&b.id)),
        LibrarySort::Title => a
            .title
            .to_lowercase()
            .cmp(&b.title.to_lowercase())
            .then(a.id.cmp(&b.id)),
        LibrarySort::Rating => {
            // Unrated entries sink to the bottom.
            let by_rating = match (a.rating, b.rating) {
                (Some(x), Some(y)) => y.total_cmp(&x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
            by_rating
                .then(b.updated_at.cmp(&a.updated_at))
                .then(b.id.cmp(&a.id))
        }
    }
}

pub fn month_key(at: OffsetDateTime) -> String {
    format!("{:04}-{:02}", at.year(), u8::from(at.month()))
}

/// Groups in order of first appearance; entry order is preserved.
pub fn group_by_month(items: &[LibraryEntry]) -> Vec<MonthGroup> {
    let mut groups: Vec<MonthGroup> = Vec::new();
    for item in items {
        let month = month_key(item.updated_at);
        match groups.iter_mut().find(|g| g.month == month) {
            Some(group) => group.items.push(item.clone()),
            None => groups.push(MonthGroup {
                month,
                items: vec![item.clone()],
            }),
        }
    }
    groups
}

pub fn apply_query(
    entries: Vec<LibraryEntry>,
    query: &LibraryQuery,
) -> Result<LibraryPage, DomainError> {
    query.validate()?;

    let needle = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let mut filtered: Vec<LibraryEntry> = entries
        .into_iter()
        .filter(|e| query.matches(e, needle.as_deref()))
        .collect();
    filtered.sort_by(|a, b| compare(query.sort, a, b));

    let total = filtered.len();
    let page_size = query.page_size as usize;
    let start = (query.page as usize - 1).saturating_mul(page_size);
    let items: Vec<LibraryEntry> = filtered.into_iter().skip(start).take(page_size).collect();
    let has_more = start.saturating_add(items.len()) < total;
    let groups = query.group_by_month.then(|| group_by_month(&items));

    Ok(LibraryPage {
        items,
        total,
        page: query.page,
        page_size: query.page_size,
        has_more,
        groups,
    })
}

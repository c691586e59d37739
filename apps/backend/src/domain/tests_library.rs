use time::macros::datetime;
use time::OffsetDateTime;

use crate::domain::catalog::{ContentStatus, ContentType};
use crate::domain::library::{apply_query, LibraryEntry, LibraryQuery, LibrarySort};

fn entry(
    id: i64,
    title: &str,
    creator: Option<&str>,
    content_type: ContentType,
    status: ContentStatus,
    rating: Option<f64>,
    updated_at: OffsetDateTime,
) -> LibraryEntry {
    LibraryEntry {
        id,
        content_id: id * 10,
        content_type,
        title: title.to_string(),
        creator: creator.map(str::to_string),
        thumbnail_url: None,
        status,
        rating,
        review: None,
        created_at: updated_at,
        updated_at,
    }
}

fn shelf() -> Vec<LibraryEntry> {
    vec![
        entry(1, "Dune", Some("Frank Herbert"), ContentType::Book, ContentStatus::Finished, Some(4.5), datetime!(2024-01-10 09:00 UTC)),
        entry(2, "arrival", None, ContentType::Video, ContentStatus::Want, None, datetime!(2024-02-01 12:00 UTC)),
        entry(3, "Celeste", Some("Maddy Thorson"), ContentType::Game, ContentStatus::InProgress, Some(5.0), datetime!(2024-02-20 08:30 UTC)),
        entry(4, "Blue Train", Some("John Coltrane"), ContentType::Music, ContentStatus::Finished, Some(3.0), datetime!(2023-12-31 23:59 UTC)),
        entry(5, "Children of Dune", Some("Frank Herbert"), ContentType::Book, ContentStatus::Dropped, None, datetime!(2024-02-05 10:00 UTC)),
    ]
}

fn ids(page: &crate::domain::library::LibraryPage) -> Vec<i64> {
    page.items.iter().map(|e| e.id).collect()
}

#[test]
fn default_sort_is_most_recent_first() {
    let page = apply_query(shelf(), &LibraryQuery::default()).unwrap();
    assert_eq!(ids(&page), vec![3, 5, 2, 1, 4]);
    assert_eq!(page.total, 5);
    assert!(!page.has_more);
    assert!(page.groups.is_none());
}

#[test]
fn oldest_and_title_sorts() {
    let oldest = LibraryQuery {
        sort: LibrarySort::Oldest,
        ..LibraryQuery::default()
    };
    assert_eq!(ids(&apply_query(shelf(), &oldest).unwrap()), vec![4, 1, 2, 5, 3]);

    let by_title = LibraryQuery {
        sort: LibrarySort::Title,
        ..LibraryQuery::default()
    };
    // Case-insensitive: "arrival" sorts before "Blue Train".
    assert_eq!(ids(&apply_query(shelf(), &by_title).unwrap()), vec![2, 4, 3, 5, 1]);
}

#[test]
fn rating_sort_puts_unrated_last() {
    let q = LibraryQuery {
        sort: LibrarySort::Rating,
        ..LibraryQuery::default()
    };
    // Unrated ties fall back to most recent first.
    assert_eq!(ids(&apply_query(shelf(), &q).unwrap()), vec![3, 1, 4, 5, 2]);
}

#[test]
fn filters_combine() {
    let q = LibraryQuery {
        content_type: Some(ContentType::Book),
        status: Some(ContentStatus::Finished),
        ..LibraryQuery::default()
    };
    assert_eq!(ids(&apply_query(shelf(), &q).unwrap()), vec![1]);
}

#[test]
fn search_matches_title_or_creator_case_insensitively() {
    let q = LibraryQuery {
        search: Some("  HERBERT ".to_string()),
        ..LibraryQuery::default()
    };
    assert_eq!(ids(&apply_query(shelf(), &q).unwrap()), vec![5, 1]);

    let q = LibraryQuery {
        search: Some("train".to_string()),
        ..LibraryQuery::default()
    };
    assert_eq!(ids(&apply_query(shelf(), &q).unwrap()), vec![4]);

    let blank = LibraryQuery {
        search: Some("   ".to_string()),
        ..LibraryQuery::default()
    };
    assert_eq!(apply_query(shelf(), &blank).unwrap().total, 5);
}

#[test]
fn pagination_reports_total_and_has_more() {
    let q = LibraryQuery {
        page: 2,
        page_size: 2,
        ..LibraryQuery::default()
    };
    let page = apply_query(shelf(), &q).unwrap();
    assert_eq!(ids(&page), vec![2, 1]);
    assert_eq!(page.total, 5);
    assert!(page.has_more);

    let last = LibraryQuery {
        page: 3,
        page_size: 2,
        ..LibraryQuery::default()
    };
    let page = apply_query(shelf(), &last).unwrap();
    assert_eq!(ids(&page), vec![4]);
    assert!(!page.has_more);

    let beyond = LibraryQuery {
        page: 9,
        page_size: 2,
        ..LibraryQuery::default()
    };
    let page = apply_query(shelf(), &beyond).unwrap();
    assert!(page.items.is_empty());
    assert!(!page.has_more);
}

#[test]
fn invalid_paging_is_rejected() {
    for (page, page_size) in [(0, 20), (1, 0), (1, 101)] {
        let q = LibraryQuery {
            page,
            page_size,
            ..LibraryQuery::default()
        };
        assert!(apply_query(shelf(), &q).is_err(), "page={page} size={page_size}");
    }
}

#[test]
fn grouping_keeps_sort_order() {
    let q = LibraryQuery {
        group_by_month: true,
        ..LibraryQuery::default()
    };
    let page = apply_query(shelf(), &q).unwrap();
    let groups = page.groups.unwrap();
    let months: Vec<&str> = groups.iter().map(|g| g.month.as_str()).collect();
    assert_eq!(months, vec!["2024-02", "2024-01", "2023-12"]);
    let feb: Vec<i64> = groups[0].items.iter().map(|e| e.id).collect();
    assert_eq!(feb, vec![3, 5, 2]);
}

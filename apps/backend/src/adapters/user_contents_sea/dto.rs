//! DTOs for user_contents_sea adapter.

use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub struct ContentCreate {
    pub content_type: String,
    pub title: String,
    pub creator: Option<String>,
    pub thumbnail_url: Option<String>,
}

impl ContentCreate {
    pub fn new(content_type: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            title: title.into(),
            creator: None,
            thumbnail_url: None,
        }
    }

    pub fn by(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }
}

/// DTO for attaching a content to a profile's library.
#[derive(Debug, Clone)]
pub struct UserContentCreate {
    pub profile_id: i64,
    pub content_id: i64,
    pub status: String,
    pub rating: Option<f64>,
    pub review: Option<String>,
    /// Defaults to now.
    pub updated_at: Option<OffsetDateTime>,
}

impl UserContentCreate {
    pub fn new(profile_id: i64, content_id: i64, status: impl Into<String>) -> Self {
        Self {
            profile_id,
            content_id,
            status: status.into(),
            rating: None,
            review: None,
            updated_at: None,
        }
    }

    pub fn rated(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn updated_at(mut self, at: OffsetDateTime) -> Self {
        self.updated_at = Some(at);
        self
    }
}

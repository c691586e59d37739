//! DTOs for profiles_sea adapter.

/// DTO for inserting a profile.
#[derive(Debug, Clone, Default)]
pub struct ProfileCreate {
    pub nickname: String,
    pub profile_type: String,
    pub title: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub philosophy: Option<String>,
    pub quotes: Option<String>,
    pub persona_stats: Option<String>,
}

impl ProfileCreate {
    pub fn user(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            profile_type: "USER".to_string(),
            ..Self::default()
        }
    }

    pub fn celeb(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            profile_type: "CELEB".to_string(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn with_philosophy(mut self, philosophy: impl Into<String>) -> Self {
        self.philosophy = Some(philosophy.into());
        self
    }

    pub fn with_quotes(mut self, quotes: impl Into<String>) -> Self {
        self.quotes = Some(quotes.into());
        self
    }

    /// Raw JSON text, stored as-is.
    pub fn with_persona_stats(mut self, json: impl Into<String>) -> Self {
        self.persona_stats = Some(json.into());
        self
    }
}

/// Projection used for decoys and the autocomplete list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CelebSummary {
    pub id: i64,
    pub nickname: String,
    pub avatar_url: Option<String>,
}

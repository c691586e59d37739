//! Hand-built rounds for tests and local demos.

use super::catalog::ContentType;
use super::round::{Candidate, PersonaStat, Round, RoundContent};

/// Builder for a `Round` with every clue present unless removed.
#[derive(Debug, Clone)]
pub struct RoundFixture {
    round: Round,
}

impl RoundFixture {
    /// A subject with two decoys, three contents and all text clues.
    pub fn new(subject_id: i64, name: &str) -> Self {
        let round = Round {
            subject_id,
            subject_name: name.to_string(),
            title: Some("Emperor of the French".to_string()),
            avatar_url: None,
            stats: vec![
                PersonaStat {
                    label: "ambition".to_string(),
                    value: 98,
                },
                PersonaStat {
                    label: "patience".to_string(),
                    value: 12,
                },
            ],
            contents: (1..=3)
                .map(|i| RoundContent {
                    content_type: ContentType::Book,
                    title: format!("Book {i}"),
                    creator: Some(format!("Author {i}")),
                    thumbnail_url: None,
                })
                .collect(),
            philosophy: Some("Impossible is a word found only in the dictionary of fools.".to_string()),
            bio: Some("Born in Corsica.".to_string()),
            quotes: Some("\"Glory is fleeting, but obscurity is forever.\"".to_string()),
            candidates: vec![
                Candidate {
                    id: subject_id + 100,
                    nickname: "Decoy One".to_string(),
                    avatar_url: None,
                },
                Candidate {
                    id: subject_id,
                    nickname: name.to_string(),
                    avatar_url: None,
                },
                Candidate {
                    id: subject_id + 200,
                    nickname: "Decoy Two".to_string(),
                    avatar_url: None,
                },
            ],
        };
        Self { round }
    }

    pub fn contents(mut self, n: usize) -> Self {
        self.round.contents = (1..=n)
            .map(|i| RoundContent {
                content_type: ContentType::Video,
                title: format!("Video {i}"),
                creator: None,
                thumbnail_url: None,
            })
            .collect();
        self
    }

    pub fn without_philosophy(mut self) -> Self {
        self.round.philosophy = None;
        self
    }

    pub fn without_bio(mut self) -> Self {
        self.round.bio = None;
        self
    }

    /// Blank text counts as absent.
    pub fn blank_quotes(mut self) -> Self {
        self.round.quotes = Some("   ".to_string());
        self
    }

    pub fn without_quotes(mut self) -> Self {
        self.round.quotes = None;
        self
    }

    pub fn build(self) -> Round {
        self.round
    }
}

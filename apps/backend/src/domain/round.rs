//! One tracker round: the subject, its clues and the multiple-choice list.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::ContentType;

/// Most content items a round carries.
pub const MAX_ROUND_CONTENTS: usize = 5;
/// Decoy candidates drawn next to the subject.
pub const MAX_DECOYS: usize = 3;
/// A choice stage needs somebody to pick against.
pub const MIN_DECOYS: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaStat {
    pub label: String,
    pub value: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundContent {
    pub content_type: ContentType,
    pub title: String,
    pub creator: Option<String>,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: i64,
    pub nickname: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub subject_id: i64,
    pub subject_name: String,
    pub title: Option<String>,
    pub avatar_url: Option<String>,
    pub stats: Vec<PersonaStat>,
    pub contents: Vec<RoundContent>,
    pub philosophy: Option<String>,
    pub bio: Option<String>,
    pub quotes: Option<String>,
    pub candidates: Vec<Candidate>,
}

impl Round {
    pub fn has_contents(&self) -> bool {
        !self.contents.is_empty()
    }

    pub fn has_philosophy(&self) -> bool {
        non_blank(&self.philosophy)
    }

    pub fn has_bio(&self) -> bool {
        non_blank(&self.bio)
    }

    pub fn has_quotes(&self) -> bool {
        non_blank(&self.quotes)
    }

    pub fn content_count(&self) -> usize {
        self.contents.len().min(MAX_ROUND_CONTENTS)
    }

    pub fn is_candidate(&self, id: i64) -> bool {
        self.candidates.iter().any(|c| c.id == id)
    }
}

fn non_blank(text: &Option<String>) -> bool {
    text.as_deref().is_some_and(|t| !t.trim().is_empty())
}

/// Parse the stored persona stat object (`{"label": 0..=100, ...}`), keeping
/// key order. Values may be integers or floats and are rounded.
pub fn parse_persona_stats(raw: &str) -> Result<Vec<PersonaStat>, String> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| format!("persona_stats is not JSON: {e}"))?;
    let serde_json::Value::Object(map) = value else {
        return Err("persona_stats must be a JSON object".to_string());
    };

    map.into_iter()
        .map(|(label, v)| {
            let n = v
                .as_f64()
                .ok_or_else(|| format!("persona stat '{label}' is not a number"))?;
            if !(0.0..=100.0).contains(&n) {
                return Err(format!("persona stat '{label}' out of range: {n}"));
            }
            Ok(PersonaStat {
                label,
                value: n.round() as u8,
            })
        })
        .collect()
}

//! Text-backed enums shared by profiles, contents and library entries.
//!
//! The database stores the SCREAMING_SNAKE_CASE spelling; `parse` returns
//! `None` for anything else so callers can report corruption.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfileType {
    User,
    Celeb,
}

impl ProfileType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Celeb => "CELEB",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "USER" => Some(Self::User),
            "CELEB" => Some(Self::Celeb),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    Book,
    Video,
    Game,
    Music,
    Certificate,
}

impl ContentType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Book => "BOOK",
            Self::Video => "VIDEO",
            Self::Game => "GAME",
            Self::Music => "MUSIC",
            Self::Certificate => "CERTIFICATE",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "BOOK" => Some(Self::Book),
            "VIDEO" => Some(Self::Video),
            "GAME" => Some(Self::Game),
            "MUSIC" => Some(Self::Music),
            "CERTIFICATE" => Some(Self::Certificate),
            _ => None,
        }
    }
}

/// Where a profile stands with one piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentStatus {
    Want,
    InProgress,
    Finished,
    Dropped,
}

impl ContentStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Want => "WANT",
            Self::InProgress => "IN_PROGRESS",
            Self::Finished => "FINISHED",
            Self::Dropped => "DROPPED",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "WANT" => Some(Self::Want),
            "IN_PROGRESS" => Some(Self::InProgress),
            "FINISHED" => Some(Self::Finished),
            "DROPPED" => Some(Self::Dropped),
            _ => None,
        }
    }
}

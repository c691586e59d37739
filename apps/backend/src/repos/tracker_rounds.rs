//! Round collaborators: building a tracker round and the celeb name list.

use async_trait::async_trait;
use rand::seq::{IndexedRandom, SliceRandom};
use sea_orm::{ConnectionTrait, DatabaseConnection};
use serde::Serialize;
use tracing::debug;

use crate::adapters::{profiles_sea, user_contents_sea};
use crate::domain::catalog::ContentType;
use crate::domain::round::{
    parse_persona_stats, Candidate, Round, RoundContent, MAX_DECOYS, MAX_ROUND_CONTENTS,
    MIN_DECOYS,
};
use crate::entities::{contents, profiles};
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;
use crate::services::tracker::RoundSource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CelebName {
    pub id: i64,
    pub nickname: String,
}

/// Pick a random celeb outside `excluded` that has persona stats and build
/// its round. `None` when nobody eligible is left, or when no other celeb
/// exists to stand in as a decoy.
pub async fn fetch_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    excluded: &[i64],
) -> Result<Option<Round>, DomainError> {
    let pool = profiles_sea::celeb_stats_excluding(conn, excluded)
        .await
        .map_err(map_db_err)?;

    let eligible: Vec<i64> = pool
        .into_iter()
        .filter(|(_, raw)| has_stats(raw.as_deref()))
        .map(|(id, _)| id)
        .collect();

    let Some(subject_id) = eligible.choose(&mut rand::rng()).copied() else {
        debug!(excluded = excluded.len(), "tracker.round_pool_empty");
        return Ok(None);
    };

    let profile = profiles_sea::find_by_id(conn, subject_id)
        .await
        .map_err(map_db_err)?
        .ok_or_else(|| DomainError::profile_not_found(subject_id))?;

    let shelf = user_contents_sea::recent_contents_for_profile(
        conn,
        subject_id,
        MAX_ROUND_CONTENTS as u64,
    )
    .await
    .map_err(map_db_err)?;

    let decoy_pool = profiles_sea::celeb_summaries(conn, Some(subject_id))
        .await
        .map_err(map_db_err)?;
    if decoy_pool.len() < MIN_DECOYS {
        debug!(subject_id, decoys = decoy_pool.len(), "tracker.round_without_decoys");
        return Ok(None);
    }

    let mut candidates: Vec<Candidate> = {
        let mut rng = rand::rng();
        decoy_pool
            .choose_multiple(&mut rng, MAX_DECOYS)
            .map(|c| Candidate {
                id: c.id,
                nickname: c.nickname.clone(),
                avatar_url: c.avatar_url.clone(),
            })
            .collect()
    };
    candidates.push(Candidate {
        id: profile.id,
        nickname: profile.nickname.clone(),
        avatar_url: profile.avatar_url.clone(),
    });
    candidates.shuffle(&mut rand::rng());

    let contents = shelf
        .into_iter()
        .map(round_content)
        .collect::<Result<Vec<_>, _>>()?;

    build_round(profile, contents, candidates).map(Some)
}

/// Every celeb, ordered by nickname.
pub async fn celeb_names<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<CelebName>, DomainError> {
    let rows = profiles_sea::celeb_summaries(conn, None)
        .await
        .map_err(map_db_err)?;
    Ok(rows
        .into_iter()
        .map(|c| CelebName {
            id: c.id,
            nickname: c.nickname,
        })
        .collect())
}

/// `RoundSource` backed by the application database.
#[derive(Debug, Clone)]
pub struct SeaRoundSource {
    db: DatabaseConnection,
}

impl SeaRoundSource {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoundSource for SeaRoundSource {
    async fn fetch_round(&self, excluded_ids: &[i64]) -> Result<Option<Round>, DomainError> {
        fetch_round(&self.db, excluded_ids).await
    }

    async fn celeb_names(&self) -> Result<Vec<CelebName>, DomainError> {
        celeb_names(&self.db).await
    }
}

fn has_stats(raw: Option<&str>) -> bool {
    raw.and_then(|r| parse_persona_stats(r).ok())
        .is_some_and(|stats| !stats.is_empty())
}

fn round_content(model: contents::Model) -> Result<RoundContent, DomainError> {
    let content_type = ContentType::parse(&model.content_type).ok_or_else(|| {
        DomainError::corruption(format!(
            "invalid content_type '{}' stored for content_id={}",
            model.content_type, model.id
        ))
    })?;
    Ok(RoundContent {
        content_type,
        title: model.title,
        creator: model.creator,
        thumbnail_url: model.thumbnail_url,
    })
}

fn build_round(
    profile: profiles::Model,
    contents: Vec<RoundContent>,
    candidates: Vec<Candidate>,
) -> Result<Round, DomainError> {
    let stats = parse_persona_stats(profile.persona_stats.as_deref().unwrap_or("{}"))
        .map_err(|e| DomainError::corruption(format!("profile_id={}: {e}", profile.id)))?;

    Ok(Round {
        subject_id: profile.id,
        subject_name: profile.nickname,
        title: profile.title,
        avatar_url: profile.avatar_url,
        stats,
        contents,
        philosophy: profile.philosophy,
        bio: profile.bio,
        quotes: profile.quotes,
        candidates,
    })
}

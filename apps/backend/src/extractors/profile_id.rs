use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Positive `{profile_id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileId(pub i64);

impl FromRequest for ProfileId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse(req.match_info().get("profile_id")))
    }
}

fn parse(raw: Option<&str>) -> Result<ProfileId, AppError> {
    let raw = raw.ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidProfileId, "Missing profile_id parameter")
    })?;
    let id = raw.parse::<i64>().map_err(|_| {
        AppError::bad_request(
            ErrorCode::InvalidProfileId,
            format!("Invalid profile id: {raw}"),
        )
    })?;
    if id <= 0 {
        return Err(AppError::bad_request(
            ErrorCode::InvalidProfileId,
            format!("Profile id must be positive, got: {id}"),
        ));
    }
    Ok(ProfileId(id))
}

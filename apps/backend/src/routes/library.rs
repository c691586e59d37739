use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::domain::catalog::{ContentStatus, ContentType};
use crate::domain::library::{LibraryQuery, LibrarySort, DEFAULT_PAGE_SIZE};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{ProfileId, ValidatedQuery};
use crate::services::library::library_page;
use crate::state::app_state::AppState;

/// Raw query string of `GET /api/profiles/{id}/library`.
#[derive(Debug, Default, Deserialize)]
pub struct LibraryParams {
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub status: Option<String>,
    pub q: Option<String>,
    pub sort: Option<LibrarySort>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    #[serde(default)]
    pub group_by_month: bool,
}

impl LibraryParams {
    pub fn into_query(self) -> Result<LibraryQuery, AppError> {
        let content_type = self
            .content_type
            .map(|raw| {
                ContentType::parse(&raw.to_ascii_uppercase()).ok_or_else(|| {
                    AppError::invalid(
                        ErrorCode::ValidationError,
                        format!("Unknown content type: {raw}"),
                    )
                })
            })
            .transpose()?;
        let status = self
            .status
            .map(|raw| {
                ContentStatus::parse(&raw.to_ascii_uppercase()).ok_or_else(|| {
                    AppError::invalid(ErrorCode::ValidationError, format!("Unknown status: {raw}"))
                })
            })
            .transpose()?;

        Ok(LibraryQuery {
            content_type,
            status,
            search: self.q,
            sort: self.sort.unwrap_or_default(),
            page: self.page.unwrap_or(1),
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            group_by_month: self.group_by_month,
        })
    }
}

async fn library(
    profile_id: ProfileId,
    params: ValidatedQuery<LibraryParams>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let query = params.into_inner().into_query()?;
    let db = require_db(&app_state)?;
    let ProfileId(id) = profile_id;

    let page = with_txn(db, move |txn| {
        Box::pin(async move { Ok::<_, AppError>(library_page(txn, id, &query).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(page))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{profile_id}/library", web::get().to(library));
}

//! Handlers for `/skill-profiles` endpoints.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Deserialize;
use skillbase_core::{
  Error as DomainError, page::SortDir, profile::SkillProfile, store::SkillStore,
};

use crate::{
  error::ApiError,
  requests::CatalogBody,
  views::{page_or_list, page_request},
};

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub page:      Option<u32>,
  pub size:      Option<u32>,
  pub sort:      Option<SortDir>,
  pub paginated: Option<bool>,
}

/// `GET /skill-profiles` — plain array by default, page envelope with
/// `?paginated=true`.
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Response, ApiError>
where
  S: SkillStore,
{
  let paginated = params.paginated.unwrap_or(false);
  let request =
    paginated.then(|| page_request(params.page, params.size, params.sort));
  let page = store
    .list_skill_profiles(request)
    .await
    .map_err(ApiError::from_store)?;
  Ok(page_or_list(page, paginated))
}

/// `POST /skill-profiles`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CatalogBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: SkillStore,
{
  let input = body.into_skill_profile()?;
  let profile = store
    .create_skill_profile(input)
    .await
    .map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(profile)))
}

/// `GET /skill-profiles/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<SkillProfile>, ApiError>
where
  S: SkillStore,
{
  let profile = store
    .get_skill_profile(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::from(DomainError::not_found("Skill profile", id)))?;
  Ok(Json(profile))
}

/// `PUT /skill-profiles/{id}`
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<CatalogBody>,
) -> Result<Json<SkillProfile>, ApiError>
where
  S: SkillStore,
{
  let input = body.into_skill_profile()?;
  let profile = store
    .update_skill_profile(id, input)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(profile))
}

/// `DELETE /skill-profiles/{id}`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: SkillStore,
{
  store
    .delete_skill_profile(id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(StatusCode::NO_CONTENT)
}

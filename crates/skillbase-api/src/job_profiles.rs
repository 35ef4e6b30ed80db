//! Handlers for `/job-profiles` endpoints.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Deserialize;
use skillbase_core::{
  Error as DomainError, page::SortDir, profile::JobProfile, skill::Skill,
  store::SkillStore,
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

/// `GET /job-profiles`
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
    .list_job_profiles(request)
    .await
    .map_err(ApiError::from_store)?;
  Ok(page_or_list(page, paginated))
}

/// `POST /job-profiles`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CatalogBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: SkillStore,
{
  let input = body.into_job_profile()?;
  let profile = store
    .create_job_profile(input)
    .await
    .map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(profile)))
}

/// `GET /job-profiles/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<JobProfile>, ApiError>
where
  S: SkillStore,
{
  let profile = store
    .get_job_profile(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::from(DomainError::not_found("Job profile", id)))?;
  Ok(Json(profile))
}

/// `PUT /job-profiles/{id}`
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<CatalogBody>,
) -> Result<Json<JobProfile>, ApiError>
where
  S: SkillStore,
{
  let input = body.into_job_profile()?;
  let profile = store
    .update_job_profile(id, input)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(profile))
}

/// `DELETE /job-profiles/{id}` — 409 while assignments or skill links exist.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: SkillStore,
{
  store
    .delete_job_profile(id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(StatusCode::NO_CONTENT)
}

/// `GET /job-profiles/{id}/skills`
pub async fn skills<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Vec<Skill>>, ApiError>
where
  S: SkillStore,
{
  let skills = store
    .skills_for_job_profile(id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(skills))
}

//! Handlers for `/skills` endpoints.
//!
//! Skill responses embed the skill's job profiles and grades
//! ([`SkillResponse`]); listing assembles them per row.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use skillbase_core::{
  Error as DomainError,
  page::{Page, SortDir},
  profile::JobProfile,
  store::SkillStore,
};

use crate::{
  error::ApiError,
  requests::CatalogBody,
  views::{SkillResponse, page_request},
};

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub page: Option<u32>,
  pub size: Option<u32>,
  pub sort: Option<SortDir>,
}

/// `GET /skills` — always paged.
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Page<SkillResponse>>, ApiError>
where
  S: SkillStore,
{
  let request = page_request(params.page, params.size, params.sort);
  let page = store
    .list_skills(Some(request))
    .await
    .map_err(ApiError::from_store)?;

  let mut content = Vec::with_capacity(page.content.len());
  for skill in page.content {
    content.push(SkillResponse::assemble(store.as_ref(), skill).await?);
  }

  Ok(Json(Page {
    content,
    page: page.page,
    size: page.size,
    total_elements: page.total_elements,
    total_pages: page.total_pages,
  }))
}

/// `POST /skills`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CatalogBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: SkillStore,
{
  let input = body.into_skill()?;
  let skill = store.create_skill(input).await.map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(SkillResponse::for_new(skill))))
}

/// `GET /skills/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<SkillResponse>, ApiError>
where
  S: SkillStore,
{
  let skill = store
    .get_skill(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::from(DomainError::not_found("Skill", id)))?;
  Ok(Json(SkillResponse::assemble(store.as_ref(), skill).await?))
}

/// `PUT /skills/{id}`
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<CatalogBody>,
) -> Result<Json<SkillResponse>, ApiError>
where
  S: SkillStore,
{
  let input = body.into_skill()?;
  let skill = store
    .update_skill(id, input)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(SkillResponse::assemble(store.as_ref(), skill).await?))
}

/// `DELETE /skills/{id}` — 409 while grades or job-profile links exist.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: SkillStore,
{
  store.delete_skill(id).await.map_err(ApiError::from_store)?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Job profile links ───────────────────────────────────────────────────────

/// `GET /skills/{id}/job-profiles`
pub async fn job_profiles<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Vec<JobProfile>>, ApiError>
where
  S: SkillStore,
{
  let profiles = store
    .job_profiles_for_skill(id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(profiles))
}

/// `POST /skills/{id}/job-profiles/{jpId}`
pub async fn link_job_profile<S>(
  State(store): State<Arc<S>>,
  Path((id, job_profile_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError>
where
  S: SkillStore,
{
  store
    .link_job_profile_skill(job_profile_id, id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /skills/{id}/job-profiles/{jpId}`
pub async fn unlink_job_profile<S>(
  State(store): State<Arc<S>>,
  Path((id, job_profile_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError>
where
  S: SkillStore,
{
  store
    .unlink_job_profile_skill(job_profile_id, id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(StatusCode::NO_CONTENT)
}

//! Handlers for `/skill-grades` endpoints.
//!
//! Responses denormalize the owning skill's name ([`SkillGradeResponse`]).

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Deserialize;
use skillbase_core::{
  Error as DomainError,
  page::{Page, SortDir},
  store::SkillStore,
};

use crate::{
  error::ApiError,
  requests::GradeBody,
  views::{SkillGradeResponse, page_or_list, page_request},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
  pub skill_id:  Option<i64>,
  pub page:      Option<u32>,
  pub size:      Option<u32>,
  pub sort:      Option<SortDir>,
  pub paginated: Option<bool>,
}

/// `GET /skill-grades` — `?skillId=` narrows to one skill's grades (404 if
/// the skill is absent); otherwise plain array or page envelope.
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Response, ApiError>
where
  S: SkillStore,
{
  if let Some(skill_id) = params.skill_id {
    let grades = store
      .skill_grades_for_skill(skill_id)
      .await
      .map_err(ApiError::from_store)?;
    let mut out = Vec::with_capacity(grades.len());
    for grade in grades {
      out.push(SkillGradeResponse::assemble(store.as_ref(), grade).await?);
    }
    return Ok(Json(out).into_response());
  }

  let paginated = params.paginated.unwrap_or(false);
  let request =
    paginated.then(|| page_request(params.page, params.size, params.sort));
  let page = store
    .list_skill_grades(request)
    .await
    .map_err(ApiError::from_store)?;

  let mut content = Vec::with_capacity(page.content.len());
  for grade in page.content {
    content.push(SkillGradeResponse::assemble(store.as_ref(), grade).await?);
  }

  Ok(page_or_list(
    Page {
      content,
      page: page.page,
      size: page.size,
      total_elements: page.total_elements,
      total_pages: page.total_pages,
    },
    paginated,
  ))
}

/// `POST /skill-grades` — 404 if the referenced skill is missing, 409 on a
/// duplicate code within the skill.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<GradeBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: SkillStore,
{
  let input = body.validate()?;
  let grade = store
    .create_skill_grade(input)
    .await
    .map_err(ApiError::from_store)?;
  let response = SkillGradeResponse::assemble(store.as_ref(), grade).await?;
  Ok((StatusCode::CREATED, Json(response)))
}

/// `GET /skill-grades/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<SkillGradeResponse>, ApiError>
where
  S: SkillStore,
{
  let grade = store
    .get_skill_grade(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::from(DomainError::not_found("Skill grade", id)))?;
  Ok(Json(SkillGradeResponse::assemble(store.as_ref(), grade).await?))
}

/// `PUT /skill-grades/{id}`
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<GradeBody>,
) -> Result<Json<SkillGradeResponse>, ApiError>
where
  S: SkillStore,
{
  let input = body.validate()?;
  let grade = store
    .update_skill_grade(id, input)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(SkillGradeResponse::assemble(store.as_ref(), grade).await?))
}

/// `DELETE /skill-grades/{id}` — 409 while assessments reference it.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: SkillStore,
{
  store
    .delete_skill_grade(id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(StatusCode::NO_CONTENT)
}

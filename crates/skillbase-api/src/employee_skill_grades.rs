//! Handlers for `/employee-skill-grades` endpoints.
//!
//! Responses denormalize the employee's and reviewer's names plus the
//! skill/grade identity ([`EmployeeSkillGradeResponse`]).

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
  assessment::EmployeeSkillGrade,
  page::{Page, SortDir},
  store::SkillStore,
};

use crate::{
  error::ApiError,
  requests::AssessmentBody,
  views::{EmployeeSkillGradeResponse, page_or_list, page_request},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
  pub employee_id:    Option<i64>,
  pub skill_grade_id: Option<i64>,
  pub page:           Option<u32>,
  pub size:           Option<u32>,
  pub sort:           Option<SortDir>,
  pub paginated:      Option<bool>,
}

async fn assemble_all<S>(
  store: &S,
  esgs: Vec<EmployeeSkillGrade>,
) -> Result<Vec<EmployeeSkillGradeResponse>, ApiError>
where
  S: SkillStore,
{
  let mut out = Vec::with_capacity(esgs.len());
  for esg in esgs {
    out.push(EmployeeSkillGradeResponse::assemble(store, esg).await?);
  }
  Ok(out)
}

/// `GET /employee-skill-grades` — `?employeeId=` or `?skillGradeId=` narrows
/// to one owner (404 if the owner is absent).
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Response, ApiError>
where
  S: SkillStore,
{
  if let Some(employee_id) = params.employee_id {
    let esgs = store
      .employee_skill_grades_for_employee(employee_id)
      .await
      .map_err(ApiError::from_store)?;
    return Ok(Json(assemble_all(store.as_ref(), esgs).await?).into_response());
  }
  if let Some(skill_grade_id) = params.skill_grade_id {
    let esgs = store
      .employee_skill_grades_for_skill_grade(skill_grade_id)
      .await
      .map_err(ApiError::from_store)?;
    return Ok(Json(assemble_all(store.as_ref(), esgs).await?).into_response());
  }

  let paginated = params.paginated.unwrap_or(false);
  let request =
    paginated.then(|| page_request(params.page, params.size, params.sort));
  let page = store
    .list_employee_skill_grades(request)
    .await
    .map_err(ApiError::from_store)?;

  let content = assemble_all(store.as_ref(), page.content).await?;
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

/// `POST /employee-skill-grades` — 409 if the (employee, grade) pair already
/// has an assessment; 404 for any missing referenced entity.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<AssessmentBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: SkillStore,
{
  let input = body.validate()?;
  let esg = store
    .create_employee_skill_grade(input)
    .await
    .map_err(ApiError::from_store)?;
  let response = EmployeeSkillGradeResponse::assemble(store.as_ref(), esg).await?;
  Ok((StatusCode::CREATED, Json(response)))
}

/// `GET /employee-skill-grades/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<EmployeeSkillGradeResponse>, ApiError>
where
  S: SkillStore,
{
  let esg = store
    .get_employee_skill_grade(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| {
      ApiError::from(DomainError::not_found("Employee skill grade", id))
    })?;
  Ok(Json(EmployeeSkillGradeResponse::assemble(store.as_ref(), esg).await?))
}

/// `PUT /employee-skill-grades/{id}`
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<AssessmentBody>,
) -> Result<Json<EmployeeSkillGradeResponse>, ApiError>
where
  S: SkillStore,
{
  let input = body.validate()?;
  let esg = store
    .update_employee_skill_grade(id, input)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(EmployeeSkillGradeResponse::assemble(store.as_ref(), esg).await?))
}

/// `DELETE /employee-skill-grades/{id}`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: SkillStore,
{
  store
    .delete_employee_skill_grade(id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(StatusCode::NO_CONTENT)
}
